use crate::ast;
use crate::schema::InputFieldDef;

/// A realized input object type.
#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub input_fields: Vec<InputFieldDef>,
    pub name: String,
}
impl InputObjectType {
    pub fn input_field(&self, name: &str) -> Option<&InputFieldDef> {
        self.input_fields.iter().find(|field| field.name == name)
    }
}
