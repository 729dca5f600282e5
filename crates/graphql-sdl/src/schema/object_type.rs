use crate::ast;
use crate::schema::FieldDef;

/// A realized object type. Field order is declaration order; duplicate
/// field names are preserved for the validator to report.
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub fields: Vec<FieldDef>,
    pub implements: Vec<String>,
    pub name: String,
}
impl ObjectType {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }
}
