use crate::ast;
use crate::schema::EnumValueDef;

/// A realized enum type. Value order is declaration order; duplicate value
/// names are preserved for the validator to report.
#[derive(Clone, Debug)]
pub struct EnumType {
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub name: String,
    pub values: Vec<EnumValueDef>,
}
impl EnumType {
    pub fn value(&self, name: &str) -> Option<&EnumValueDef> {
        self.values.iter().find(|value| value.name == name)
    }
}
