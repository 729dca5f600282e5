use crate::ast;
use crate::schema::FieldDef;
use crate::wiring::TypeResolver;
use std::sync::Arc;

/// A realized interface type. The resolver, when present, maps a runtime
/// value to the name of the concrete object type implementing it.
#[derive(Clone)]
pub struct InterfaceType {
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub fields: Vec<FieldDef>,
    pub name: String,
    pub type_resolver: Option<Arc<dyn TypeResolver>>,
}
impl InterfaceType {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }
}
impl std::fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceType")
            .field("description", &self.description)
            .field("directives", &self.directives)
            .field("fields", &self.fields)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
