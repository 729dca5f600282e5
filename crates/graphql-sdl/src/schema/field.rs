use crate::ast;
use crate::schema::TypeRef;
use crate::wiring::DataFetcher;
use std::sync::Arc;

/// A realized output field of an [`crate::schema::ObjectType`] or
/// [`crate::schema::InterfaceType`], with its data fetcher attached.
#[derive(Clone)]
pub struct FieldDef {
    pub arguments: Vec<ArgumentDef>,
    pub data_fetcher: Arc<dyn DataFetcher>,
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub name: String,
    pub type_ref: TypeRef,
}
impl FieldDef {
    pub fn argument(&self, name: &str) -> Option<&ArgumentDef> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
impl std::fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDef")
            .field("arguments", &self.arguments)
            .field("description", &self.description)
            .field("directives", &self.directives)
            .field("name", &self.name)
            .field("type_ref", &self.type_ref)
            .finish_non_exhaustive()
    }
}

/// A realized argument of a [`FieldDef`].
#[derive(Clone, Debug)]
pub struct ArgumentDef {
    pub default_value: Option<ast::Value>,
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub name: String,
    pub type_ref: TypeRef,
}

/// A realized field of an [`crate::schema::InputObjectType`].
#[derive(Clone, Debug)]
pub struct InputFieldDef {
    pub default_value: Option<ast::Value>,
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub name: String,
    pub type_ref: TypeRef,
}

/// A realized value of an [`crate::schema::EnumType`].
#[derive(Clone, Debug)]
pub struct EnumValueDef {
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub name: String,
}
