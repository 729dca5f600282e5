use crate::schema::ArgumentDef;

/// A realized directive definition carried on the [`crate::Schema`].
#[derive(Clone, Debug)]
pub struct SchemaDirectiveDef {
    pub arguments: Vec<ArgumentDef>,
    pub description: Option<String>,
    pub locations: Vec<String>,
    pub name: String,
    pub repeatable: bool,
}
