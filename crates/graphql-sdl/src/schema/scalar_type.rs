use crate::ast;
use crate::wiring::Coercing;
use std::sync::Arc;

/// A realized scalar type with its coercing behavior attached.
#[derive(Clone)]
pub struct ScalarType {
    pub coercing: Arc<dyn Coercing>,
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub name: String,
}
impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("description", &self.description)
            .field("directives", &self.directives)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
