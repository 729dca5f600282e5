use crate::ast;
use crate::wiring::TypeResolver;
use std::sync::Arc;

/// A realized union type. Members are names in declared order; repeats are
/// preserved for the validator to report.
#[derive(Clone)]
pub struct UnionType {
    pub description: Option<String>,
    pub directives: Vec<ast::Directive>,
    pub members: Vec<String>,
    pub name: String,
    pub type_resolver: Option<Arc<dyn TypeResolver>>,
}
impl std::fmt::Debug for UnionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionType")
            .field("description", &self.description)
            .field("directives", &self.directives)
            .field("members", &self.members)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
