use crate::ast;
use crate::schema::SchemaType;

/// The context for one schema-directive application: the directive as
/// declared in the source, and the realized type it was declared on.
pub struct SchemaDirectiveWiringEnvironment<'a> {
    pub directive: &'a ast::Directive,
    pub element: SchemaType,
}

/// A transform applied to a realized type for each matching directive
/// declared on it, in declaration order. The output of one application is
/// the input of the next.
pub trait SchemaDirectiveWiring: Send + Sync {
    fn on_type(
        &self,
        environment: SchemaDirectiveWiringEnvironment<'_>,
    ) -> SchemaType;
}
