use crate::schema::introspection;
use crate::schema::scalar_info;
use crate::schema::Schema;
use crate::validation::NonNullWrapRule;
use crate::validation::ReservedNameRule;
use crate::validation::SchemaValidationError;
use crate::validation::SchemaValidationErrorCollector;
use crate::validation::SchemaValidationRule;
use crate::validation::TypeMembersRule;
use crate::validation::UnionMembersRule;

/// Introspection types and the built-in scalars are part of the
/// machinery, not the user's schema; every rule skips them.
pub(crate) fn is_system_element(name: &str) -> bool {
    introspection::is_introspection_type(name)
        || scalar_info::is_graphql_specified_scalar(name)
}

/// Runs every structural rule against a realized schema, in a fixed order,
/// never stopping early. Stateless; one validator can check any number of
/// schemas.
pub struct SchemaValidator {
    rules: Vec<Box<dyn SchemaValidationRule>>,
}
impl SchemaValidator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ReservedNameRule),
                Box::new(TypeMembersRule),
                Box::new(UnionMembersRule),
                Box::new(NonNullWrapRule),
            ],
        }
    }

    /// The full list of violations in `schema`; empty when the schema is
    /// structurally sound.
    pub fn validate_schema(
        &self,
        schema: &Schema,
    ) -> Vec<SchemaValidationError> {
        let mut collector = SchemaValidationErrorCollector::new();
        for rule in &self.rules {
            rule.check(schema, &mut collector);
        }
        log::debug!(
            "validated schema (query root `{}`): {} error(s)",
            schema.query_type_name(),
            collector.errors().len(),
        );
        collector.into_errors()
    }
}
impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}
