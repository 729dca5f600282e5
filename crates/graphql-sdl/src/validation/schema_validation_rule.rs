use crate::schema::Schema;
use crate::validation::SchemaValidationErrorCollector;

/// One structural rule checked against a realized schema. Rules append to
/// the shared collector and never short-circuit each other.
pub trait SchemaValidationRule {
    fn check(
        &self,
        schema: &Schema,
        collector: &mut SchemaValidationErrorCollector,
    );
}
