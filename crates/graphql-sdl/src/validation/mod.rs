//! Structural validation of realized schemas.

mod error_collector;
mod non_null_wrap_rule;
mod reserved_name_rule;
mod schema_validation_error;
mod schema_validation_rule;
mod schema_validator;
mod type_members_rule;
mod union_members_rule;

pub use error_collector::SchemaValidationErrorCollector;
pub use non_null_wrap_rule::NonNullWrapRule;
pub use reserved_name_rule::ReservedNameRule;
pub use schema_validation_error::SchemaValidationError;
pub use schema_validation_error::SchemaValidationErrorKind;
pub use schema_validation_rule::SchemaValidationRule;
pub use schema_validator::SchemaValidator;
pub use type_members_rule::TypeMembersRule;
pub use union_members_rule::UnionMembersRule;

#[cfg(test)]
mod tests;
