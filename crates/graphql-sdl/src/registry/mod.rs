//! Accumulation of SDL definitions across documents, prior to wiring
//! resolution.

mod merge_error;
mod type_definition_registry;

pub use merge_error::MergeError;
pub use type_definition_registry::TypeDefinitionRegistry;
