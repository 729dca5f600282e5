use crate::ast::Value;

/// Maps a runtime value to the name of the concrete object type it
/// represents. Attached to realized interface and union types; a type
/// without one is still constructable, it just cannot be dispatched at
/// execution time.
pub trait TypeResolver: Send + Sync {
    fn resolve_type(&self, value: &Value) -> Option<String>;
}
