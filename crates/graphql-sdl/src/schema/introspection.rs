/// Names of the reserved introspection system types. These are the only
/// types legitimately carrying the `__` prefix; validation rules skip them.
pub const INTROSPECTION_TYPE_NAMES: [&str; 8] = [
    "__Directive",
    "__DirectiveLocation",
    "__EnumValue",
    "__Field",
    "__InputValue",
    "__Schema",
    "__Type",
    "__TypeKind",
];

pub fn is_introspection_type(name: &str) -> bool {
    INTROSPECTION_TYPE_NAMES.contains(&name)
}
