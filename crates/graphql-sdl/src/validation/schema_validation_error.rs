/// Category of a structural schema violation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SchemaValidationErrorKind {
    EnumLackOfValue,
    ImplementingTypeLackOfField,
    InputObjectTypeLackOfField,
    InvalidCustomizedName,
    InvalidUnionMemberType,
    NonNullWrapNonNull,
    RepetitiveElement,
    UnionTypeLackOfType,
}

/// One structural violation found in a realized schema. Validation never
/// throws; callers receive the full list of these.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SchemaValidationError {
    pub description: String,
    pub kind: SchemaValidationErrorKind,
    /// Dotted path to the element at fault (e.g. `Widget.name.filter`).
    pub offending_element: String,
}
impl SchemaValidationError {
    pub fn new(
        kind: SchemaValidationErrorKind,
        offending_element: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            kind,
            offending_element: offending_element.into(),
        }
    }
}
impl std::fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}
