use thiserror::Error;

/// One reason schema generation could not produce a usable schema.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WiringError {
    #[error(
        "unresolved type reference `{name}` (referenced from {})",
        referenced_from.join(", "),
    )]
    UnresolvedTypeReference {
        name: String,
        referenced_from: Vec<String>,
    },

    #[error("no query root: type `{name}` is not defined")]
    MissingQueryRoot { name: String },

    #[error("{operation} root `{name}` is not defined")]
    MissingOperationRoot { operation: String, name: String },

    #[error("{operation} root `{name}` must be an Object type")]
    NonObjectOperationRoot { operation: String, name: String },
}

/// Generation is all-or-nothing: either every reference resolves and the
/// roots are sound, or the caller gets every collected [`WiringError`] and
/// no schema.
#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "schema generation failed with {} error(s); first: {}",
    errors.len(),
    errors.first().map(ToString::to_string).unwrap_or_default(),
)]
pub struct SchemaProblem {
    pub errors: Vec<WiringError>,
}
