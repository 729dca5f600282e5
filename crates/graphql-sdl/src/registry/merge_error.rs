use crate::ast::TypeDefinitionKind;
use crate::loc;
use thiserror::Error;

fn render_location(location: &Option<loc::SourceLocation>) -> String {
    match location {
        Some(location) => format!(" at {location}"),
        None => String::new(),
    }
}

/// A problem encountered while merging documents into a
/// [`crate::TypeDefinitionRegistry`], or while checking extension targets.
///
/// Merging is best-effort: each error describes one dropped or ignored
/// construct, and the registry remains usable afterwards.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MergeError {
    #[error(
        "type `{name}`{} was already defined{}",
        render_location(location),
        render_location(previous_location),
    )]
    DuplicateTypeDefinition {
        name: String,
        location: Option<loc::SourceLocation>,
        previous_location: Option<loc::SourceLocation>,
    },

    #[error(
        "directive `@{name}`{} was already defined{}",
        render_location(location),
        render_location(previous_location),
    )]
    DuplicateDirectiveDefinition {
        name: String,
        location: Option<loc::SourceLocation>,
        previous_location: Option<loc::SourceLocation>,
    },

    #[error(
        "directive `@{name}`{} redefines a built-in directive",
        render_location(location),
    )]
    RedefinedBuiltinDirective {
        name: String,
        location: Option<loc::SourceLocation>,
    },

    #[error(
        "type name `{name}`{} uses the reserved `__` prefix",
        render_location(location),
    )]
    ReservedTypeName {
        name: String,
        location: Option<loc::SourceLocation>,
    },

    #[error(
        "a `schema {{}}` block{} was already defined{}",
        render_location(location),
        render_location(previous_location),
    )]
    DuplicateSchemaDefinition {
        location: Option<loc::SourceLocation>,
        previous_location: Option<loc::SourceLocation>,
    },

    #[error(
        "extension{} targets undefined type `{name}`",
        render_location(location),
    )]
    ExtensionOfUndefinedType {
        name: String,
        location: Option<loc::SourceLocation>,
    },

    #[error(
        "{extension_kind} extension{} targets `{name}`, which is defined as \
        {base_kind}",
        render_location(location),
    )]
    InvalidExtensionKind {
        name: String,
        extension_kind: TypeDefinitionKind,
        base_kind: TypeDefinitionKind,
        location: Option<loc::SourceLocation>,
    },
}
