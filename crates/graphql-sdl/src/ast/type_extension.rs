use crate::ast::EnumTypeDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::TypeDefinitionKind;
use crate::ast::UnionTypeDefinition;
use crate::loc;

/// An `extend type ...` construct. Extensions share the shape of their base
/// definition kind; the wrapper marks the payload as additive rather than
/// declarative.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeExtension {
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Object(ObjectTypeDefinition),
    Scalar(ScalarTypeDefinition),
    Union(UnionTypeDefinition),
}
impl TypeExtension {
    /// The name of the base definition this extension targets.
    pub fn target_name(&self) -> &str {
        match self {
            Self::Enum(def) => def.name.as_str(),
            Self::InputObject(def) => def.name.as_str(),
            Self::Interface(def) => def.name.as_str(),
            Self::Object(def) => def.name.as_str(),
            Self::Scalar(def) => def.name.as_str(),
            Self::Union(def) => def.name.as_str(),
        }
    }

    /// The definition kind this extension can legally target.
    pub fn kind(&self) -> TypeDefinitionKind {
        match self {
            Self::Enum(_) => TypeDefinitionKind::Enum,
            Self::InputObject(_) => TypeDefinitionKind::InputObject,
            Self::Interface(_) => TypeDefinitionKind::Interface,
            Self::Object(_) => TypeDefinitionKind::Object,
            Self::Scalar(_) => TypeDefinitionKind::Scalar,
            Self::Union(_) => TypeDefinitionKind::Union,
        }
    }

    pub fn source_location(&self) -> Option<&loc::SourceLocation> {
        match self {
            Self::Enum(def) => def.info.source_location.as_ref(),
            Self::InputObject(def) => def.info.source_location.as_ref(),
            Self::Interface(def) => def.info.source_location.as_ref(),
            Self::Object(def) => def.info.source_location.as_ref(),
            Self::Scalar(def) => def.info.source_location.as_ref(),
            Self::Union(def) => def.info.source_location.as_ref(),
        }
    }
}
