use crate::ast::Directive;
use crate::ast::EnumTypeDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Node;
use crate::ast::NodeInfo;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::UnionTypeDefinition;
use crate::loc;

/// One of the six SDL type-definition kinds.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDefinition {
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Object(ObjectTypeDefinition),
    Scalar(ScalarTypeDefinition),
    Union(UnionTypeDefinition),
}
impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(def) => def.name.as_str(),
            Self::InputObject(def) => def.name.as_str(),
            Self::Interface(def) => def.name.as_str(),
            Self::Object(def) => def.name.as_str(),
            Self::Scalar(def) => def.name.as_str(),
            Self::Union(def) => def.name.as_str(),
        }
    }

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

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(def) => def.description.as_deref(),
            Self::InputObject(def) => def.description.as_deref(),
            Self::Interface(def) => def.description.as_deref(),
            Self::Object(def) => def.description.as_deref(),
            Self::Scalar(def) => def.description.as_deref(),
            Self::Union(def) => def.description.as_deref(),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            Self::Enum(def) => def.directives.as_slice(),
            Self::InputObject(def) => def.directives.as_slice(),
            Self::Interface(def) => def.directives.as_slice(),
            Self::Object(def) => def.directives.as_slice(),
            Self::Scalar(def) => def.directives.as_slice(),
            Self::Union(def) => def.directives.as_slice(),
        }
    }

    pub fn node_info(&self) -> &NodeInfo {
        match self {
            Self::Enum(def) => Node::node_info(def),
            Self::InputObject(def) => Node::node_info(def),
            Self::Interface(def) => Node::node_info(def),
            Self::Object(def) => Node::node_info(def),
            Self::Scalar(def) => Node::node_info(def),
            Self::Union(def) => Node::node_info(def),
        }
    }

    pub fn source_location(&self) -> Option<&loc::SourceLocation> {
        self.node_info().source_location.as_ref()
    }

    pub fn as_object(&self) -> Option<&ObjectTypeDefinition> {
        if let Self::Object(def) = self { Some(def) } else { None }
    }
}

/// Like [`TypeDefinition`] without the per-kind payload. Useful for grouping
/// and for kind-compatibility checks between extensions and their bases.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDefinitionKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeDefinitionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}
impl std::fmt::Display for TypeDefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
