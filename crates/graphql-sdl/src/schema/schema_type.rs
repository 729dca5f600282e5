use crate::ast;
use crate::schema::EnumType;
use crate::schema::InputObjectType;
use crate::schema::InterfaceType;
use crate::schema::ObjectType;
use crate::schema::ScalarType;
use crate::schema::UnionType;

/// One realized type in a [`crate::Schema`]'s type map.
#[derive(Clone, Debug)]
pub enum SchemaType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl SchemaType {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(type_) => type_.name.as_str(),
            Self::InputObject(type_) => type_.name.as_str(),
            Self::Interface(type_) => type_.name.as_str(),
            Self::Object(type_) => type_.name.as_str(),
            Self::Scalar(type_) => type_.name.as_str(),
            Self::Union(type_) => type_.name.as_str(),
        }
    }

    pub fn kind(&self) -> SchemaTypeKind {
        match self {
            Self::Enum(_) => SchemaTypeKind::Enum,
            Self::InputObject(_) => SchemaTypeKind::InputObject,
            Self::Interface(_) => SchemaTypeKind::Interface,
            Self::Object(_) => SchemaTypeKind::Object,
            Self::Scalar(_) => SchemaTypeKind::Scalar,
            Self::Union(_) => SchemaTypeKind::Union,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(type_) => type_.description.as_deref(),
            Self::InputObject(type_) => type_.description.as_deref(),
            Self::Interface(type_) => type_.description.as_deref(),
            Self::Object(type_) => type_.description.as_deref(),
            Self::Scalar(type_) => type_.description.as_deref(),
            Self::Union(type_) => type_.description.as_deref(),
        }
    }

    pub fn directives(&self) -> &[ast::Directive] {
        match self {
            Self::Enum(type_) => type_.directives.as_slice(),
            Self::InputObject(type_) => type_.directives.as_slice(),
            Self::Interface(type_) => type_.directives.as_slice(),
            Self::Object(type_) => type_.directives.as_slice(),
            Self::Scalar(type_) => type_.directives.as_slice(),
            Self::Union(type_) => type_.directives.as_slice(),
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self { Some(type_) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self { Some(type_) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self { Some(type_) } else { None }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self { Some(type_) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self { Some(type_) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self { Some(type_) } else { None }
    }
}

/// Like [`SchemaType`] without the payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SchemaTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl SchemaTypeKind {
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
impl std::fmt::Display for SchemaTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
