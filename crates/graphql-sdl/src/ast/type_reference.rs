use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_child;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// A reference to a type as written in the SDL (e.g. the type of a field).
///
/// Wrapping is a recursive tree: `[String!]!` is
/// `NonNull(List(NonNull(Named("String"))))`. A [`NonNullType`] directly
/// wrapping another [`NonNullType`] is representable here; rejecting it is
/// the schema validator's job, not the AST's.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeReference {
    List(ListType),
    Named(NamedType),
    NonNull(NonNullType),
}
impl TypeReference {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedType { info: NodeInfo::default(), name: name.into() })
    }

    pub fn list_of(inner: TypeReference) -> Self {
        Self::List(ListType { info: NodeInfo::default(), inner: Box::new(inner) })
    }

    pub fn non_null(inner: TypeReference) -> Self {
        Self::NonNull(NonNullType { info: NodeInfo::default(), inner: Box::new(inner) })
    }

    /// Unwrap to the innermost [`NamedType`]. Iterative: wrapper chains in
    /// hostile documents can be arbitrarily deep.
    pub fn innermost_named_type(&self) -> &NamedType {
        let mut current = self;
        loop {
            match current {
                Self::List(list_type) => current = &list_type.inner,
                Self::NonNull(non_null_type) => current = &non_null_type.inner,
                Self::Named(named_type) => return named_type,
            }
        }
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        if let Self::Named(named_type) = self { Some(named_type) } else { None }
    }
}
impl Node for TypeReference {
    fn node_info(&self) -> &NodeInfo {
        match self {
            Self::List(list_type) => &list_type.info,
            Self::Named(named_type) => &named_type.info,
            Self::NonNull(non_null_type) => &non_null_type.info,
        }
    }

    fn children(&self) -> Vec<NodeChild> {
        match self {
            Self::List(list_type) =>
                vec![NodeChild::TypeReference((*list_type.inner).clone())],
            Self::NonNull(non_null_type) =>
                vec![NodeChild::TypeReference((*non_null_type.inner).clone())],
            Self::Named(_) => vec![],
        }
    }

    fn named_children(&self) -> NodeChildrenContainer {
        match self {
            Self::Named(_) => NodeChildrenContainer::new(),
            _ => NodeChildrenContainer::new()
                .with_slot(child_slot::TYPE, self.children()),
        }
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        match self {
            Self::Named(named_type) => {
                check_child_slots("NamedType", &children, &[])?;
                Ok(Self::Named(named_type.clone()))
            },

            Self::List(list_type) => {
                check_child_slots("ListType", &children, &[child_slot::TYPE])?;
                let inner = slot_child(
                    "ListType",
                    &mut children,
                    child_slot::TYPE,
                    |child| child.as_type_reference().cloned(),
                )?;
                Ok(Self::List(ListType {
                    inner: inner
                        .map(Box::new)
                        .unwrap_or_else(|| list_type.inner.clone()),
                    ..list_type.clone()
                }))
            },

            Self::NonNull(non_null_type) => {
                check_child_slots("NonNullType", &children, &[child_slot::TYPE])?;
                let inner = slot_child(
                    "NonNullType",
                    &mut children,
                    child_slot::TYPE,
                    |child| child.as_type_reference().cloned(),
                )?;
                Ok(Self::NonNull(NonNullType {
                    inner: inner
                        .map(Box::new)
                        .unwrap_or_else(|| non_null_type.inner.clone()),
                    ..non_null_type.clone()
                }))
            },
        }
    }
}
impl std::fmt::Display for TypeReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(named_type) => write!(f, "{}", named_type.name),
            Self::List(list_type) => write!(f, "[{}]", list_type.inner),
            Self::NonNull(non_null_type) => write!(f, "{}!", non_null_type.inner),
        }
    }
}

/// A bare identifier reference to a type (e.g. `String`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedType {
    pub info: NodeInfo,
    pub name: String,
}
impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { info: NodeInfo::default(), name: name.into() }
    }
}
impl Node for NamedType {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        vec![]
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
    }

    fn with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("NamedType", &children, &[])?;
        Ok(self.clone())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListType {
    pub info: NodeInfo,
    pub inner: Box<TypeReference>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NonNullType {
    pub info: NodeInfo,
    pub inner: Box<TypeReference>,
}
