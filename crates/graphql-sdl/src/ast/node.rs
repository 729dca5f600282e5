use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::NamedType;
use crate::ast::ObjectField;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::loc;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use thiserror::Error;

/// Names of the semantic child slots a node kind may declare. Slot names are
/// shared across node kinds (e.g. both [`FieldDefinition`] and
/// [`crate::ast::ObjectTypeDefinition`] declare a `"directives"` slot).
pub mod child_slot {
    pub const ARGUMENTS: &str = "arguments";
    pub const DEFAULT_VALUE: &str = "defaultValue";
    pub const DEFINITIONS: &str = "definitions";
    pub const DIRECTIVES: &str = "directives";
    pub const ENUM_VALUE_DEFINITIONS: &str = "enumValueDefinitions";
    pub const FIELD_DEFINITIONS: &str = "fieldDefinitions";
    pub const IMPLEMENTS: &str = "implements";
    pub const INPUT_VALUE_DEFINITIONS: &str = "inputValueDefinitions";
    pub const MEMBER_TYPES: &str = "memberTypes";
    pub const OBJECT_FIELDS: &str = "objectFields";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
    pub const VALUES: &str = "values";
}

/// A single source-text comment attached to a node.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub content: String,
    pub source_location: Option<loc::SourceLocation>,
}

/// Metadata shared by every AST node: where it came from, the comments
/// attached to it, and an arbitrary string-keyed side-channel.
///
/// [`NodeInfo`] compares equal to every other [`NodeInfo`]. Structural
/// equality of nodes is defined to be independent of source locations and
/// comments, so deriving [`PartialEq`] on a node struct that embeds its
/// metadata in a [`NodeInfo`] field yields exactly the comparison the node
/// contract requires.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct NodeInfo {
    pub additional_data: BTreeMap<String, String>,
    pub comments: Vec<Comment>,
    pub source_location: Option<loc::SourceLocation>,
}
impl NodeInfo {
    pub fn at(source_location: loc::SourceLocation) -> Self {
        Self {
            additional_data: BTreeMap::new(),
            comments: vec![],
            source_location: Some(source_location),
        }
    }
}
impl PartialEq for NodeInfo {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Capability shared by every AST element.
///
/// All nodes are immutable: "mutation" happens by building a new node, either
/// with plain struct-update syntax or via [`Node::with_new_children`]. Since
/// every node field is owned data, [`Clone`] already produces a fully
/// independent copy and [`Node::deep_copy`] is just a clone.
pub trait Node: Clone + std::fmt::Debug + PartialEq {
    fn node_info(&self) -> &NodeInfo;

    /// The flattened, ordered sequence of this node's children, used for
    /// generic tree walking.
    fn children(&self) -> Vec<NodeChild>;

    /// The semantic child slots of this node, keyed by slot name.
    fn named_children(&self) -> NodeChildrenContainer;

    /// Produce a new node with the given children substituted for the
    /// current ones. Fails if the container populates a slot this node kind
    /// does not declare; a node with no child slots rejects any non-empty
    /// container.
    fn with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, NodeError>;

    fn source_location(&self) -> Option<&loc::SourceLocation> {
        self.node_info().source_location.as_ref()
    }

    fn comments(&self) -> &[Comment] {
        self.node_info().comments.as_slice()
    }

    fn additional_data(&self) -> &BTreeMap<String, String> {
        &self.node_info().additional_data
    }

    /// Structural equality, independent of source locations and comments.
    fn is_equal_to(&self, other: &Self) -> bool {
        self == other
    }

    /// A fully independent copy sharing no mutable state with `self`.
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

/// Closed set of node categories that can appear as a child of another node.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NodeChild {
    Argument(Argument),
    Definition(Definition),
    Directive(Directive),
    EnumValueDefinition(EnumValueDefinition),
    FieldDefinition(FieldDefinition),
    InputValueDefinition(InputValueDefinition),
    NamedType(NamedType),
    ObjectField(ObjectField),
    TypeReference(TypeReference),
    Value(Value),
}
impl NodeChild {
    pub fn as_argument(&self) -> Option<&Argument> {
        if let Self::Argument(node) = self { Some(node) } else { None }
    }

    pub fn as_directive(&self) -> Option<&Directive> {
        if let Self::Directive(node) = self { Some(node) } else { None }
    }

    pub fn as_type_reference(&self) -> Option<&TypeReference> {
        if let Self::TypeReference(node) = self { Some(node) } else { None }
    }

    pub fn as_value(&self) -> Option<&Value> {
        if let Self::Value(node) = self { Some(node) } else { None }
    }
}

/// Ordered mapping from slot name to the children occupying that slot.
///
/// Slot keys are unique; the order of children within one slot is
/// significant, the order of slots is not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeChildrenContainer {
    slots: IndexMap<&'static str, Vec<NodeChild>>,
}
impl NodeChildrenContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(
        mut self,
        slot: &'static str,
        children: Vec<NodeChild>,
    ) -> Self {
        self.slots.insert(slot, children);
        self
    }

    pub fn children_of(&self, slot: &str) -> &[NodeChild] {
        self.slots.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn take_children(&mut self, slot: &str) -> Vec<NodeChild> {
        self.slots.swap_remove(slot).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Vec::is_empty)
    }

    pub fn populated_slots(&self) -> Vec<&'static str> {
        self.slots
            .iter()
            .filter(|(_, children)| !children.is_empty())
            .map(|(slot, _)| *slot)
            .collect()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum NodeError {
    #[error(
        "`{node_kind}` nodes declare no child slot named `{slot}`"
    )]
    UnexpectedChildSlot {
        node_kind: &'static str,
        slot: String,
    },

    #[error(
        "child in slot `{slot}` of a `{node_kind}` node has the wrong node \
        category"
    )]
    MismatchedChildKind {
        node_kind: &'static str,
        slot: &'static str,
    },
}

/// Verify that `children` populates no slot outside `allowed`. Nodes without
/// child slots pass `&[]` and thereby reject every non-empty container.
pub(crate) fn check_child_slots(
    node_kind: &'static str,
    children: &NodeChildrenContainer,
    allowed: &[&'static str],
) -> Result<(), NodeError> {
    for slot in children.populated_slots() {
        if !allowed.contains(&slot) {
            return Err(NodeError::UnexpectedChildSlot {
                node_kind,
                slot: slot.to_string(),
            });
        }
    }
    Ok(())
}

/// Collect the children of one slot into a concrete node type, rejecting
/// children of the wrong category.
pub(crate) fn slot_children<T>(
    node_kind: &'static str,
    children: &mut NodeChildrenContainer,
    slot: &'static str,
    extract: impl Fn(NodeChild) -> Option<T>,
) -> Result<Vec<T>, NodeError> {
    children
        .take_children(slot)
        .into_iter()
        .map(|child| {
            extract(child).ok_or(NodeError::MismatchedChildKind { node_kind, slot })
        })
        .collect()
}

/// Like [`slot_children`], but for slots holding exactly zero or one child.
/// A missing child yields `None` so callers can fall back to the current
/// value.
pub(crate) fn slot_child<T>(
    node_kind: &'static str,
    children: &mut NodeChildrenContainer,
    slot: &'static str,
    extract: impl Fn(NodeChild) -> Option<T>,
) -> Result<Option<T>, NodeError> {
    let mut extracted = slot_children(node_kind, children, slot, extract)?;
    Ok(if extracted.is_empty() {
        None
    } else {
        Some(extracted.swap_remove(0))
    })
}
