use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_children;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// An SDL `union` definition.
///
/// Member types are kept in declared order and may contain repeats; the
/// schema validator reports duplicates, so the AST must not deduplicate.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    pub info: NodeInfo,
    pub member_types: Vec<NamedType>,
    pub name: String,
}
impl UnionTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            info: NodeInfo::default(),
            member_types: vec![],
            name: name.into(),
        }
    }
}
impl Node for UnionTypeDefinition {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        let mut children: Vec<NodeChild> =
            self.directives.iter().cloned().map(NodeChild::Directive).collect();
        children.extend(
            self.member_types.iter().cloned().map(NodeChild::NamedType),
        );
        children
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(
                child_slot::DIRECTIVES,
                self.directives.iter().cloned().map(NodeChild::Directive).collect(),
            )
            .with_slot(
                child_slot::MEMBER_TYPES,
                self.member_types.iter().cloned().map(NodeChild::NamedType).collect(),
            )
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("UnionTypeDefinition", &children, &[
            child_slot::DIRECTIVES,
            child_slot::MEMBER_TYPES,
        ])?;
        let directives = slot_children(
            "UnionTypeDefinition",
            &mut children,
            child_slot::DIRECTIVES,
            |child| child.as_directive().cloned(),
        )?;
        let member_types = slot_children(
            "UnionTypeDefinition",
            &mut children,
            child_slot::MEMBER_TYPES,
            |child| {
                if let NodeChild::NamedType(named) = child { Some(named) } else { None }
            },
        )?;
        Ok(Self { directives, member_types, ..self.clone() })
    }
}
