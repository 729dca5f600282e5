use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_children;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::NamedType;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// An SDL `interface` definition. Same shape as
/// [`crate::ast::ObjectTypeDefinition`] but a distinct kind.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    pub field_definitions: Vec<FieldDefinition>,
    pub implements: Vec<NamedType>,
    pub info: NodeInfo,
    pub name: String,
}
impl InterfaceTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            field_definitions: vec![],
            implements: vec![],
            info: NodeInfo::default(),
            name: name.into(),
        }
    }
}
impl Node for InterfaceTypeDefinition {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        let mut children: Vec<NodeChild> =
            self.implements.iter().cloned().map(NodeChild::NamedType).collect();
        children.extend(self.directives.iter().cloned().map(NodeChild::Directive));
        children.extend(
            self.field_definitions
                .iter()
                .cloned()
                .map(NodeChild::FieldDefinition),
        );
        children
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(
                child_slot::IMPLEMENTS,
                self.implements.iter().cloned().map(NodeChild::NamedType).collect(),
            )
            .with_slot(
                child_slot::DIRECTIVES,
                self.directives.iter().cloned().map(NodeChild::Directive).collect(),
            )
            .with_slot(
                child_slot::FIELD_DEFINITIONS,
                self.field_definitions
                    .iter()
                    .cloned()
                    .map(NodeChild::FieldDefinition)
                    .collect(),
            )
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("InterfaceTypeDefinition", &children, &[
            child_slot::IMPLEMENTS,
            child_slot::DIRECTIVES,
            child_slot::FIELD_DEFINITIONS,
        ])?;
        let implements = slot_children(
            "InterfaceTypeDefinition",
            &mut children,
            child_slot::IMPLEMENTS,
            |child| {
                if let NodeChild::NamedType(named) = child { Some(named) } else { None }
            },
        )?;
        let directives = slot_children(
            "InterfaceTypeDefinition",
            &mut children,
            child_slot::DIRECTIVES,
            |child| child.as_directive().cloned(),
        )?;
        let field_definitions = slot_children(
            "InterfaceTypeDefinition",
            &mut children,
            child_slot::FIELD_DEFINITIONS,
            |child| {
                if let NodeChild::FieldDefinition(def) = child { Some(def) } else { None }
            },
        )?;
        Ok(Self {
            directives,
            field_definitions,
            implements,
            ..self.clone()
        })
    }
}
