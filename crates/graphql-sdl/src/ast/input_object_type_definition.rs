use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_children;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// An SDL `input` definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    pub info: NodeInfo,
    pub input_field_definitions: Vec<InputValueDefinition>,
    pub name: String,
}
impl InputObjectTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            info: NodeInfo::default(),
            input_field_definitions: vec![],
            name: name.into(),
        }
    }
}
impl Node for InputObjectTypeDefinition {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        let mut children: Vec<NodeChild> =
            self.directives.iter().cloned().map(NodeChild::Directive).collect();
        children.extend(
            self.input_field_definitions
                .iter()
                .cloned()
                .map(NodeChild::InputValueDefinition),
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
                child_slot::INPUT_VALUE_DEFINITIONS,
                self.input_field_definitions
                    .iter()
                    .cloned()
                    .map(NodeChild::InputValueDefinition)
                    .collect(),
            )
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("InputObjectTypeDefinition", &children, &[
            child_slot::DIRECTIVES,
            child_slot::INPUT_VALUE_DEFINITIONS,
        ])?;
        let directives = slot_children(
            "InputObjectTypeDefinition",
            &mut children,
            child_slot::DIRECTIVES,
            |child| child.as_directive().cloned(),
        )?;
        let input_field_definitions = slot_children(
            "InputObjectTypeDefinition",
            &mut children,
            child_slot::INPUT_VALUE_DEFINITIONS,
            |child| {
                if let NodeChild::InputValueDefinition(def) = child {
                    Some(def)
                } else {
                    None
                }
            },
        )?;
        Ok(Self {
            directives,
            input_field_definitions,
            ..self.clone()
        })
    }
}
