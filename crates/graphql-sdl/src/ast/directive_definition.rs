use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_children;
use crate::ast::InputValueDefinition;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// An SDL `directive @name(...) on ...` definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub arguments: Vec<InputValueDefinition>,
    pub description: Option<String>,
    pub info: NodeInfo,
    pub locations: Vec<String>,
    pub name: String,
    pub repeatable: bool,
}
impl DirectiveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            description: None,
            info: NodeInfo::default(),
            locations: vec![],
            name: name.into(),
            repeatable: false,
        }
    }
}
impl Node for DirectiveDefinition {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        self.arguments
            .iter()
            .cloned()
            .map(NodeChild::InputValueDefinition)
            .collect()
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(child_slot::INPUT_VALUE_DEFINITIONS, self.children())
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("DirectiveDefinition", &children, &[
            child_slot::INPUT_VALUE_DEFINITIONS,
        ])?;
        let arguments = slot_children(
            "DirectiveDefinition",
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
        Ok(Self { arguments, ..self.clone() })
    }
}
