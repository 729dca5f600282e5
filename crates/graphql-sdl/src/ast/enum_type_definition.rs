use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_children;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// An SDL `enum` definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    pub info: NodeInfo,
    pub name: String,
    pub values: Vec<EnumValueDefinition>,
}
impl EnumTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            info: NodeInfo::default(),
            name: name.into(),
            values: vec![],
        }
    }
}
impl Node for EnumTypeDefinition {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        let mut children: Vec<NodeChild> =
            self.directives.iter().cloned().map(NodeChild::Directive).collect();
        children.extend(
            self.values.iter().cloned().map(NodeChild::EnumValueDefinition),
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
                child_slot::ENUM_VALUE_DEFINITIONS,
                self.values
                    .iter()
                    .cloned()
                    .map(NodeChild::EnumValueDefinition)
                    .collect(),
            )
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("EnumTypeDefinition", &children, &[
            child_slot::DIRECTIVES,
            child_slot::ENUM_VALUE_DEFINITIONS,
        ])?;
        let directives = slot_children(
            "EnumTypeDefinition",
            &mut children,
            child_slot::DIRECTIVES,
            |child| child.as_directive().cloned(),
        )?;
        let values = slot_children(
            "EnumTypeDefinition",
            &mut children,
            child_slot::ENUM_VALUE_DEFINITIONS,
            |child| {
                if let NodeChild::EnumValueDefinition(def) = child {
                    Some(def)
                } else {
                    None
                }
            },
        )?;
        Ok(Self { directives, values, ..self.clone() })
    }
}
