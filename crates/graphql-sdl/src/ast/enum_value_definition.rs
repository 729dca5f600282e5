use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_children;
use crate::ast::Directive;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// One value declared inside an enum type definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    pub info: NodeInfo,
    pub name: String,
}
impl EnumValueDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            info: NodeInfo::default(),
            name: name.into(),
        }
    }
}
impl Node for EnumValueDefinition {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        self.directives.iter().cloned().map(NodeChild::Directive).collect()
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(child_slot::DIRECTIVES, self.children())
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("EnumValueDefinition", &children, &[
            child_slot::DIRECTIVES,
        ])?;
        let directives = slot_children(
            "EnumValueDefinition",
            &mut children,
            child_slot::DIRECTIVES,
            |child| child.as_directive().cloned(),
        )?;
        Ok(Self { directives, ..self.clone() })
    }
}
