use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_children;
use crate::ast::Directive;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// An SDL `schema { query: ... }` block binding operation roots to type
/// names.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDefinition {
    pub directives: Vec<Directive>,
    pub info: NodeInfo,
    pub mutation: Option<String>,
    pub query: Option<String>,
    pub subscription: Option<String>,
}
impl Node for SchemaDefinition {
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
        check_child_slots("SchemaDefinition", &children, &[
            child_slot::DIRECTIVES,
        ])?;
        let directives = slot_children(
            "SchemaDefinition",
            &mut children,
            child_slot::DIRECTIVES,
            |child| child.as_directive().cloned(),
        )?;
        Ok(Self { directives, ..self.clone() })
    }
}
