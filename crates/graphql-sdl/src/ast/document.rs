use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_children;
use crate::ast::DirectiveDefinition;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;

/// One top-level construct of an SDL document.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    Directive(DirectiveDefinition),
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    TypeExtension(TypeExtension),
}

/// A parsed SDL document: an ordered sequence of top-level definitions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub info: NodeInfo,
}
impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions, info: NodeInfo::default() }
    }
}
impl Node for Document {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        self.definitions.iter().cloned().map(NodeChild::Definition).collect()
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(child_slot::DEFINITIONS, self.children())
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("Document", &children, &[child_slot::DEFINITIONS])?;
        let definitions = slot_children(
            "Document",
            &mut children,
            child_slot::DEFINITIONS,
            |child| {
                if let NodeChild::Definition(def) = child { Some(def) } else { None }
            },
        )?;
        Ok(Self { definitions, ..self.clone() })
    }
}
