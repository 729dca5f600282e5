use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_child;
use crate::ast::node::slot_children;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;
use crate::ast::TypeReference;

/// A field declared on an object or interface type definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub arguments: Vec<InputValueDefinition>,
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    pub field_type: TypeReference,
    pub info: NodeInfo,
    pub name: String,
}
impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: TypeReference) -> Self {
        Self {
            arguments: vec![],
            description: None,
            directives: vec![],
            field_type,
            info: NodeInfo::default(),
            name: name.into(),
        }
    }
}
impl Node for FieldDefinition {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        let mut children: Vec<NodeChild> =
            self.arguments
                .iter()
                .cloned()
                .map(NodeChild::InputValueDefinition)
                .collect();
        children.push(NodeChild::TypeReference(self.field_type.clone()));
        children.extend(self.directives.iter().cloned().map(NodeChild::Directive));
        children
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(
                child_slot::INPUT_VALUE_DEFINITIONS,
                self.arguments
                    .iter()
                    .cloned()
                    .map(NodeChild::InputValueDefinition)
                    .collect(),
            )
            .with_slot(
                child_slot::TYPE,
                vec![NodeChild::TypeReference(self.field_type.clone())],
            )
            .with_slot(
                child_slot::DIRECTIVES,
                self.directives.iter().cloned().map(NodeChild::Directive).collect(),
            )
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("FieldDefinition", &children, &[
            child_slot::INPUT_VALUE_DEFINITIONS,
            child_slot::TYPE,
            child_slot::DIRECTIVES,
        ])?;
        let arguments = slot_children(
            "FieldDefinition",
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
        let field_type = slot_child(
            "FieldDefinition",
            &mut children,
            child_slot::TYPE,
            |child| child.as_type_reference().cloned(),
        )?;
        let directives = slot_children(
            "FieldDefinition",
            &mut children,
            child_slot::DIRECTIVES,
            |child| child.as_directive().cloned(),
        )?;
        Ok(Self {
            arguments,
            directives,
            field_type: field_type.unwrap_or_else(|| self.field_type.clone()),
            ..self.clone()
        })
    }
}
