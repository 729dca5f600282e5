use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_child;
use crate::ast::node::slot_children;
use crate::ast::Directive;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;
use crate::ast::TypeReference;
use crate::ast::Value;

/// An input value declaration: a field argument, a directive-definition
/// argument, or an input-object field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    pub info: NodeInfo,
    pub name: String,
    pub value_type: TypeReference,
}
impl InputValueDefinition {
    pub fn new(name: impl Into<String>, value_type: TypeReference) -> Self {
        Self {
            default_value: None,
            description: None,
            directives: vec![],
            info: NodeInfo::default(),
            name: name.into(),
            value_type,
        }
    }
}
impl Node for InputValueDefinition {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        let mut children =
            vec![NodeChild::TypeReference(self.value_type.clone())];
        if let Some(default_value) = &self.default_value {
            children.push(NodeChild::Value(default_value.clone()));
        }
        children.extend(self.directives.iter().cloned().map(NodeChild::Directive));
        children
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(
                child_slot::TYPE,
                vec![NodeChild::TypeReference(self.value_type.clone())],
            )
            .with_slot(
                child_slot::DEFAULT_VALUE,
                self.default_value
                    .iter()
                    .cloned()
                    .map(NodeChild::Value)
                    .collect(),
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
        check_child_slots("InputValueDefinition", &children, &[
            child_slot::TYPE,
            child_slot::DEFAULT_VALUE,
            child_slot::DIRECTIVES,
        ])?;
        let value_type = slot_child(
            "InputValueDefinition",
            &mut children,
            child_slot::TYPE,
            |child| child.as_type_reference().cloned(),
        )?;
        let default_value = slot_child(
            "InputValueDefinition",
            &mut children,
            child_slot::DEFAULT_VALUE,
            |child| child.as_value().cloned(),
        )?;
        let directives = slot_children(
            "InputValueDefinition",
            &mut children,
            child_slot::DIRECTIVES,
            |child| child.as_directive().cloned(),
        )?;
        Ok(Self {
            default_value,
            directives,
            value_type: value_type.unwrap_or_else(|| self.value_type.clone()),
            ..self.clone()
        })
    }
}
