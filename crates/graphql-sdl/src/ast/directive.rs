use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_child;
use crate::ast::node::slot_children;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;
use crate::ast::Value;

/// A directive applied to a schema element (e.g. `@deprecated(reason: "x")`),
/// as opposed to a [`crate::ast::DirectiveDefinition`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub arguments: Vec<Argument>,
    pub info: NodeInfo,
    pub name: String,
}
impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            info: NodeInfo::default(),
            name: name.into(),
        }
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}
impl Node for Directive {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        self.arguments.iter().cloned().map(NodeChild::Argument).collect()
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(child_slot::ARGUMENTS, self.children())
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("Directive", &children, &[child_slot::ARGUMENTS])?;
        let arguments = slot_children(
            "Directive",
            &mut children,
            child_slot::ARGUMENTS,
            |child| child.as_argument().cloned(),
        )?;
        Ok(Self { arguments, ..self.clone() })
    }
}

/// One `name: value` argument of an applied [`Directive`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub info: NodeInfo,
    pub name: String,
    pub value: Value,
}
impl Argument {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self { info: NodeInfo::default(), name: name.into(), value }
    }
}
impl Node for Argument {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        vec![NodeChild::Value(self.value.clone())]
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(child_slot::VALUE, self.children())
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("Argument", &children, &[child_slot::VALUE])?;
        let value = slot_child(
            "Argument",
            &mut children,
            child_slot::VALUE,
            |child| child.as_value().cloned(),
        )?;
        Ok(Self {
            value: value.unwrap_or_else(|| self.value.clone()),
            ..self.clone()
        })
    }
}
