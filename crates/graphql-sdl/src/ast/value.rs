use crate::ast::child_slot;
use crate::ast::node::check_child_slots;
use crate::ast::node::slot_child;
use crate::ast::node::slot_children;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;

/// A literal value as written in an SDL document (e.g. a directive argument
/// or an input field's default).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(BooleanValue),
    Enum(EnumValue),
    Float(FloatValue),
    Int(IntValue),
    List(ListValue),
    Null(NullValue),
    Object(ObjectValue),
    String(StringValue),
    Variable(VariableValue),
}
impl Value {
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(BooleanValue { info: NodeInfo::default(), value })
    }

    pub fn int(value: i64) -> Self {
        Self::Int(IntValue { info: NodeInfo::default(), value })
    }

    pub fn float(value: f64) -> Self {
        Self::Float(FloatValue { info: NodeInfo::default(), value })
    }

    pub fn null() -> Self {
        Self::Null(NullValue { info: NodeInfo::default() })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(StringValue { info: NodeInfo::default(), value: value.into() })
    }

    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum(EnumValue { info: NodeInfo::default(), name: name.into() })
    }

    pub fn list(values: Vec<Value>) -> Self {
        Self::List(ListValue { info: NodeInfo::default(), values })
    }

    pub fn object(fields: Vec<ObjectField>) -> Self {
        Self::Object(ObjectValue { info: NodeInfo::default(), fields })
    }
}
impl Node for Value {
    fn node_info(&self) -> &NodeInfo {
        match self {
            Self::Boolean(value) => &value.info,
            Self::Enum(value) => &value.info,
            Self::Float(value) => &value.info,
            Self::Int(value) => &value.info,
            Self::List(value) => &value.info,
            Self::Null(value) => &value.info,
            Self::Object(value) => &value.info,
            Self::String(value) => &value.info,
            Self::Variable(value) => &value.info,
        }
    }

    fn children(&self) -> Vec<NodeChild> {
        match self {
            Self::List(value) => value.children(),
            Self::Object(value) => value.children(),
            _ => vec![],
        }
    }

    fn named_children(&self) -> NodeChildrenContainer {
        match self {
            Self::List(value) => value.named_children(),
            Self::Object(value) => value.named_children(),
            _ => NodeChildrenContainer::new(),
        }
    }

    fn with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        match self {
            Self::List(value) => value.with_new_children(children).map(Self::List),
            Self::Object(value) => value.with_new_children(children).map(Self::Object),

            // Scalar value nodes declare no child slots at all.
            _ => {
                check_child_slots("Value", &children, &[])?;
                Ok(self.clone())
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BooleanValue {
    pub info: NodeInfo,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub info: NodeInfo,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FloatValue {
    pub info: NodeInfo,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntValue {
    pub info: NodeInfo,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NullValue {
    pub info: NodeInfo,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StringValue {
    pub info: NodeInfo,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableValue {
    pub info: NodeInfo,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListValue {
    pub info: NodeInfo,
    pub values: Vec<Value>,
}
impl Node for ListValue {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        self.values.iter().cloned().map(NodeChild::Value).collect()
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(child_slot::VALUES, self.children())
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("ListValue", &children, &[child_slot::VALUES])?;
        let values = slot_children(
            "ListValue",
            &mut children,
            child_slot::VALUES,
            |child| if let NodeChild::Value(value) = child { Some(value) } else { None },
        )?;
        Ok(Self { values, ..self.clone() })
    }
}

/// One `name: value` entry inside an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub info: NodeInfo,
    pub name: String,
    pub value: Value,
}
impl Node for ObjectField {
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
        check_child_slots("ObjectField", &children, &[child_slot::VALUE])?;
        let value = slot_child(
            "ObjectField",
            &mut children,
            child_slot::VALUE,
            |child| if let NodeChild::Value(value) = child { Some(value) } else { None },
        )?;
        Ok(Self {
            value: value.unwrap_or_else(|| self.value.clone()),
            ..self.clone()
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectValue {
    pub info: NodeInfo,
    pub fields: Vec<ObjectField>,
}
impl Node for ObjectValue {
    fn node_info(&self) -> &NodeInfo {
        &self.info
    }

    fn children(&self) -> Vec<NodeChild> {
        self.fields.iter().cloned().map(NodeChild::ObjectField).collect()
    }

    fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_slot(child_slot::OBJECT_FIELDS, self.children())
    }

    fn with_new_children(
        &self,
        mut children: NodeChildrenContainer,
    ) -> Result<Self, NodeError> {
        check_child_slots("ObjectValue", &children, &[child_slot::OBJECT_FIELDS])?;
        let fields = slot_children(
            "ObjectValue",
            &mut children,
            child_slot::OBJECT_FIELDS,
            |child| {
                if let NodeChild::ObjectField(field) = child { Some(field) } else { None }
            },
        )?;
        Ok(Self { fields, ..self.clone() })
    }
}
