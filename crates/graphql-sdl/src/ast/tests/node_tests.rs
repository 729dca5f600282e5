use crate::ast::child_slot;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Node;
use crate::ast::NodeChild;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeError;
use crate::ast::NodeInfo;
use crate::ast::ObjectTypeDefinition;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::loc::SourceLocation;

fn loc(line: usize, column: usize) -> SourceLocation {
    SourceLocation {
        column,
        file: Some("str://0".into()),
        line,
    }
}

#[test]
fn equality_ignores_source_location() {
    let here = Directive {
        arguments: vec![Argument::new("reason", Value::string("because"))],
        info: NodeInfo::at(loc(1, 1)),
        name: "deprecated".to_string(),
    };
    let elsewhere = Directive {
        arguments: vec![Argument::new("reason", Value::string("because"))],
        info: NodeInfo::at(loc(40, 7)),
        name: "deprecated".to_string(),
    };
    let nowhere = Directive {
        info: NodeInfo::default(),
        ..here.clone()
    };

    assert!(here.is_equal_to(&elsewhere));
    assert!(here.is_equal_to(&nowhere));
    assert_eq!(here, elsewhere);
}

#[test]
fn equality_respects_payload() {
    let a = Value::string("a");
    let b = Value::string("b");
    assert!(!a.is_equal_to(&b));
    assert_ne!(a, b);
    assert_ne!(Value::int(1), Value::float(1.0));
}

#[test]
fn deep_copy_is_structurally_equal_and_independent() {
    let mut original = ObjectTypeDefinition::new("Query");
    original.directives.push(Directive::new("key"));

    let mut copy = original.deep_copy();
    assert!(copy.is_equal_to(&original));

    copy.directives.push(Directive::new("shareable"));
    assert_eq!(original.directives.len(), 1);
    assert_eq!(copy.directives.len(), 2);
}

#[test]
fn leaf_value_rejects_any_children() {
    let value = Value::int(42);

    let empty = NodeChildrenContainer::new();
    assert_eq!(value.with_new_children(empty), Ok(Value::int(42)));

    let populated = NodeChildrenContainer::new().with_slot(
        child_slot::VALUES,
        vec![NodeChild::Value(Value::null())],
    );
    assert_eq!(
        value.with_new_children(populated),
        Err(NodeError::UnexpectedChildSlot {
            node_kind: "Value",
            slot: child_slot::VALUES.to_string(),
        }),
    );
}

#[test]
fn with_new_children_rejects_undeclared_slot() {
    let directive = Directive::new("deprecated");
    let children = NodeChildrenContainer::new().with_slot(
        child_slot::DIRECTIVES,
        vec![NodeChild::Directive(Directive::new("other"))],
    );

    assert!(matches!(
        directive.with_new_children(children),
        Err(NodeError::UnexpectedChildSlot { node_kind: "Directive", .. }),
    ));
}

#[test]
fn with_new_children_replaces_declared_slot() {
    let directive = Directive {
        arguments: vec![Argument::new("if", Value::boolean(true))],
        info: NodeInfo::default(),
        name: "include".to_string(),
    };

    let replacement = directive
        .with_new_children(NodeChildrenContainer::new().with_slot(
            child_slot::ARGUMENTS,
            vec![NodeChild::Argument(
                Argument::new("if", Value::boolean(false)),
            )],
        ))
        .unwrap();

    assert_eq!(replacement.name, "include");
    assert_eq!(
        replacement.argument("if"),
        Some(&Value::boolean(false)),
    );
}

#[test]
fn with_new_children_rejects_mismatched_child_kind() {
    let directive = Directive::new("include");
    let children = NodeChildrenContainer::new().with_slot(
        child_slot::ARGUMENTS,
        vec![NodeChild::Value(Value::null())],
    );

    assert_eq!(
        directive.with_new_children(children),
        Err(NodeError::MismatchedChildKind {
            node_kind: "Directive",
            slot: child_slot::ARGUMENTS,
        }),
    );
}

#[test]
fn named_children_round_trips_through_with_new_children() {
    let mut object_type = ObjectTypeDefinition::new("Widget");
    object_type.directives.push(Directive::new("key"));

    let rebuilt = object_type
        .with_new_children(object_type.named_children())
        .unwrap();
    assert!(rebuilt.is_equal_to(&object_type));
}

#[test]
fn type_reference_unwrapping_and_display() {
    // [[ID!]]!
    let type_ref = TypeReference::non_null(TypeReference::list_of(
        TypeReference::list_of(TypeReference::non_null(TypeReference::named(
            "ID",
        ))),
    ));

    assert_eq!(type_ref.innermost_named_type().name, "ID");
    assert_eq!(type_ref.to_string(), "[[ID!]]!");
}

#[test]
fn non_null_wrapping_non_null_is_representable() {
    let doubled =
        TypeReference::non_null(TypeReference::non_null(TypeReference::named(
            "String",
        )));
    assert_eq!(doubled.innermost_named_type().name, "String");
    assert_eq!(doubled.to_string(), "String!!");
}
