use crate::schema::SchemaTypeKind;
use crate::wiring::tests::registry_from;
use crate::wiring::RuntimeWiring;
use crate::wiring::SchemaGenerator;
use crate::wiring::WiringError;
use rayon::prelude::*;
use std::sync::Arc;

#[test]
fn generates_a_schema_with_default_root_names() {
    let registry = registry_from(&[
        "type Query { widget: Widget }\n\
         type Mutation { rename(id: ID!): Widget }\n\
         type Widget { id: ID, name: String }",
    ]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    assert_eq!(schema.query_type_name(), "Query");
    assert_eq!(schema.mutation_type_name(), Some("Mutation"));
    assert_eq!(schema.subscription_type_name(), None);
    assert_eq!(schema.query_root().unwrap().kind(), SchemaTypeKind::Object);
}

#[test]
fn respects_the_schema_definition_roots() {
    let registry = registry_from(&[
        "schema { query: Root }\ntype Root { ok: Boolean }",
    ]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    assert_eq!(schema.query_type_name(), "Root");
    assert!(schema.get_type("Root").is_some());
}

#[test]
fn cyclic_types_realize_through_the_name_arena() {
    let registry = registry_from(&[
        "type Query { root: Node }\n\
         type Node { parent: Node, children: [Node!]! }",
    ]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    let node = schema.get_type("Node").unwrap().as_object().unwrap();
    let parent = node.field("parent").unwrap();
    assert_eq!(parent.type_ref.innermost_name(), "Node");
    // Resolving the reference lands back on the same arena entry.
    let resolved = schema.get_type(parent.type_ref.innermost_name()).unwrap();
    assert_eq!(resolved.name(), "Node");

    let children = node.field("children").unwrap();
    assert_eq!(children.type_ref.simple_print(), "[Node!]!");
}

#[test]
fn type_map_preserves_merge_order() {
    let registry = registry_from(&[
        "type Query { a: Zeta, b: Alpha }\n\
         type Zeta { ok: Boolean }\n\
         type Alpha { ok: Boolean }",
    ]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    let names: Vec<&str> = schema
        .type_map()
        .keys()
        .map(String::as_str)
        .filter(|name| !["Boolean"].contains(name))
        .collect();
    assert_eq!(names, vec!["Query", "Zeta", "Alpha"]);
}

#[test]
fn referenced_builtin_scalars_are_injected() {
    let registry = registry_from(&["type Query { id: ID, count: Int }"]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    assert_eq!(schema.get_type("ID").unwrap().kind(), SchemaTypeKind::Scalar);
    assert_eq!(schema.get_type("Int").unwrap().kind(), SchemaTypeKind::Scalar);
    assert!(schema.get_type("Float").is_none());
}

#[test]
fn extension_fields_appear_on_the_realized_type_only() {
    let registry = registry_from(&[
        "type Query { id: ID }",
        "extend type Query { extra: String }",
    ]);

    // The registry's base definition is untouched by the extension.
    let base = registry.get_type("Query").unwrap().as_object().unwrap();
    assert_eq!(base.field_definitions.len(), 1);

    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();
    let realized = schema.get_type("Query").unwrap().as_object().unwrap();
    assert_eq!(realized.fields.len(), 2);
    assert!(realized.field("extra").is_some());
}

#[test]
fn extension_redefining_a_field_keeps_the_base_definition() {
    let registry = registry_from(&[
        "type Query { id: ID }",
        "extend type Query { id: String, extra: String }",
    ]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    let realized = schema.get_type("Query").unwrap().as_object().unwrap();
    assert_eq!(realized.fields.len(), 2);
    assert_eq!(realized.field("id").unwrap().type_ref.simple_print(), "ID");
}

#[test]
fn wrong_kind_extensions_never_fold() {
    let registry = registry_from(&[
        "type Query { color: Color }\nenum Color { RED }",
        "extend type Color { bogus: String }",
    ]);
    assert_eq!(registry.check_extension_targets().len(), 1);

    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();
    let color = schema.get_type("Color").unwrap().as_enum().unwrap();
    assert_eq!(color.values.len(), 1);
}

#[test]
fn all_unresolved_references_are_collected() {
    let registry = registry_from(&[
        "type Query { a: Ghost, b: Phantom }\n\
         union Haunted = Query | Spectre",
    ]);
    let problem = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap_err();

    let mut names: Vec<&str> = problem
        .errors
        .iter()
        .filter_map(|error| match error {
            WiringError::UnresolvedTypeReference { name, .. } =>
                Some(name.as_str()),
            _ => None,
        })
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Ghost", "Phantom", "Spectre"]);
}

#[test]
fn missing_query_root_is_fatal() {
    let registry = registry_from(&["type Widget { id: ID }"]);
    let problem = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap_err();

    assert!(matches!(
        problem.errors.as_slice(),
        [WiringError::MissingQueryRoot { name }] if name == "Query",
    ));
}

#[test]
fn non_object_query_root_is_fatal() {
    let registry = registry_from(&[
        "schema { query: Color }\nenum Color { RED }",
    ]);
    let problem = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap_err();

    assert!(matches!(
        problem.errors.as_slice(),
        [WiringError::NonObjectOperationRoot { operation, name }]
            if operation == "query" && name == "Color",
    ));
}

#[test]
fn explicitly_named_missing_mutation_root_is_fatal() {
    let registry = registry_from(&[
        "schema { query: Query, mutation: Missing }\n\
         type Query { ok: Boolean }",
    ]);
    let problem = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap_err();

    assert!(matches!(
        problem.errors.as_slice(),
        [WiringError::MissingOperationRoot { operation, name }]
            if operation == "mutation" && name == "Missing",
    ));
}

#[test]
fn realized_schema_supports_concurrent_reads() {
    let registry = registry_from(&[
        "type Query { root: Node }\n\
         type Node { parent: Node, id: ID }",
    ]);
    let schema = Arc::new(
        SchemaGenerator::new()
            .make_executable_schema(&registry, &RuntimeWiring::default())
            .unwrap(),
    );

    (0..64).into_par_iter().for_each(|_| {
        let node = schema.get_type("Node").unwrap().as_object().unwrap();
        assert_eq!(
            node.field("parent").unwrap().type_ref.innermost_name(),
            "Node",
        );
        assert_eq!(schema.query_type_name(), "Query");
    });
}
