use crate::schema::FieldDef;
use crate::schema::ObjectType;
use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::schema::SchemaTypeKind;
use crate::schema::TypeRef;
use crate::schema::introspection;
use crate::schema::scalar_info;
use crate::wiring::PropertyDataFetcher;
use std::sync::Arc;

fn object(name: &str, field_names: &[&str]) -> SchemaType {
    SchemaType::Object(ObjectType {
        description: None,
        directives: vec![],
        fields: field_names
            .iter()
            .map(|field_name| FieldDef {
                arguments: vec![],
                data_fetcher: Arc::new(PropertyDataFetcher),
                description: None,
                directives: vec![],
                name: field_name.to_string(),
                type_ref: TypeRef::named("String"),
            })
            .collect(),
        implements: vec![],
        name: name.to_string(),
    })
}

#[test]
fn builder_defaults_the_query_root_name() {
    let schema = Schema::builder()
        .add_type(object("Query", &["ok"]))
        .build();

    assert_eq!(schema.query_type_name(), "Query");
    assert_eq!(schema.mutation_type_name(), None);
    let root = schema.query_root().unwrap();
    assert_eq!(root.kind(), SchemaTypeKind::Object);
    assert!(root.as_object().unwrap().field("ok").is_some());
}

#[test]
fn builder_registers_types_in_insertion_order() {
    let schema = Schema::builder()
        .query_type("Root")
        .add_type(object("Root", &["a"]))
        .add_type(object("Zeta", &["b"]))
        .add_type(object("Alpha", &["c"]))
        .build();

    let names: Vec<&str> = schema.type_map().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Root", "Zeta", "Alpha"]);
}

#[test]
fn later_registration_replaces_earlier_one() {
    let schema = Schema::builder()
        .add_type(object("Query", &["old"]))
        .add_type(object("Query", &["new"]))
        .build();

    let query = schema.query_root().unwrap().as_object().unwrap();
    assert!(query.field("old").is_none());
    assert!(query.field("new").is_some());
}

#[test]
fn system_name_predicates() {
    assert!(introspection::is_introspection_type("__Schema"));
    assert!(introspection::is_introspection_type("__TypeKind"));
    assert!(!introspection::is_introspection_type("__Custom"));

    assert!(scalar_info::is_graphql_specified_scalar("ID"));
    assert!(scalar_info::is_graphql_specified_scalar("Float"));
    assert!(!scalar_info::is_graphql_specified_scalar("Time"));
}
