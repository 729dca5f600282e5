use crate::ast::parse_sdl_document;
use crate::registry::TypeDefinitionRegistry;
use crate::schema::EnumType;
use crate::schema::FieldDef;
use crate::schema::InputFieldDef;
use crate::schema::InputObjectType;
use crate::schema::ObjectType;
use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::schema::TypeRef;
use crate::schema::UnionType;
use crate::validation::SchemaValidationErrorKind;
use crate::validation::SchemaValidator;
use crate::wiring::PropertyDataFetcher;
use crate::wiring::RuntimeWiring;
use crate::wiring::SchemaGenerator;
use std::sync::Arc;

fn schema_from_sdl(content: &str) -> Schema {
    let mut registry = TypeDefinitionRegistry::new();
    let errors = registry.merge(parse_sdl_document(None, content).unwrap());
    assert!(errors.is_empty(), "unexpected merge errors: {errors:?}");
    SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap()
}

fn field(name: &str, type_ref: TypeRef) -> FieldDef {
    FieldDef {
        arguments: vec![],
        data_fetcher: Arc::new(PropertyDataFetcher),
        description: None,
        directives: vec![],
        name: name.to_string(),
        type_ref,
    }
}

fn object(name: &str, fields: Vec<FieldDef>) -> SchemaType {
    SchemaType::Object(ObjectType {
        description: None,
        directives: vec![],
        fields,
        implements: vec![],
        name: name.to_string(),
    })
}

fn union(name: &str, members: &[&str]) -> SchemaType {
    SchemaType::Union(UnionType {
        description: None,
        directives: vec![],
        members: members.iter().map(|member| member.to_string()).collect(),
        name: name.to_string(),
        type_resolver: None,
    })
}

fn query_only_builder() -> crate::schema::SchemaBuilder {
    Schema::builder()
        .add_type(object("Query", vec![field("ok", TypeRef::named("Boolean"))]))
}

#[test]
fn clean_schema_validates_without_errors() {
    let schema = schema_from_sdl(
        "type Query { widget(id: ID!): Widget, widgets: [Widget!]! }\n\
         type Widget { id: ID, kind: Kind, filter: Filter }\n\
         enum Kind { SPROCKET, FLANGE }\n\
         input Filter { kind: Kind, limit: Int = 10 }\n\
         interface Named { name: String }\n\
         union Anything = Query | Widget",
    );
    let errors = SchemaValidator::new().validate_schema(&schema);
    assert_eq!(errors, vec![]);
}

#[test]
fn reserved_type_name_reports_exactly_one_error() {
    let schema = query_only_builder()
        .add_type(object("__Foo", vec![field("a", TypeRef::named("Boolean"))]))
        .build();
    let errors = SchemaValidator::new().validate_schema(&schema);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, SchemaValidationErrorKind::InvalidCustomizedName);
    assert_eq!(errors[0].offending_element, "__Foo");
    assert!(errors[0].description.contains("reserved by GraphQL introspection"));
}

#[test]
fn introspection_names_are_exempt() {
    let schema = query_only_builder()
        .add_type(object(
            "__Type",
            vec![field("name", TypeRef::named("String"))],
        ))
        .build();
    assert_eq!(SchemaValidator::new().validate_schema(&schema), vec![]);
}

#[test]
fn reserved_field_argument_and_enum_value_names_are_reported() {
    let mut bad_field = field("__hidden", TypeRef::named("Boolean"));
    bad_field.arguments.push(crate::schema::ArgumentDef {
        default_value: None,
        description: None,
        directives: vec![],
        name: "__arg".to_string(),
        type_ref: TypeRef::named("Boolean"),
    });
    let schema = query_only_builder()
        .add_type(object("Widget", vec![bad_field]))
        .add_type(SchemaType::Enum(EnumType {
            description: None,
            directives: vec![],
            name: "Kind".to_string(),
            values: vec![crate::schema::EnumValueDef {
                description: None,
                directives: vec![],
                name: "__NOPE".to_string(),
            }],
        }))
        .build();
    let errors = SchemaValidator::new().validate_schema(&schema);

    let elements: Vec<&str> = errors
        .iter()
        .map(|error| error.offending_element.as_str())
        .collect();
    assert_eq!(
        elements,
        vec!["Widget.__hidden", "Widget.__hidden.__arg", "Kind.__NOPE"],
    );
    assert!(errors
        .iter()
        .all(|e| e.kind == SchemaValidationErrorKind::InvalidCustomizedName));
}

#[test]
fn empty_composite_types_are_reported_per_kind() {
    let schema = query_only_builder()
        .add_type(object("Empty", vec![]))
        .add_type(SchemaType::Enum(EnumType {
            description: None,
            directives: vec![],
            name: "NoValues".to_string(),
            values: vec![],
        }))
        .add_type(SchemaType::InputObject(InputObjectType {
            description: None,
            directives: vec![],
            input_fields: vec![],
            name: "NoInputs".to_string(),
        }))
        .add_type(union("NoMembers", &[]))
        .build();
    let errors = SchemaValidator::new().validate_schema(&schema);

    let kinds: Vec<SchemaValidationErrorKind> =
        errors.iter().map(|error| error.kind).collect();
    assert_eq!(kinds, vec![
        SchemaValidationErrorKind::ImplementingTypeLackOfField,
        SchemaValidationErrorKind::EnumLackOfValue,
        SchemaValidationErrorKind::InputObjectTypeLackOfField,
        SchemaValidationErrorKind::UnionTypeLackOfType,
    ]);
    assert!(errors[3]
        .description
        .contains("must include one or more unique member types"));
}

#[test]
fn union_duplicate_member_reports_once_per_repeat_occurrence() {
    let schema = query_only_builder()
        .add_type(object("A", vec![field("x", TypeRef::named("Boolean"))]))
        .add_type(union("U", &["A", "A"]))
        .build();
    let errors = SchemaValidator::new().validate_schema(&schema);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, SchemaValidationErrorKind::RepetitiveElement);
    assert!(errors[0].description.contains("\"A\" in Union \"U\" is not unique"));

    // A third occurrence is one more repeat, not two: the seen-set keeps
    // evolving as members are scanned.
    let schema = query_only_builder()
        .add_type(object("A", vec![field("x", TypeRef::named("Boolean"))]))
        .add_type(union("U", &["A", "A", "A"]))
        .build();
    let errors = SchemaValidator::new().validate_schema(&schema);
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| e.kind == SchemaValidationErrorKind::RepetitiveElement));
}

#[test]
fn union_member_must_be_an_object_type() {
    let schema = schema_from_sdl(
        "type Query { u: U }\n\
         type A { x: Boolean }\n\
         scalar Odd\n\
         union U = A | Odd",
    );
    let errors = SchemaValidator::new().validate_schema(&schema);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, SchemaValidationErrorKind::InvalidUnionMemberType);
    assert!(errors[0]
        .description
        .contains("member type \"Odd\" in Union \"U\" is invalid"));
}

#[test]
fn non_null_wrapping_non_null_reports_exactly_one_error() {
    let doubled =
        TypeRef::non_null(TypeRef::non_null(TypeRef::named("String")));
    let schema = query_only_builder()
        .add_type(object("Widget", vec![field("bad", doubled)]))
        .build();
    let errors = SchemaValidator::new().validate_schema(&schema);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, SchemaValidationErrorKind::NonNullWrapNonNull);
    assert_eq!(errors[0].offending_element, "Widget.bad");
    assert!(errors[0].description.contains("\"String!!\" is invalid"));
}

#[test]
fn non_null_around_list_of_non_null_is_legal() {
    let legal = TypeRef::non_null(TypeRef::list_of(TypeRef::non_null(
        TypeRef::named("String"),
    )));
    let schema = query_only_builder()
        .add_type(object("Widget", vec![field("ok", legal)]))
        .build();
    assert_eq!(SchemaValidator::new().validate_schema(&schema), vec![]);
}

#[test]
fn input_field_types_are_checked_for_stacked_non_null() {
    let schema = query_only_builder()
        .add_type(SchemaType::InputObject(InputObjectType {
            description: None,
            directives: vec![],
            input_fields: vec![InputFieldDef {
                default_value: None,
                description: None,
                directives: vec![],
                name: "bad".to_string(),
                type_ref: TypeRef::non_null(TypeRef::non_null(
                    TypeRef::named("Int"),
                )),
            }],
            name: "Filter".to_string(),
        }))
        .build();
    let errors = SchemaValidator::new().validate_schema(&schema);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].offending_element, "Filter.bad");
}

#[test]
fn rules_never_short_circuit_each_other() {
    // One schema violating all four rules at once still yields every error.
    let schema = query_only_builder()
        .add_type(object("__Bad", vec![]))
        .add_type(union("U", &["Missing", "Missing"]))
        .add_type(object(
            "Widget",
            vec![field(
                "bad",
                TypeRef::non_null(TypeRef::non_null(TypeRef::named("Int"))),
            )],
        ))
        .build();
    let errors = SchemaValidator::new().validate_schema(&schema);

    let kinds: Vec<SchemaValidationErrorKind> =
        errors.iter().map(|error| error.kind).collect();
    assert!(kinds.contains(&SchemaValidationErrorKind::InvalidCustomizedName));
    assert!(kinds.contains(&SchemaValidationErrorKind::ImplementingTypeLackOfField));
    assert!(kinds.contains(&SchemaValidationErrorKind::InvalidUnionMemberType));
    assert!(kinds.contains(&SchemaValidationErrorKind::RepetitiveElement));
    assert!(kinds.contains(&SchemaValidationErrorKind::NonNullWrapNonNull));
}
