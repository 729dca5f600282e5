use crate::ast::Value;
use crate::schema::SchemaType;
use crate::wiring::tests::registry_from;
use crate::wiring::Coercing;
use crate::wiring::DataFetcher;
use crate::wiring::DataFetchingEnvironment;
use crate::wiring::FieldWiringEnvironment;
use crate::wiring::IdentityCoercing;
use crate::wiring::NoopWiringFactory;
use crate::wiring::PropertyDataFetcher;
use crate::wiring::RuntimeWiring;
use crate::wiring::SchemaDirectiveWiring;
use crate::wiring::SchemaDirectiveWiringEnvironment;
use crate::wiring::SchemaGenerator;
use crate::wiring::TypeResolver;
use crate::wiring::WiringFactory;
use std::sync::Arc;

struct ConstFetcher(Value);
impl DataFetcher for ConstFetcher {
    fn get(&self, _environment: &DataFetchingEnvironment) -> Option<Value> {
        Some(self.0.clone())
    }
}

struct ByKindResolver;
impl TypeResolver for ByKindResolver {
    fn resolve_type(&self, value: &Value) -> Option<String> {
        match value {
            Value::Int(_) => Some("Circle".to_string()),
            _ => Some("Square".to_string()),
        }
    }
}

fn fetch(schema_type: &SchemaType, field_name: &str) -> Option<Value> {
    let field = schema_type.as_object().unwrap().field(field_name).unwrap();
    field.data_fetcher.get(&DataFetchingEnvironment {
        field_name: field_name.to_string(),
        ..DataFetchingEnvironment::default()
    })
}

#[test]
fn property_fetcher_reads_object_properties() {
    let fetcher = PropertyDataFetcher;
    let source = Value::object(vec![crate::ast::ObjectField {
        info: crate::ast::NodeInfo::default(),
        name: "name".to_string(),
        value: Value::string("gizmo"),
    }]);

    let value = fetcher.get(&DataFetchingEnvironment {
        field_name: "name".to_string(),
        source: Some(source),
        ..DataFetchingEnvironment::default()
    });
    assert_eq!(value, Some(Value::string("gizmo")));
}

#[test]
fn per_field_fetcher_beats_every_default() {
    let registry = registry_from(&["type Query { a: String, b: String }"]);
    let wiring = RuntimeWiring::builder()
        .data_fetcher("Query", "a", Arc::new(ConstFetcher(Value::string("custom"))))
        .global_default_data_fetcher(Arc::new(ConstFetcher(Value::string("global"))))
        .build();
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &wiring)
        .unwrap();

    let query = schema.get_type("Query").unwrap();
    assert_eq!(fetch(query, "a"), Some(Value::string("custom")));
    // No per-field fetcher: the global default applies before the property
    // fetcher.
    assert_eq!(fetch(query, "b"), Some(Value::string("global")));
}

#[test]
fn per_type_default_beats_the_global_default() {
    let registry = registry_from(&["type Query { a: String }"]);
    let wiring = RuntimeWiring::builder()
        .default_data_fetcher("Query", Arc::new(ConstFetcher(Value::string("typed"))))
        .global_default_data_fetcher(Arc::new(ConstFetcher(Value::string("global"))))
        .build();
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &wiring)
        .unwrap();

    assert_eq!(
        fetch(schema.get_type("Query").unwrap(), "a"),
        Some(Value::string("typed")),
    );
}

struct FetcherProvidingFactory;
impl WiringFactory for FetcherProvidingFactory {
    fn provides_data_fetcher(&self, env: &FieldWiringEnvironment<'_>) -> bool {
        env.field_def.name == "a"
    }

    fn get_data_fetcher(
        &self,
        _env: &FieldWiringEnvironment<'_>,
    ) -> Arc<dyn DataFetcher> {
        Arc::new(ConstFetcher(Value::string("factory")))
    }
}

#[test]
fn wiring_factory_fetcher_beats_runtime_wiring_registrations() {
    let registry = registry_from(&["type Query { a: String }"]);
    let wiring = RuntimeWiring::builder()
        .wiring_factory(Arc::new(FetcherProvidingFactory))
        .data_fetcher("Query", "a", Arc::new(ConstFetcher(Value::string("wiring"))))
        .build();
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &wiring)
        .unwrap();

    assert_eq!(
        fetch(schema.get_type("Query").unwrap(), "a"),
        Some(Value::string("factory")),
    );
}

#[test]
fn type_resolvers_attach_to_interfaces_and_unions() {
    let registry = registry_from(&[
        "type Query { shape: Shape, any: Any }\n\
         interface Shape { area: Float }\n\
         type Circle implements Shape { area: Float }\n\
         type Square implements Shape { area: Float }\n\
         union Any = Circle | Square",
    ]);
    let wiring = RuntimeWiring::builder()
        .type_resolver("Shape", Arc::new(ByKindResolver))
        .type_resolver("Any", Arc::new(ByKindResolver))
        .build();
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &wiring)
        .unwrap();

    let shape = schema.get_type("Shape").unwrap().as_interface().unwrap();
    let resolver = shape.type_resolver.as_ref().unwrap();
    assert_eq!(resolver.resolve_type(&Value::int(1)), Some("Circle".to_string()));

    let any = schema.get_type("Any").unwrap().as_union().unwrap();
    assert!(any.type_resolver.is_some());

    // Absence of a resolver is not an error.
    let wiring = RuntimeWiring::default();
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &wiring)
        .unwrap();
    let shape = schema.get_type("Shape").unwrap().as_interface().unwrap();
    assert!(shape.type_resolver.is_none());
}

#[test]
fn custom_scalars_default_to_identity_coercing() {
    let registry = registry_from(&[
        "type Query { when: Time }\nscalar Time",
    ]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    let time = schema.get_type("Time").unwrap().as_scalar().unwrap();
    let odd = Value::list(vec![Value::int(1)]);
    assert_eq!(time.coercing.serialize(&odd), Ok(odd.clone()));
    assert_eq!(time.coercing.parse_literal(&odd), Ok(odd));
}

#[test]
fn builtin_scalar_coercing_rejects_incompatible_values() {
    let registry = registry_from(&["type Query { count: Int, avg: Float }"]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    let int = schema.get_type("Int").unwrap().as_scalar().unwrap();
    assert_eq!(int.coercing.serialize(&Value::int(3)), Ok(Value::int(3)));
    assert!(int.coercing.serialize(&Value::string("3")).is_err());

    // Int literals widen to Float.
    let float = schema.get_type("Float").unwrap().as_scalar().unwrap();
    assert_eq!(
        float.coercing.parse_literal(&Value::int(3)),
        Ok(Value::float(3.0)),
    );
}

#[test]
fn registered_scalar_coercing_wins_over_identity() {
    struct UppercasingCoercing;
    impl Coercing for UppercasingCoercing {
        fn serialize(
            &self,
            value: &Value,
        ) -> Result<Value, crate::wiring::CoercingError> {
            match value {
                Value::String(string) =>
                    Ok(Value::string(string.value.to_uppercase())),
                _ => Ok(value.clone()),
            }
        }

        fn parse_value(
            &self,
            value: &Value,
        ) -> Result<Value, crate::wiring::CoercingError> {
            Ok(value.clone())
        }

        fn parse_literal(
            &self,
            literal: &Value,
        ) -> Result<Value, crate::wiring::CoercingError> {
            Ok(literal.clone())
        }
    }

    let registry = registry_from(&[
        "type Query { code: CountryCode }\nscalar CountryCode",
    ]);
    let wiring = RuntimeWiring::builder()
        .scalar("CountryCode", Arc::new(UppercasingCoercing))
        .build();
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &wiring)
        .unwrap();

    let code = schema.get_type("CountryCode").unwrap().as_scalar().unwrap();
    assert_eq!(
        code.coercing.serialize(&Value::string("nz")),
        Ok(Value::string("NZ")),
    );
}

struct DescriptionTagger(&'static str);
impl SchemaDirectiveWiring for DescriptionTagger {
    fn on_type(
        &self,
        environment: SchemaDirectiveWiringEnvironment<'_>,
    ) -> SchemaType {
        let mut element = environment.element;
        if let SchemaType::Object(object_type) = &mut element {
            let existing = object_type.description.take().unwrap_or_default();
            object_type.description = Some(format!("{existing}{}", self.0));
        }
        element
    }
}

#[test]
fn directive_wiring_applies_in_declared_order() {
    let registry = registry_from(&[
        "type Query @first @second { ok: Boolean }",
    ]);
    let wiring = RuntimeWiring::builder()
        .directive_wiring("first", Arc::new(DescriptionTagger("first;")))
        .directive_wiring("second", Arc::new(DescriptionTagger("second;")))
        .build();
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &wiring)
        .unwrap();

    // Each application feeds the next, so ordering is observable.
    assert_eq!(
        schema.get_type("Query").unwrap().description(),
        Some("first;second;"),
    );
}

#[test]
fn unmatched_directives_leave_the_type_untouched() {
    let registry = registry_from(&[
        "type Query @unwired { ok: Boolean }",
    ]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    let query = schema.get_type("Query").unwrap();
    assert_eq!(query.description(), None);
    assert_eq!(query.directives().len(), 1);
}

#[test]
fn builtin_directive_defs_ride_along() {
    let registry = registry_from(&[
        "type Query { ok: Boolean }\n\
         directive @weight(value: Float!) on FIELD_DEFINITION",
    ]);
    let schema = SchemaGenerator::new()
        .make_executable_schema(&registry, &RuntimeWiring::default())
        .unwrap();

    assert!(schema.directive_def("deprecated").is_some());
    assert!(schema.directive_def("skip").is_some());
    let weight = schema.directive_def("weight").unwrap();
    assert_eq!(weight.arguments[0].type_ref.simple_print(), "Float!");
}

#[test]
#[should_panic(expected = "provides_scalar")]
fn factory_get_without_provides_panics() {
    let scalar_def = crate::ast::ScalarTypeDefinition {
        description: None,
        directives: vec![],
        info: crate::ast::NodeInfo::default(),
        name: "Time".to_string(),
    };
    let environment = crate::wiring::ScalarWiringEnvironment {
        scalar_def: &scalar_def,
    };
    let _ = NoopWiringFactory.get_scalar(&environment);
}

#[test]
fn identity_coercing_round_trips_all_values() {
    let coercing = IdentityCoercing;
    let value = Value::object(vec![]);
    assert_eq!(coercing.parse_value(&value), Ok(value.clone()));
    assert_eq!(coercing.serialize(&value), Ok(value));
}
