use crate::ast;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::registry::TypeDefinitionRegistry;
use crate::schema::ArgumentDef;
use crate::schema::EnumType;
use crate::schema::EnumValueDef;
use crate::schema::FieldDef;
use crate::schema::InputFieldDef;
use crate::schema::InputObjectType;
use crate::schema::InterfaceType;
use crate::schema::ObjectType;
use crate::schema::ScalarType;
use crate::schema::Schema;
use crate::schema::SchemaDirectiveDef;
use crate::schema::SchemaType;
use crate::schema::SchemaTypeKind;
use crate::schema::TypeRef;
use crate::schema::UnionType;
use crate::schema::scalar_info;
use crate::wiring::Coercing;
use crate::wiring::DataFetcher;
use crate::wiring::FieldWiringEnvironment;
use crate::wiring::IdentityCoercing;
use crate::wiring::InterfaceWiringEnvironment;
use crate::wiring::PropertyDataFetcher;
use crate::wiring::RuntimeWiring;
use crate::wiring::ScalarWiringEnvironment;
use crate::wiring::SchemaDirectiveWiringEnvironment;
use crate::wiring::SchemaProblem;
use crate::wiring::SpecifiedScalarCoercing;
use crate::wiring::TypeResolver;
use crate::wiring::UnionWiringEnvironment;
use crate::wiring::WiringError;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::sync::Arc;

/// Turns a [`TypeDefinitionRegistry`] plus a [`RuntimeWiring`] into a
/// realized [`Schema`].
///
/// Generation is staged: extensions are folded into effective definitions,
/// every named type reference is resolved (collecting ALL unresolved names
/// before failing), the cyclic type graph is realized into a name-keyed
/// arena, behaviors are attached, and schema-directive wirings are applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchemaGenerator;

impl SchemaGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn make_executable_schema(
        &self,
        registry: &TypeDefinitionRegistry,
        wiring: &RuntimeWiring,
    ) -> Result<Schema, SchemaProblem> {
        GeneratorRun { registry, wiring }.run()
    }
}

struct GeneratorRun<'a> {
    registry: &'a TypeDefinitionRegistry,
    wiring: &'a RuntimeWiring,
}

impl GeneratorRun<'_> {
    fn run(self) -> Result<Schema, SchemaProblem> {
        let effective_defs = self.effective_definitions();

        let mut errors = vec![];
        let used_scalars = self.resolve_references(&effective_defs, &mut errors);
        let roots = self.determine_roots(&effective_defs, &mut errors);
        if !errors.is_empty() {
            return Err(SchemaProblem { errors });
        }
        let (query_type, mutation_type, subscription_type) = roots;

        let mut types: IndexMap<String, SchemaType> = effective_defs
            .iter()
            .map(|def| (def.name().to_string(), self.realize(def)))
            .collect();
        for scalar_name in used_scalars {
            types.insert(
                scalar_name.clone(),
                SchemaType::Scalar(ScalarType {
                    coercing: self.builtin_scalar_coercing(&scalar_name),
                    description: None,
                    directives: vec![],
                    name: scalar_name,
                }),
            );
        }

        let types = self.apply_directive_wiring(types);
        log::debug!(
            "generated schema with {} types (query root `{query_type}`)",
            types.len(),
        );

        Ok(Schema {
            directive_defs: self.realize_directive_defs(),
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }

    /// Fold each base definition together with its matching extensions, in
    /// extension arrival order. Extensions with an undefined or wrong-kind
    /// target never fold (callers learn about them from
    /// [`TypeDefinitionRegistry::check_extension_targets`]).
    fn effective_definitions(&self) -> Vec<TypeDefinition> {
        self.registry
            .types()
            .map(|base| {
                let mut effective = base.clone();
                for extension in self.registry.extensions_of(base.name()) {
                    fold_extension(&mut effective, extension);
                }
                effective
            })
            .collect()
    }

    /// Walk every type-reference position of every effective definition and
    /// collect the full set of unresolved names into `errors`. Returns the
    /// built-in scalar names the schema references without defining.
    fn resolve_references(
        &self,
        effective_defs: &[TypeDefinition],
        errors: &mut Vec<WiringError>,
    ) -> IndexSet<String> {
        let defined: IndexSet<&str> = self.registry.type_names().collect();
        let mut unresolved: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut used_scalars = IndexSet::new();

        let mut check = |name: &str, context: String| {
            if defined.contains(name) {
                return;
            }
            if scalar_info::is_graphql_specified_scalar(name) {
                used_scalars.insert(name.to_string());
                return;
            }
            unresolved.entry(name.to_string()).or_default().push(context);
        };

        for def in effective_defs {
            let type_name = def.name();
            match def {
                TypeDefinition::Object(object_def) => {
                    for implemented in &object_def.implements {
                        check(
                            &implemented.name,
                            format!("`{type_name}` implements"),
                        );
                    }
                    check_field_references(
                        type_name,
                        &object_def.field_definitions,
                        &mut check,
                    );
                },
                TypeDefinition::Interface(interface_def) => {
                    for implemented in &interface_def.implements {
                        check(
                            &implemented.name,
                            format!("`{type_name}` implements"),
                        );
                    }
                    check_field_references(
                        type_name,
                        &interface_def.field_definitions,
                        &mut check,
                    );
                },
                TypeDefinition::Union(union_def) => {
                    for member in &union_def.member_types {
                        check(&member.name, format!("union `{type_name}`"));
                    }
                },
                TypeDefinition::InputObject(input_object_def) => {
                    for input_field in &input_object_def.input_field_definitions {
                        check(
                            input_field.value_type.innermost_named_type().name.as_str(),
                            format!("`{type_name}.{}`", input_field.name),
                        );
                    }
                },
                TypeDefinition::Enum(_) | TypeDefinition::Scalar(_) => {},
            }
        }

        errors.extend(unresolved.into_iter().map(|(name, referenced_from)| {
            WiringError::UnresolvedTypeReference { name, referenced_from }
        }));
        used_scalars
    }

    /// Operation root names, from the `schema {}` definition when present
    /// or the conventional `Query`/`Mutation`/`Subscription` names.
    fn determine_roots(
        &self,
        effective_defs: &[TypeDefinition],
        errors: &mut Vec<WiringError>,
    ) -> (String, Option<String>, Option<String>) {
        let kind_of = |name: &str| {
            effective_defs
                .iter()
                .find(|def| def.name() == name)
                .map(TypeDefinition::kind)
        };
        let schema_def = self.registry.schema_definition();

        let query_name = schema_def
            .and_then(|def| def.query.clone())
            .unwrap_or_else(|| "Query".to_string());
        match kind_of(&query_name) {
            Some(ast::TypeDefinitionKind::Object) => {},
            Some(_) => errors.push(WiringError::NonObjectOperationRoot {
                operation: "query".to_string(),
                name: query_name.clone(),
            }),
            None => errors.push(WiringError::MissingQueryRoot {
                name: query_name.clone(),
            }),
        }

        let mut optional_root = |operation: &str, explicit: Option<&String>| {
            let default_name = match operation {
                "mutation" => "Mutation",
                _ => "Subscription",
            };
            let (name, is_explicit) = match explicit {
                Some(name) => (name.clone(), true),
                None => (default_name.to_string(), false),
            };
            match kind_of(&name) {
                Some(ast::TypeDefinitionKind::Object) => Some(name),
                Some(_) => {
                    errors.push(WiringError::NonObjectOperationRoot {
                        operation: operation.to_string(),
                        name,
                    });
                    None
                },
                None if is_explicit => {
                    errors.push(WiringError::MissingOperationRoot {
                        operation: operation.to_string(),
                        name,
                    });
                    None
                },
                None => None,
            }
        };
        let mutation_name =
            optional_root("mutation", schema_def.and_then(|def| def.mutation.as_ref()));
        let subscription_name = optional_root(
            "subscription",
            schema_def.and_then(|def| def.subscription.as_ref()),
        );

        (query_name, mutation_name, subscription_name)
    }

    fn realize(&self, def: &TypeDefinition) -> SchemaType {
        match def {
            TypeDefinition::Object(object_def) =>
                SchemaType::Object(ObjectType {
                    description: object_def.description.clone(),
                    directives: object_def.directives.clone(),
                    fields: object_def
                        .field_definitions
                        .iter()
                        .map(|field| self.realize_field(&object_def.name, field))
                        .collect(),
                    implements: object_def
                        .implements
                        .iter()
                        .map(|implemented| implemented.name.clone())
                        .collect(),
                    name: object_def.name.clone(),
                }),

            TypeDefinition::Interface(interface_def) =>
                SchemaType::Interface(InterfaceType {
                    description: interface_def.description.clone(),
                    directives: interface_def.directives.clone(),
                    fields: interface_def
                        .field_definitions
                        .iter()
                        .map(|field| self.realize_field(&interface_def.name, field))
                        .collect(),
                    name: interface_def.name.clone(),
                    type_resolver: self.interface_type_resolver(interface_def),
                }),

            TypeDefinition::Union(union_def) =>
                SchemaType::Union(UnionType {
                    description: union_def.description.clone(),
                    directives: union_def.directives.clone(),
                    members: union_def
                        .member_types
                        .iter()
                        .map(|member| member.name.clone())
                        .collect(),
                    name: union_def.name.clone(),
                    type_resolver: self.union_type_resolver(union_def),
                }),

            TypeDefinition::Enum(enum_def) =>
                SchemaType::Enum(EnumType {
                    description: enum_def.description.clone(),
                    directives: enum_def.directives.clone(),
                    name: enum_def.name.clone(),
                    values: enum_def
                        .values
                        .iter()
                        .map(|value| EnumValueDef {
                            description: value.description.clone(),
                            directives: value.directives.clone(),
                            name: value.name.clone(),
                        })
                        .collect(),
                }),

            TypeDefinition::InputObject(input_object_def) =>
                SchemaType::InputObject(InputObjectType {
                    description: input_object_def.description.clone(),
                    directives: input_object_def.directives.clone(),
                    input_fields: input_object_def
                        .input_field_definitions
                        .iter()
                        .map(realize_input_field)
                        .collect(),
                    name: input_object_def.name.clone(),
                }),

            TypeDefinition::Scalar(scalar_def) =>
                SchemaType::Scalar(ScalarType {
                    coercing: self.scalar_coercing(scalar_def),
                    description: scalar_def.description.clone(),
                    directives: scalar_def.directives.clone(),
                    name: scalar_def.name.clone(),
                }),
        }
    }

    fn realize_field(
        &self,
        parent_type_name: &str,
        field: &ast::FieldDefinition,
    ) -> FieldDef {
        let environment = FieldWiringEnvironment {
            field_def: field,
            parent_type_name,
        };
        FieldDef {
            arguments: field.arguments.iter().map(realize_argument).collect(),
            data_fetcher: self.field_data_fetcher(&environment),
            description: field.description.clone(),
            directives: field.directives.clone(),
            name: field.name.clone(),
            type_ref: TypeRef::from_ast(&field.field_type),
        }
    }

    /// The fetcher fallback chain: wiring factory (factory-of-fetchers, then
    /// direct fetcher), per-field registration, per-type default, global
    /// default, property fetcher.
    fn field_data_fetcher(
        &self,
        environment: &FieldWiringEnvironment<'_>,
    ) -> Arc<dyn DataFetcher> {
        let factory = self.wiring.wiring_factory.as_ref();
        if factory.provides_data_fetcher_factory(environment) {
            return factory
                .get_data_fetcher_factory(environment)
                .create(environment);
        }
        if factory.provides_data_fetcher(environment) {
            return factory.get_data_fetcher(environment);
        }
        if let Some(fetcher) = self
            .wiring
            .data_fetcher(environment.parent_type_name, &environment.field_def.name)
        {
            return fetcher.clone();
        }
        if let Some(fetcher) = self
            .wiring
            .default_data_fetchers
            .get(environment.parent_type_name)
        {
            return fetcher.clone();
        }
        if let Some(fetcher) = &self.wiring.global_default_data_fetcher {
            return fetcher.clone();
        }
        Arc::new(PropertyDataFetcher)
    }

    fn interface_type_resolver(
        &self,
        interface_def: &ast::InterfaceTypeDefinition,
    ) -> Option<Arc<dyn TypeResolver>> {
        let factory = self.wiring.wiring_factory.as_ref();
        let environment = InterfaceWiringEnvironment { interface_def };
        if factory.provides_interface_type_resolver(&environment) {
            return Some(factory.get_interface_type_resolver(&environment));
        }
        self.wiring.type_resolver(&interface_def.name).cloned()
    }

    fn union_type_resolver(
        &self,
        union_def: &ast::UnionTypeDefinition,
    ) -> Option<Arc<dyn TypeResolver>> {
        let factory = self.wiring.wiring_factory.as_ref();
        let environment = UnionWiringEnvironment { union_def };
        if factory.provides_union_type_resolver(&environment) {
            return Some(factory.get_union_type_resolver(&environment));
        }
        self.wiring.type_resolver(&union_def.name).cloned()
    }

    fn scalar_coercing(
        &self,
        scalar_def: &ast::ScalarTypeDefinition,
    ) -> Arc<dyn Coercing> {
        let factory = self.wiring.wiring_factory.as_ref();
        let environment = ScalarWiringEnvironment { scalar_def };
        if factory.provides_scalar(&environment) {
            return factory.get_scalar(&environment);
        }
        if let Some(coercing) = self.wiring.scalar(&scalar_def.name) {
            return coercing.clone();
        }
        self.builtin_scalar_coercing(&scalar_def.name)
    }

    fn builtin_scalar_coercing(&self, name: &str) -> Arc<dyn Coercing> {
        if let Some(coercing) = self.wiring.scalar(name) {
            return coercing.clone();
        }
        match SpecifiedScalarCoercing::for_scalar(name) {
            Some(coercing) => Arc::new(coercing),
            None => Arc::new(IdentityCoercing),
        }
    }

    /// Apply schema-directive wiring per type, one application per declared
    /// directive, in declaration order, each output feeding the next.
    fn apply_directive_wiring(
        &self,
        types: IndexMap<String, SchemaType>,
    ) -> IndexMap<String, SchemaType> {
        let factory = self.wiring.wiring_factory.as_ref();
        types
            .into_iter()
            .map(|(name, schema_type)| {
                let declared = schema_type.directives().to_vec();
                let mut current = schema_type;
                for directive in &declared {
                    let environment = SchemaDirectiveWiringEnvironment {
                        directive,
                        element: current,
                    };
                    if factory.provides_schema_directive_wiring(&environment) {
                        let wiring =
                            factory.get_schema_directive_wiring(&environment);
                        current = wiring.on_type(environment);
                    } else if let Some(wiring) =
                        self.wiring.directive_wirings.get(&directive.name)
                    {
                        current = wiring.on_type(environment);
                    } else {
                        current = environment.element;
                    }
                }
                (name, current)
            })
            .collect()
    }

    fn realize_directive_defs(&self) -> IndexMap<String, SchemaDirectiveDef> {
        let mut directive_defs = builtin_directive_defs();
        for def in self.registry.directive_defs() {
            directive_defs.insert(
                def.name.clone(),
                SchemaDirectiveDef {
                    arguments: def.arguments.iter().map(realize_argument).collect(),
                    description: def.description.clone(),
                    locations: def.locations.clone(),
                    name: def.name.clone(),
                    repeatable: def.repeatable,
                },
            );
        }
        directive_defs
    }
}

fn check_field_references(
    type_name: &str,
    fields: &[ast::FieldDefinition],
    check: &mut impl FnMut(&str, String),
) {
    for field in fields {
        check(
            field.field_type.innermost_named_type().name.as_str(),
            format!("`{type_name}.{}`", field.name),
        );
        for argument in &field.arguments {
            check(
                argument.value_type.innermost_named_type().name.as_str(),
                format!("`{type_name}.{}({}:)`", field.name, argument.name),
            );
        }
    }
}

fn realize_argument(input_value: &ast::InputValueDefinition) -> ArgumentDef {
    ArgumentDef {
        default_value: input_value.default_value.clone(),
        description: input_value.description.clone(),
        directives: input_value.directives.clone(),
        name: input_value.name.clone(),
        type_ref: TypeRef::from_ast(&input_value.value_type),
    }
}

fn realize_input_field(input_value: &ast::InputValueDefinition) -> InputFieldDef {
    InputFieldDef {
        default_value: input_value.default_value.clone(),
        description: input_value.description.clone(),
        directives: input_value.directives.clone(),
        name: input_value.name.clone(),
        type_ref: TypeRef::from_ast(&input_value.value_type),
    }
}

fn append_fields(
    target_kind: SchemaTypeKind,
    type_name: &str,
    base_fields: &mut Vec<ast::FieldDefinition>,
    extension_fields: &[ast::FieldDefinition],
) {
    for field in extension_fields {
        if base_fields.iter().any(|existing| existing.name == field.name) {
            log::warn!(
                "{target_kind} extension of `{type_name}` redefines field \
                `{}`; keeping the base definition",
                field.name,
            );
            continue;
        }
        base_fields.push(field.clone());
    }
}

/// Merge one extension into its (kind-matching) base definition. Fields and
/// enum values redefined by the extension are dropped with a logged
/// advisory; union members and directives append unconditionally.
fn fold_extension(base: &mut TypeDefinition, extension: &TypeExtension) {
    match (base, extension) {
        (TypeDefinition::Object(base_def), TypeExtension::Object(ext_def)) => {
            append_fields(
                SchemaTypeKind::Object,
                &base_def.name,
                &mut base_def.field_definitions,
                &ext_def.field_definitions,
            );
            base_def.directives.extend(ext_def.directives.iter().cloned());
            for implemented in &ext_def.implements {
                if !base_def
                    .implements
                    .iter()
                    .any(|existing| existing.name == implemented.name)
                {
                    base_def.implements.push(implemented.clone());
                }
            }
        },

        (
            TypeDefinition::Interface(base_def),
            TypeExtension::Interface(ext_def),
        ) => {
            append_fields(
                SchemaTypeKind::Interface,
                &base_def.name,
                &mut base_def.field_definitions,
                &ext_def.field_definitions,
            );
            base_def.directives.extend(ext_def.directives.iter().cloned());
        },

        (TypeDefinition::Union(base_def), TypeExtension::Union(ext_def)) => {
            base_def
                .member_types
                .extend(ext_def.member_types.iter().cloned());
            base_def.directives.extend(ext_def.directives.iter().cloned());
        },

        (TypeDefinition::Enum(base_def), TypeExtension::Enum(ext_def)) => {
            for value in &ext_def.values {
                if base_def
                    .values
                    .iter()
                    .any(|existing| existing.name == value.name)
                {
                    log::warn!(
                        "enum extension of `{}` redefines value `{}`; \
                        keeping the base definition",
                        base_def.name,
                        value.name,
                    );
                    continue;
                }
                base_def.values.push(value.clone());
            }
            base_def.directives.extend(ext_def.directives.iter().cloned());
        },

        (
            TypeDefinition::InputObject(base_def),
            TypeExtension::InputObject(ext_def),
        ) => {
            for input_field in &ext_def.input_field_definitions {
                if base_def
                    .input_field_definitions
                    .iter()
                    .any(|existing| existing.name == input_field.name)
                {
                    log::warn!(
                        "input object extension of `{}` redefines field \
                        `{}`; keeping the base definition",
                        base_def.name,
                        input_field.name,
                    );
                    continue;
                }
                base_def.input_field_definitions.push(input_field.clone());
            }
            base_def.directives.extend(ext_def.directives.iter().cloned());
        },

        (TypeDefinition::Scalar(base_def), TypeExtension::Scalar(ext_def)) => {
            base_def.directives.extend(ext_def.directives.iter().cloned());
        },

        // Kind mismatch: the extension does not fold.
        _ => {},
    }
}

fn builtin_directive_defs() -> IndexMap<String, SchemaDirectiveDef> {
    let string_arg = |name: &str, default: Option<&str>| ArgumentDef {
        default_value: default.map(ast::Value::string),
        description: None,
        directives: vec![],
        name: name.to_string(),
        type_ref: TypeRef::named("String"),
    };
    let required_arg = |name: &str, type_name: &str| ArgumentDef {
        default_value: None,
        description: None,
        directives: vec![],
        name: name.to_string(),
        type_ref: TypeRef::non_null(TypeRef::named(type_name)),
    };

    let defs = [
        SchemaDirectiveDef {
            arguments: vec![required_arg("if", "Boolean")],
            description: None,
            locations: ["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]
                .map(String::from)
                .to_vec(),
            name: "skip".to_string(),
            repeatable: false,
        },
        SchemaDirectiveDef {
            arguments: vec![required_arg("if", "Boolean")],
            description: None,
            locations: ["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]
                .map(String::from)
                .to_vec(),
            name: "include".to_string(),
            repeatable: false,
        },
        SchemaDirectiveDef {
            arguments: vec![string_arg("reason", Some("No longer supported"))],
            description: None,
            locations: [
                "FIELD_DEFINITION",
                "ARGUMENT_DEFINITION",
                "INPUT_FIELD_DEFINITION",
                "ENUM_VALUE",
            ]
            .map(String::from)
            .to_vec(),
            name: "deprecated".to_string(),
            repeatable: false,
        },
        SchemaDirectiveDef {
            arguments: vec![required_arg("url", "String")],
            description: None,
            locations: vec!["SCALAR".to_string()],
            name: "specifiedBy".to_string(),
            repeatable: false,
        },
    ];
    defs.into_iter()
        .map(|def| (def.name.clone(), def))
        .collect()
}
