use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::NamedType;
use crate::ast::NodeInfo;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeReference;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::value;
use crate::loc;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type ParserDirective = graphql_parser::schema::Directive<'static, String>;
type ParserEnumValue = graphql_parser::schema::EnumValue<'static, String>;
type ParserField = graphql_parser::schema::Field<'static, String>;
type ParserInputValue = graphql_parser::schema::InputValue<'static, String>;
type ParserType = graphql_parser::schema::Type<'static, String>;
type ParserValue = graphql_parser::schema::Value<'static, String>;

#[derive(Debug, Error)]
pub enum SdlParseError {
    #[error("failed to parse SDL document{}: {err}", render_file(file))]
    Syntax {
        file: Option<PathBuf>,
        err: graphql_parser::schema::ParseError,
    },
}

fn render_file(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) => format!(" `{}`", path.display()),
        None => String::new(),
    }
}

/// Parse SDL text with the external parser and convert it into this crate's
/// node model. `file` is threaded into every node's source location for
/// error reporting; pass `None` for anonymous documents.
pub fn parse_sdl_document(
    file: Option<&Path>,
    content: &str,
) -> Result<Document, SdlParseError> {
    let doc = graphql_parser::schema::parse_schema::<String>(content)
        .map_err(|err| SdlParseError::Syntax {
            file: file.map(Path::to_path_buf),
            err,
        })?
        .into_static();

    let definitions = doc
        .definitions
        .into_iter()
        .map(|def| convert_definition(file, def))
        .collect();
    Ok(Document::new(definitions))
}

fn info_at(file: Option<&Path>, pos: graphql_parser::Pos) -> NodeInfo {
    NodeInfo::at(loc::SourceLocation::from_pos(file, pos))
}

fn convert_definition(
    file: Option<&Path>,
    def: graphql_parser::schema::Definition<'static, String>,
) -> Definition {
    use graphql_parser::schema::Definition as ParserDefinition;
    match def {
        ParserDefinition::SchemaDefinition(schema_def) =>
            Definition::Schema(SchemaDefinition {
                directives: convert_directives(file, &schema_def.directives),
                info: info_at(file, schema_def.position),
                mutation: schema_def.mutation,
                query: schema_def.query,
                subscription: schema_def.subscription,
            }),

        ParserDefinition::TypeDefinition(type_def) =>
            Definition::Type(convert_type_definition(file, type_def)),

        ParserDefinition::TypeExtension(type_ext) =>
            Definition::TypeExtension(convert_type_extension(file, type_ext)),

        ParserDefinition::DirectiveDefinition(directive_def) =>
            Definition::Directive(DirectiveDefinition {
                arguments: convert_input_values(file, &directive_def.arguments),
                description: directive_def.description,
                info: info_at(file, directive_def.position),
                locations: directive_def
                    .locations
                    .iter()
                    .map(|location| location.as_str().to_string())
                    .collect(),
                name: directive_def.name,
                repeatable: directive_def.repeatable,
            }),
    }
}

fn convert_type_definition(
    file: Option<&Path>,
    type_def: graphql_parser::schema::TypeDefinition<'static, String>,
) -> TypeDefinition {
    use graphql_parser::schema::TypeDefinition as ParserTypeDefinition;
    match type_def {
        ParserTypeDefinition::Scalar(def) =>
            TypeDefinition::Scalar(ScalarTypeDefinition {
                description: def.description,
                directives: convert_directives(file, &def.directives),
                info: info_at(file, def.position),
                name: def.name,
            }),

        ParserTypeDefinition::Object(def) =>
            TypeDefinition::Object(ObjectTypeDefinition {
                description: def.description,
                directives: convert_directives(file, &def.directives),
                field_definitions: convert_fields(file, &def.fields),
                implements: def
                    .implements_interfaces
                    .iter()
                    .map(NamedType::new)
                    .collect(),
                info: info_at(file, def.position),
                name: def.name,
            }),

        ParserTypeDefinition::Interface(def) =>
            TypeDefinition::Interface(InterfaceTypeDefinition {
                description: def.description,
                directives: convert_directives(file, &def.directives),
                field_definitions: convert_fields(file, &def.fields),
                implements: vec![],
                info: info_at(file, def.position),
                name: def.name,
            }),

        ParserTypeDefinition::Union(def) =>
            TypeDefinition::Union(UnionTypeDefinition {
                description: def.description,
                directives: convert_directives(file, &def.directives),
                info: info_at(file, def.position),
                member_types: def.types.iter().map(NamedType::new).collect(),
                name: def.name,
            }),

        ParserTypeDefinition::Enum(def) =>
            TypeDefinition::Enum(EnumTypeDefinition {
                description: def.description,
                directives: convert_directives(file, &def.directives),
                info: info_at(file, def.position),
                name: def.name,
                values: convert_enum_values(file, &def.values),
            }),

        ParserTypeDefinition::InputObject(def) =>
            TypeDefinition::InputObject(InputObjectTypeDefinition {
                description: def.description,
                directives: convert_directives(file, &def.directives),
                info: info_at(file, def.position),
                input_field_definitions: convert_input_values(file, &def.fields),
                name: def.name,
            }),
    }
}

fn convert_type_extension(
    file: Option<&Path>,
    type_ext: graphql_parser::schema::TypeExtension<'static, String>,
) -> TypeExtension {
    use graphql_parser::schema::TypeExtension as ParserTypeExtension;
    match type_ext {
        ParserTypeExtension::Scalar(ext) =>
            TypeExtension::Scalar(ScalarTypeDefinition {
                description: None,
                directives: convert_directives(file, &ext.directives),
                info: info_at(file, ext.position),
                name: ext.name,
            }),

        ParserTypeExtension::Object(ext) =>
            TypeExtension::Object(ObjectTypeDefinition {
                description: None,
                directives: convert_directives(file, &ext.directives),
                field_definitions: convert_fields(file, &ext.fields),
                implements: ext
                    .implements_interfaces
                    .iter()
                    .map(NamedType::new)
                    .collect(),
                info: info_at(file, ext.position),
                name: ext.name,
            }),

        ParserTypeExtension::Interface(ext) =>
            TypeExtension::Interface(InterfaceTypeDefinition {
                description: None,
                directives: convert_directives(file, &ext.directives),
                field_definitions: convert_fields(file, &ext.fields),
                implements: vec![],
                info: info_at(file, ext.position),
                name: ext.name,
            }),

        ParserTypeExtension::Union(ext) =>
            TypeExtension::Union(UnionTypeDefinition {
                description: None,
                directives: convert_directives(file, &ext.directives),
                info: info_at(file, ext.position),
                member_types: ext.types.iter().map(NamedType::new).collect(),
                name: ext.name,
            }),

        ParserTypeExtension::Enum(ext) =>
            TypeExtension::Enum(EnumTypeDefinition {
                description: None,
                directives: convert_directives(file, &ext.directives),
                info: info_at(file, ext.position),
                name: ext.name,
                values: convert_enum_values(file, &ext.values),
            }),

        ParserTypeExtension::InputObject(ext) =>
            TypeExtension::InputObject(InputObjectTypeDefinition {
                description: None,
                directives: convert_directives(file, &ext.directives),
                info: info_at(file, ext.position),
                input_field_definitions: convert_input_values(file, &ext.fields),
                name: ext.name,
            }),
    }
}

fn convert_fields(
    file: Option<&Path>,
    fields: &[ParserField],
) -> Vec<FieldDefinition> {
    fields
        .iter()
        .map(|field| FieldDefinition {
            arguments: convert_input_values(file, &field.arguments),
            description: field.description.clone(),
            directives: convert_directives(file, &field.directives),
            field_type: convert_type(&field.field_type),
            info: info_at(file, field.position),
            name: field.name.clone(),
        })
        .collect()
}

fn convert_input_values(
    file: Option<&Path>,
    input_values: &[ParserInputValue],
) -> Vec<InputValueDefinition> {
    input_values
        .iter()
        .map(|input_value| InputValueDefinition {
            default_value: input_value.default_value.as_ref().map(convert_value),
            description: input_value.description.clone(),
            directives: convert_directives(file, &input_value.directives),
            info: info_at(file, input_value.position),
            name: input_value.name.clone(),
            value_type: convert_type(&input_value.value_type),
        })
        .collect()
}

fn convert_enum_values(
    file: Option<&Path>,
    values: &[ParserEnumValue],
) -> Vec<EnumValueDefinition> {
    values
        .iter()
        .map(|value| EnumValueDefinition {
            description: value.description.clone(),
            directives: convert_directives(file, &value.directives),
            info: info_at(file, value.position),
            name: value.name.clone(),
        })
        .collect()
}

fn convert_directives(
    file: Option<&Path>,
    directives: &[ParserDirective],
) -> Vec<Directive> {
    directives
        .iter()
        .map(|directive| Directive {
            arguments: directive
                .arguments
                .iter()
                .map(|(name, value)| Argument::new(name, convert_value(value)))
                .collect(),
            info: info_at(file, directive.position),
            name: directive.name.clone(),
        })
        .collect()
}

// The external parser does not attach positions to type references or
// values, so converted ones come out synthetic (no source location).
fn convert_type(ast_type: &ParserType) -> TypeReference {
    match ast_type {
        ParserType::NamedType(name) => TypeReference::named(name),
        ParserType::ListType(inner) =>
            TypeReference::list_of(convert_type(inner)),
        ParserType::NonNullType(inner) =>
            TypeReference::non_null(convert_type(inner)),
    }
}

fn convert_value(ast_value: &ParserValue) -> Value {
    match ast_value {
        ParserValue::Variable(name) =>
            Value::Variable(value::VariableValue {
                info: NodeInfo::default(),
                name: name.clone(),
            }),
        ParserValue::Int(number) =>
            Value::int(number.as_i64().unwrap_or_default()),
        ParserValue::Float(float) => Value::float(*float),
        ParserValue::String(string) => Value::string(string.clone()),
        ParserValue::Boolean(boolean) => Value::boolean(*boolean),
        ParserValue::Null => Value::null(),
        ParserValue::Enum(name) => Value::enum_value(name.clone()),
        ParserValue::List(values) =>
            Value::list(values.iter().map(convert_value).collect()),
        ParserValue::Object(fields) =>
            Value::object(
                fields
                    .iter()
                    .map(|(name, value)| ObjectField {
                        info: NodeInfo::default(),
                        name: name.clone(),
                        value: convert_value(value),
                    })
                    .collect(),
            ),
    }
}
