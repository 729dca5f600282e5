use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::validation::schema_validator::is_system_element;
use crate::validation::SchemaValidationError;
use crate::validation::SchemaValidationErrorCollector;
use crate::validation::SchemaValidationErrorKind;
use crate::validation::SchemaValidationRule;

/// Every composite type must declare at least one member: fields for
/// objects, interfaces, and input objects, values for enums, member types
/// for unions.
pub struct TypeMembersRule;

impl SchemaValidationRule for TypeMembersRule {
    fn check(
        &self,
        schema: &Schema,
        collector: &mut SchemaValidationErrorCollector,
    ) {
        for (type_name, schema_type) in schema.type_map() {
            if is_system_element(type_name) {
                continue;
            }
            match schema_type {
                SchemaType::Object(object_type)
                    if object_type.fields.is_empty() =>
                {
                    collector.add_error(SchemaValidationError::new(
                        SchemaValidationErrorKind::ImplementingTypeLackOfField,
                        type_name,
                        format!(
                            "\"{type_name}\" must define one or more fields.",
                        ),
                    ));
                },

                SchemaType::Interface(interface_type)
                    if interface_type.fields.is_empty() =>
                {
                    collector.add_error(SchemaValidationError::new(
                        SchemaValidationErrorKind::ImplementingTypeLackOfField,
                        type_name,
                        format!(
                            "\"{type_name}\" must define one or more fields.",
                        ),
                    ));
                },

                SchemaType::InputObject(input_object_type)
                    if input_object_type.input_fields.is_empty() =>
                {
                    collector.add_error(SchemaValidationError::new(
                        SchemaValidationErrorKind::InputObjectTypeLackOfField,
                        type_name,
                        format!(
                            "\"{type_name}\" must define one or more fields.",
                        ),
                    ));
                },

                SchemaType::Enum(enum_type) if enum_type.values.is_empty() => {
                    collector.add_error(SchemaValidationError::new(
                        SchemaValidationErrorKind::EnumLackOfValue,
                        type_name,
                        format!(
                            "Enum type \"{type_name}\" must define one or \
                            more enum values.",
                        ),
                    ));
                },

                SchemaType::Union(union_type)
                    if union_type.members.is_empty() =>
                {
                    collector.add_error(SchemaValidationError::new(
                        SchemaValidationErrorKind::UnionTypeLackOfType,
                        type_name,
                        format!(
                            "Union type \"{type_name}\" must include one or \
                            more unique member types.",
                        ),
                    ));
                },

                _ => {},
            }
        }
    }
}
