use crate::schema::FieldDef;
use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::validation::schema_validator::is_system_element;
use crate::validation::SchemaValidationError;
use crate::validation::SchemaValidationErrorCollector;
use crate::validation::SchemaValidationErrorKind;
use crate::validation::SchemaValidationRule;

fn is_reserved(name: &str) -> bool {
    name.len() >= 2 && name.starts_with("__")
}

/// The `__` prefix belongs to introspection: no user-defined type, field,
/// argument, input field, enum value, or directive may use it.
pub struct ReservedNameRule;

impl ReservedNameRule {
    fn check_type_name(
        &self,
        type_name: &str,
        collector: &mut SchemaValidationErrorCollector,
    ) {
        if is_reserved(type_name) {
            collector.add_error(SchemaValidationError::new(
                SchemaValidationErrorKind::InvalidCustomizedName,
                type_name,
                format!(
                    "\"{type_name}\" must not begin with \"__\", which is \
                    reserved by GraphQL introspection.",
                ),
            ));
        }
    }

    fn check_member_name(
        &self,
        type_name: &str,
        member_name: &str,
        collector: &mut SchemaValidationErrorCollector,
    ) {
        if is_reserved(member_name) {
            collector.add_error(SchemaValidationError::new(
                SchemaValidationErrorKind::InvalidCustomizedName,
                format!("{type_name}.{member_name}"),
                format!(
                    "\"{member_name}\" in \"{type_name}\" must not begin \
                    with \"__\", which is reserved by GraphQL introspection.",
                ),
            ));
        }
    }

    fn check_fields(
        &self,
        type_name: &str,
        fields: &[FieldDef],
        collector: &mut SchemaValidationErrorCollector,
    ) {
        for field in fields {
            self.check_member_name(type_name, &field.name, collector);
            for argument in &field.arguments {
                if is_reserved(&argument.name) {
                    collector.add_error(SchemaValidationError::new(
                        SchemaValidationErrorKind::InvalidCustomizedName,
                        format!("{type_name}.{}.{}", field.name, argument.name),
                        format!(
                            "Argument name \"{}\" in \"{type_name}-{}\" must \
                            not begin with \"__\", which is reserved by \
                            GraphQL introspection.",
                            argument.name, field.name,
                        ),
                    ));
                }
            }
        }
    }
}

impl SchemaValidationRule for ReservedNameRule {
    fn check(
        &self,
        schema: &Schema,
        collector: &mut SchemaValidationErrorCollector,
    ) {
        for (type_name, schema_type) in schema.type_map() {
            if is_system_element(type_name) {
                continue;
            }
            self.check_type_name(type_name, collector);
            match schema_type {
                SchemaType::Object(object_type) =>
                    self.check_fields(type_name, &object_type.fields, collector),
                SchemaType::Interface(interface_type) => self.check_fields(
                    type_name,
                    &interface_type.fields,
                    collector,
                ),
                SchemaType::InputObject(input_object_type) => {
                    for input_field in &input_object_type.input_fields {
                        self.check_member_name(
                            type_name,
                            &input_field.name,
                            collector,
                        );
                    }
                },
                SchemaType::Enum(enum_type) => {
                    for value in &enum_type.values {
                        if is_reserved(&value.name) {
                            collector.add_error(SchemaValidationError::new(
                                SchemaValidationErrorKind::InvalidCustomizedName,
                                format!("{type_name}.{}", value.name),
                                format!(
                                    "EnumValueDefinition \"{}\" in \
                                    \"{type_name}\" must not begin with \
                                    \"__\", which is reserved by GraphQL \
                                    introspection.",
                                    value.name,
                                ),
                            ));
                        }
                    }
                },
                SchemaType::Union(_) | SchemaType::Scalar(_) => {},
            }
        }

        for directive_def in schema.directive_defs() {
            if is_reserved(&directive_def.name) {
                collector.add_error(SchemaValidationError::new(
                    SchemaValidationErrorKind::InvalidCustomizedName,
                    format!("@{}", directive_def.name),
                    format!(
                        "Directive \"{}\" must not begin with \"__\", which \
                        is reserved by GraphQL introspection.",
                        directive_def.name,
                    ),
                ));
            }
        }
    }
}
