use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::schema::TypeRef;
use crate::validation::schema_validator::is_system_element;
use crate::validation::SchemaValidationError;
use crate::validation::SchemaValidationErrorCollector;
use crate::validation::SchemaValidationErrorKind;
use crate::validation::SchemaValidationRule;

/// `!` must not stack: a NonNull wrapper directly inside another NonNull
/// wrapper is invalid anywhere in a field, argument, or input field type.
pub struct NonNullWrapRule;

impl NonNullWrapRule {
    fn check_type_ref(
        &self,
        element: String,
        type_ref: &TypeRef,
        collector: &mut SchemaValidationErrorCollector,
    ) {
        type_ref.walk(|node| {
            let TypeRef::NonNull(inner) = node else {
                return;
            };
            if matches!(inner.as_ref(), TypeRef::NonNull(_)) {
                collector.add_error(SchemaValidationError::new(
                    SchemaValidationErrorKind::NonNullWrapNonNull,
                    element.clone(),
                    format!(
                        "Non-Null type must not wrap another Non-Null type: \
                        \"{}\" is invalid.",
                        node.simple_print(),
                    ),
                ));
            }
        });
    }
}

impl SchemaValidationRule for NonNullWrapRule {
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
                SchemaType::Object(object_type) => {
                    for field in &object_type.fields {
                        self.check_type_ref(
                            format!("{type_name}.{}", field.name),
                            &field.type_ref,
                            collector,
                        );
                        for argument in &field.arguments {
                            self.check_type_ref(
                                format!(
                                    "{type_name}.{}.{}",
                                    field.name, argument.name,
                                ),
                                &argument.type_ref,
                                collector,
                            );
                        }
                    }
                },
                SchemaType::Interface(interface_type) => {
                    for field in &interface_type.fields {
                        self.check_type_ref(
                            format!("{type_name}.{}", field.name),
                            &field.type_ref,
                            collector,
                        );
                        for argument in &field.arguments {
                            self.check_type_ref(
                                format!(
                                    "{type_name}.{}.{}",
                                    field.name, argument.name,
                                ),
                                &argument.type_ref,
                                collector,
                            );
                        }
                    }
                },
                SchemaType::InputObject(input_object_type) => {
                    for input_field in &input_object_type.input_fields {
                        self.check_type_ref(
                            format!("{type_name}.{}", input_field.name),
                            &input_field.type_ref,
                            collector,
                        );
                    }
                },
                SchemaType::Enum(_)
                | SchemaType::Scalar(_)
                | SchemaType::Union(_) => {},
            }
        }
    }
}
