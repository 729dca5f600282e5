use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::validation::schema_validator::is_system_element;
use crate::validation::SchemaValidationError;
use crate::validation::SchemaValidationErrorCollector;
use crate::validation::SchemaValidationErrorKind;
use crate::validation::SchemaValidationRule;
use indexmap::IndexSet;

/// Union members must be Object types, each named once. Duplicates are
/// reported once per repeated occurrence, checked against the members seen
/// so far.
pub struct UnionMembersRule;

impl SchemaValidationRule for UnionMembersRule {
    fn check(
        &self,
        schema: &Schema,
        collector: &mut SchemaValidationErrorCollector,
    ) {
        for (type_name, schema_type) in schema.type_map() {
            if is_system_element(type_name) {
                continue;
            }
            let Some(union_type) = schema_type.as_union() else {
                continue;
            };

            let mut seen: IndexSet<&str> = IndexSet::new();
            for member in &union_type.members {
                let is_object = matches!(
                    schema.get_type(member),
                    Some(SchemaType::Object(_)),
                );
                if !is_object {
                    collector.add_error(SchemaValidationError::new(
                        SchemaValidationErrorKind::InvalidUnionMemberType,
                        format!("{type_name}.{member}"),
                        format!(
                            "The member types of a Union type must all be \
                            Object base types. member type \"{member}\" in \
                            Union \"{type_name}\" is invalid.",
                        ),
                    ));
                }
                if !seen.insert(member.as_str()) {
                    collector.add_error(SchemaValidationError::new(
                        SchemaValidationErrorKind::RepetitiveElement,
                        format!("{type_name}.{member}"),
                        format!(
                            "The member types of a Union type must be \
                            unique. member type \"{member}\" in Union \
                            \"{type_name}\" is not unique.",
                        ),
                    ));
                }
            }
        }
    }
}
