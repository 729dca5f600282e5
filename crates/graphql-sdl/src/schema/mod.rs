//! The realized schema graph: the immutable product of
//! [`crate::SchemaGenerator`].

mod directive_def;
mod enum_type;
mod field;
mod input_object_type;
mod interface_type;
pub mod introspection;
mod object_type;
pub mod scalar_info;
mod scalar_type;
mod schema;
mod schema_type;
mod type_ref;
mod union_type;

pub use directive_def::SchemaDirectiveDef;
pub use enum_type::EnumType;
pub use field::ArgumentDef;
pub use field::EnumValueDef;
pub use field::FieldDef;
pub use field::InputFieldDef;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema_type::SchemaType;
pub use schema_type::SchemaTypeKind;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
