//! Typed AST for SDL documents.
//!
//! Every construct is a plain owned struct or closed enum. All node
//! structs carry a [`NodeInfo`]; equality between nodes ignores source
//! locations, comments, and additional data (see [`NodeInfo`]'s
//! `PartialEq`), so two nodes parsed from different files compare equal
//! when they describe the same construct.
//!
//! [`parse::parse_sdl_document`] bridges the external parser's AST into
//! this one.

mod directive;
mod directive_definition;
mod document;
mod enum_type_definition;
mod enum_value_definition;
mod field_definition;
mod input_object_type_definition;
mod input_value_definition;
mod interface_type_definition;
mod node;
mod object_type_definition;
pub mod parse;
mod scalar_type_definition;
mod schema_definition;
mod type_definition;
mod type_extension;
mod type_reference;
mod union_type_definition;
pub mod value;

pub use directive::Argument;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use document::Definition;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use node::Comment;
pub use node::Node;
pub use node::NodeChild;
pub use node::NodeChildrenContainer;
pub use node::NodeError;
pub use node::NodeInfo;
pub use node::child_slot;
pub use object_type_definition::ObjectTypeDefinition;
pub use parse::SdlParseError;
pub use parse::parse_sdl_document;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use type_definition::TypeDefinition;
pub use type_definition::TypeDefinitionKind;
pub use type_extension::TypeExtension;
pub use type_reference::ListType;
pub use type_reference::NamedType;
pub use type_reference::NonNullType;
pub use type_reference::TypeReference;
pub use union_type_definition::UnionTypeDefinition;
pub use value::ObjectField;
pub use value::Value;

#[cfg(test)]
mod tests;
