pub mod ast;
pub mod loc;
pub mod registry;
pub mod schema;
pub mod validation;
pub mod wiring;

pub use registry::TypeDefinitionRegistry;
pub use schema::Schema;
pub use validation::SchemaValidator;
pub use wiring::RuntimeWiring;
pub use wiring::SchemaGenerator;
