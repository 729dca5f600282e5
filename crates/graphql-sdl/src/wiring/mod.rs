//! Runtime behavior attachment: fetchers, coercings, type resolvers, and
//! the generator that welds them onto a parsed registry.

mod coercing;
mod data_fetcher;
mod runtime_wiring;
mod schema_directive_wiring;
mod schema_generator;
mod schema_problem;
mod type_resolver;
mod wiring_factory;

pub use coercing::Coercing;
pub use coercing::CoercingError;
pub use coercing::IdentityCoercing;
pub use coercing::SpecifiedScalarCoercing;
pub use data_fetcher::DataFetcher;
pub use data_fetcher::DataFetcherFactory;
pub use data_fetcher::DataFetchingEnvironment;
pub use data_fetcher::PropertyDataFetcher;
pub use runtime_wiring::RuntimeWiring;
pub use runtime_wiring::RuntimeWiringBuilder;
pub use schema_directive_wiring::SchemaDirectiveWiring;
pub use schema_directive_wiring::SchemaDirectiveWiringEnvironment;
pub use schema_generator::SchemaGenerator;
pub use schema_problem::SchemaProblem;
pub use schema_problem::WiringError;
pub use type_resolver::TypeResolver;
pub use wiring_factory::FieldWiringEnvironment;
pub use wiring_factory::InterfaceWiringEnvironment;
pub use wiring_factory::NoopWiringFactory;
pub use wiring_factory::ScalarWiringEnvironment;
pub use wiring_factory::UnionWiringEnvironment;
pub use wiring_factory::WiringFactory;

#[cfg(test)]
mod tests;
