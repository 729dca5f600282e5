use crate::ast;
use crate::wiring::Coercing;
use crate::wiring::DataFetcher;
use crate::wiring::DataFetcherFactory;
use crate::wiring::SchemaDirectiveWiring;
use crate::wiring::SchemaDirectiveWiringEnvironment;
use crate::wiring::TypeResolver;
use std::sync::Arc;

pub struct ScalarWiringEnvironment<'a> {
    pub scalar_def: &'a ast::ScalarTypeDefinition,
}

pub struct InterfaceWiringEnvironment<'a> {
    pub interface_def: &'a ast::InterfaceTypeDefinition,
}

pub struct UnionWiringEnvironment<'a> {
    pub union_def: &'a ast::UnionTypeDefinition,
}

pub struct FieldWiringEnvironment<'a> {
    pub field_def: &'a ast::FieldDefinition,
    pub parent_type_name: &'a str,
}

/// The capability object consulted at every wiring point during schema
/// generation.
///
/// Each wiring point is a `provides_*` / `get_*` pair: generation calls
/// `provides_*` first and calls `get_*` only on a `true` answer. Calling a
/// `get_*` whose `provides_*` did not return `true` is a programmer error,
/// and the default implementations panic accordingly.
pub trait WiringFactory: Send + Sync {
    fn provides_scalar(&self, _env: &ScalarWiringEnvironment<'_>) -> bool {
        false
    }

    fn get_scalar(&self, env: &ScalarWiringEnvironment<'_>) -> Arc<dyn Coercing> {
        panic!(
            "get_scalar called for `{}` without provides_scalar returning true",
            env.scalar_def.name,
        );
    }

    fn provides_interface_type_resolver(
        &self,
        _env: &InterfaceWiringEnvironment<'_>,
    ) -> bool {
        false
    }

    fn get_interface_type_resolver(
        &self,
        env: &InterfaceWiringEnvironment<'_>,
    ) -> Arc<dyn TypeResolver> {
        panic!(
            "get_interface_type_resolver called for `{}` without \
            provides_interface_type_resolver returning true",
            env.interface_def.name,
        );
    }

    fn provides_union_type_resolver(
        &self,
        _env: &UnionWiringEnvironment<'_>,
    ) -> bool {
        false
    }

    fn get_union_type_resolver(
        &self,
        env: &UnionWiringEnvironment<'_>,
    ) -> Arc<dyn TypeResolver> {
        panic!(
            "get_union_type_resolver called for `{}` without \
            provides_union_type_resolver returning true",
            env.union_def.name,
        );
    }

    fn provides_data_fetcher_factory(
        &self,
        _env: &FieldWiringEnvironment<'_>,
    ) -> bool {
        false
    }

    fn get_data_fetcher_factory(
        &self,
        env: &FieldWiringEnvironment<'_>,
    ) -> Arc<dyn DataFetcherFactory> {
        panic!(
            "get_data_fetcher_factory called for `{}.{}` without \
            provides_data_fetcher_factory returning true",
            env.parent_type_name, env.field_def.name,
        );
    }

    fn provides_data_fetcher(&self, _env: &FieldWiringEnvironment<'_>) -> bool {
        false
    }

    fn get_data_fetcher(
        &self,
        env: &FieldWiringEnvironment<'_>,
    ) -> Arc<dyn DataFetcher> {
        panic!(
            "get_data_fetcher called for `{}.{}` without \
            provides_data_fetcher returning true",
            env.parent_type_name, env.field_def.name,
        );
    }

    fn provides_schema_directive_wiring(
        &self,
        _env: &SchemaDirectiveWiringEnvironment<'_>,
    ) -> bool {
        false
    }

    fn get_schema_directive_wiring(
        &self,
        env: &SchemaDirectiveWiringEnvironment<'_>,
    ) -> Arc<dyn SchemaDirectiveWiring> {
        panic!(
            "get_schema_directive_wiring called for `@{}` on `{}` without \
            provides_schema_directive_wiring returning true",
            env.directive.name,
            env.element.name(),
        );
    }
}

/// A factory that provides nothing, leaving every wiring point to the
/// [`crate::RuntimeWiring`] registrations and their fallbacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopWiringFactory;
impl WiringFactory for NoopWiringFactory {}
