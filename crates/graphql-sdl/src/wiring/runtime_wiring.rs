use crate::wiring::Coercing;
use crate::wiring::DataFetcher;
use crate::wiring::NoopWiringFactory;
use crate::wiring::SchemaDirectiveWiring;
use crate::wiring::TypeResolver;
use crate::wiring::WiringFactory;
use indexmap::IndexMap;
use std::sync::Arc;

/// The frozen set of runtime behaviors consumed by
/// [`crate::SchemaGenerator`]. Built once through [`RuntimeWiringBuilder`]
/// and immutable afterwards.
#[derive(Clone)]
pub struct RuntimeWiring {
    pub(crate) data_fetchers: IndexMap<String, IndexMap<String, Arc<dyn DataFetcher>>>,
    pub(crate) default_data_fetchers: IndexMap<String, Arc<dyn DataFetcher>>,
    pub(crate) directive_wirings: IndexMap<String, Arc<dyn SchemaDirectiveWiring>>,
    pub(crate) global_default_data_fetcher: Option<Arc<dyn DataFetcher>>,
    pub(crate) scalars: IndexMap<String, Arc<dyn Coercing>>,
    pub(crate) type_resolvers: IndexMap<String, Arc<dyn TypeResolver>>,
    pub(crate) wiring_factory: Arc<dyn WiringFactory>,
}
impl RuntimeWiring {
    pub fn builder() -> RuntimeWiringBuilder {
        RuntimeWiringBuilder::default()
    }

    pub fn data_fetcher(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&Arc<dyn DataFetcher>> {
        self.data_fetchers.get(type_name)?.get(field_name)
    }

    pub fn type_resolver(&self, type_name: &str) -> Option<&Arc<dyn TypeResolver>> {
        self.type_resolvers.get(type_name)
    }

    pub fn scalar(&self, name: &str) -> Option<&Arc<dyn Coercing>> {
        self.scalars.get(name)
    }
}
impl Default for RuntimeWiring {
    fn default() -> Self {
        Self::builder().build()
    }
}
impl std::fmt::Debug for RuntimeWiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeWiring")
            .field(
                "data_fetchers",
                &self.data_fetchers.keys().collect::<Vec<_>>(),
            )
            .field(
                "scalars",
                &self.scalars.keys().collect::<Vec<_>>(),
            )
            .field(
                "type_resolvers",
                &self.type_resolvers.keys().collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// Accumulates wiring registrations, then freezes them into a
/// [`RuntimeWiring`] with [`build`](Self::build).
pub struct RuntimeWiringBuilder {
    data_fetchers: IndexMap<String, IndexMap<String, Arc<dyn DataFetcher>>>,
    default_data_fetchers: IndexMap<String, Arc<dyn DataFetcher>>,
    directive_wirings: IndexMap<String, Arc<dyn SchemaDirectiveWiring>>,
    global_default_data_fetcher: Option<Arc<dyn DataFetcher>>,
    scalars: IndexMap<String, Arc<dyn Coercing>>,
    type_resolvers: IndexMap<String, Arc<dyn TypeResolver>>,
    wiring_factory: Arc<dyn WiringFactory>,
}
impl Default for RuntimeWiringBuilder {
    fn default() -> Self {
        Self {
            data_fetchers: IndexMap::new(),
            default_data_fetchers: IndexMap::new(),
            directive_wirings: IndexMap::new(),
            global_default_data_fetcher: None,
            scalars: IndexMap::new(),
            type_resolvers: IndexMap::new(),
            wiring_factory: Arc::new(NoopWiringFactory),
        }
    }
}
impl RuntimeWiringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wiring_factory(mut self, factory: Arc<dyn WiringFactory>) -> Self {
        self.wiring_factory = factory;
        self
    }

    /// Register a fetcher for one field of one type.
    pub fn data_fetcher(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        fetcher: Arc<dyn DataFetcher>,
    ) -> Self {
        self.data_fetchers
            .entry(type_name.into())
            .or_default()
            .insert(field_name.into(), fetcher);
        self
    }

    /// Register the fallback fetcher for every field of one type.
    pub fn default_data_fetcher(
        mut self,
        type_name: impl Into<String>,
        fetcher: Arc<dyn DataFetcher>,
    ) -> Self {
        self.default_data_fetchers.insert(type_name.into(), fetcher);
        self
    }

    /// Register the fallback fetcher for fields of every type.
    pub fn global_default_data_fetcher(
        mut self,
        fetcher: Arc<dyn DataFetcher>,
    ) -> Self {
        self.global_default_data_fetcher = Some(fetcher);
        self
    }

    pub fn scalar(
        mut self,
        name: impl Into<String>,
        coercing: Arc<dyn Coercing>,
    ) -> Self {
        self.scalars.insert(name.into(), coercing);
        self
    }

    pub fn type_resolver(
        mut self,
        type_name: impl Into<String>,
        resolver: Arc<dyn TypeResolver>,
    ) -> Self {
        self.type_resolvers.insert(type_name.into(), resolver);
        self
    }

    pub fn directive_wiring(
        mut self,
        directive_name: impl Into<String>,
        wiring: Arc<dyn SchemaDirectiveWiring>,
    ) -> Self {
        self.directive_wirings.insert(directive_name.into(), wiring);
        self
    }

    pub fn build(self) -> RuntimeWiring {
        RuntimeWiring {
            data_fetchers: self.data_fetchers,
            default_data_fetchers: self.default_data_fetchers,
            directive_wirings: self.directive_wirings,
            global_default_data_fetcher: self.global_default_data_fetcher,
            scalars: self.scalars,
            type_resolvers: self.type_resolvers,
            wiring_factory: self.wiring_factory,
        }
    }
}
