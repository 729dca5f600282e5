use crate::ast::Value;
use crate::wiring::FieldWiringEnvironment;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The context handed to a [`DataFetcher`] when a field is read: the value
/// the enclosing type resolved to, and the field's arguments.
#[derive(Clone, Debug, Default)]
pub struct DataFetchingEnvironment {
    pub arguments: BTreeMap<String, Value>,
    pub field_name: String,
    pub source: Option<Value>,
}

/// Behavior attached to every realized field: given a source value, produce
/// the field's value. This crate attaches fetchers but never invokes them;
/// execution is the caller's concern.
pub trait DataFetcher: Send + Sync {
    fn get(&self, environment: &DataFetchingEnvironment) -> Option<Value>;
}

/// The fallback fetcher of last resort: read the property named after the
/// field off an object-shaped source value.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyDataFetcher;
impl DataFetcher for PropertyDataFetcher {
    fn get(&self, environment: &DataFetchingEnvironment) -> Option<Value> {
        match environment.source.as_ref()? {
            Value::Object(object) => object
                .fields
                .iter()
                .find(|field| field.name == environment.field_name)
                .map(|field| field.value.clone()),
            _ => None,
        }
    }
}

/// Mints a [`DataFetcher`] per field, letting one factory serve many fields
/// with field-specific behavior.
pub trait DataFetcherFactory: Send + Sync {
    fn create(
        &self,
        environment: &FieldWiringEnvironment<'_>,
    ) -> Arc<dyn DataFetcher>;
}
