use crate::schema::SchemaDirectiveDef;
use crate::schema::SchemaType;
use indexmap::IndexMap;

/// A fully realized, immutable schema graph.
///
/// All cross-type references go through the name-keyed type map, so cyclic
/// schemas (e.g. `type Node { parent: Node }`) need no reference cycles in
/// memory. Every accessor takes `&self` and the value never changes after
/// construction, so one [`Schema`] can be read from many threads at once.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, SchemaDirectiveDef>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, SchemaType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_type(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    /// Every realized type, keyed by name, in realization order.
    pub fn type_map(&self) -> &IndexMap<String, SchemaType> {
        &self.types
    }

    pub fn query_type_name(&self) -> &str {
        &self.query_type
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// The realized query root type.
    pub fn query_root(&self) -> Option<&SchemaType> {
        self.get_type(&self.query_type)
    }

    pub fn directive_def(&self, name: &str) -> Option<&SchemaDirectiveDef> {
        self.directive_defs.get(name)
    }

    pub fn directive_defs(&self) -> impl Iterator<Item = &SchemaDirectiveDef> {
        self.directive_defs.values()
    }
}

/// Programmatic [`Schema`] construction, for callers assembling a schema
/// without SDL (and for exercising the validator against schemas the
/// SDL pipeline refuses to produce). Performs no validation of its own.
#[derive(Clone, Debug, Default)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, SchemaDirectiveDef>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: IndexMap<String, SchemaType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_type(mut self, name: impl Into<String>) -> Self {
        self.query_type = Some(name.into());
        self
    }

    pub fn mutation_type(mut self, name: impl Into<String>) -> Self {
        self.mutation_type = Some(name.into());
        self
    }

    pub fn subscription_type(mut self, name: impl Into<String>) -> Self {
        self.subscription_type = Some(name.into());
        self
    }

    /// Register a realized type. A type with the same name replaces the
    /// earlier registration.
    pub fn add_type(mut self, schema_type: SchemaType) -> Self {
        self.types
            .insert(schema_type.name().to_string(), schema_type);
        self
    }

    pub fn add_directive_def(mut self, directive_def: SchemaDirectiveDef) -> Self {
        self.directive_defs
            .insert(directive_def.name.clone(), directive_def);
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            directive_defs: self.directive_defs,
            mutation_type: self.mutation_type,
            query_type: self.query_type.unwrap_or_else(|| "Query".to_string()),
            subscription_type: self.subscription_type,
            types: self.types,
        }
    }
}
