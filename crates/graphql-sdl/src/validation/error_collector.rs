use crate::validation::SchemaValidationError;

/// Accumulates errors across the rules of one validation pass. Each pass
/// owns a fresh collector; collectors are never reused.
#[derive(Debug, Default)]
pub struct SchemaValidationErrorCollector {
    errors: Vec<SchemaValidationError>,
}
impl SchemaValidationErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: SchemaValidationError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[SchemaValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SchemaValidationError> {
        self.errors
    }
}
