mod behavior_tests;
mod generator_tests;

use crate::ast::parse_sdl_document;
use crate::registry::TypeDefinitionRegistry;

pub(crate) fn registry_from(documents: &[&str]) -> TypeDefinitionRegistry {
    let mut registry = TypeDefinitionRegistry::new();
    for content in documents {
        let doc = parse_sdl_document(None, content).unwrap();
        let errors = registry.merge(doc);
        assert!(errors.is_empty(), "unexpected merge errors: {errors:?}");
    }
    registry
}
