use crate::ast::Definition;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use crate::ast::TypeDefinitionKind;
use crate::ast::TypeExtension;
use crate::registry::MergeError;
use indexmap::IndexMap;

/// Directives every schema gets implicitly. User documents may apply them
/// but must not redefine them.
const BUILTIN_DIRECTIVES: [&str; 4] =
    ["deprecated", "include", "skip", "specifiedBy"];

fn is_reserved_name(name: &str) -> bool {
    name.starts_with("__")
}

/// An accumulating, order-preserving collection of SDL definitions.
///
/// Documents are folded in with [`merge`](Self::merge); the registry is the
/// input [`crate::SchemaGenerator`] consumes. Base definitions are keyed by
/// name with first-wins conflict handling. Type extensions accumulate per
/// target name and are NOT folded into their base here: an extension's base
/// may legitimately arrive in a later document, so target checking is
/// deferred to [`check_extension_targets`](Self::check_extension_targets).
#[derive(Clone, Debug, Default)]
pub struct TypeDefinitionRegistry {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    schema_definition: Option<SchemaDefinition>,
    type_extensions: IndexMap<String, Vec<TypeExtension>>,
    types: IndexMap<String, TypeDefinition>,
}

impl TypeDefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a parsed document into the registry. Best-effort: definitions
    /// that conflict with already-merged ones are dropped and reported, and
    /// everything else in the document still lands.
    pub fn merge(&mut self, document: Document) -> Vec<MergeError> {
        let mut errors = vec![];
        for definition in document.definitions {
            match definition {
                Definition::Type(type_def) =>
                    self.merge_type(type_def, &mut errors),
                Definition::Directive(directive_def) =>
                    self.merge_directive(directive_def, &mut errors),
                Definition::Schema(schema_def) =>
                    self.merge_schema_definition(schema_def, &mut errors),
                Definition::TypeExtension(type_ext) => {
                    self.type_extensions
                        .entry(type_ext.target_name().to_string())
                        .or_default()
                        .push(type_ext);
                },
            }
        }
        log::debug!(
            "merged document: {} types, {} directive defs, {} errors",
            self.types.len(),
            self.directive_defs.len(),
            errors.len(),
        );
        errors
    }

    fn merge_type(
        &mut self,
        type_def: TypeDefinition,
        errors: &mut Vec<MergeError>,
    ) {
        if is_reserved_name(type_def.name()) {
            errors.push(MergeError::ReservedTypeName {
                name: type_def.name().to_string(),
                location: type_def.source_location().cloned(),
            });
            return;
        }
        if let Some(existing) = self.types.get(type_def.name()) {
            errors.push(MergeError::DuplicateTypeDefinition {
                name: type_def.name().to_string(),
                location: type_def.source_location().cloned(),
                previous_location: existing.source_location().cloned(),
            });
            return;
        }
        self.types.insert(type_def.name().to_string(), type_def);
    }

    fn merge_directive(
        &mut self,
        directive_def: DirectiveDefinition,
        errors: &mut Vec<MergeError>,
    ) {
        if BUILTIN_DIRECTIVES.contains(&directive_def.name.as_str()) {
            errors.push(MergeError::RedefinedBuiltinDirective {
                name: directive_def.name,
                location: directive_def.info.source_location,
            });
            return;
        }
        if let Some(existing) = self.directive_defs.get(&directive_def.name) {
            errors.push(MergeError::DuplicateDirectiveDefinition {
                name: directive_def.name.clone(),
                location: directive_def.info.source_location.clone(),
                previous_location: existing.info.source_location.clone(),
            });
            return;
        }
        self.directive_defs
            .insert(directive_def.name.clone(), directive_def);
    }

    fn merge_schema_definition(
        &mut self,
        schema_def: SchemaDefinition,
        errors: &mut Vec<MergeError>,
    ) {
        match &self.schema_definition {
            Some(existing) => errors.push(MergeError::DuplicateSchemaDefinition {
                location: schema_def.info.source_location,
                previous_location: existing.info.source_location.clone(),
            }),
            None => self.schema_definition = Some(schema_def),
        }
    }

    /// The base definition registered under `name`, if any. Extensions of
    /// `name` are not reflected here.
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All base definitions of one kind, in merge order.
    pub fn get_types(&self, kind: TypeDefinitionKind) -> Vec<&TypeDefinition> {
        self.types
            .values()
            .filter(|type_def| type_def.kind() == kind)
            .collect()
    }

    /// All base definitions in merge order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn directive_def(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    pub fn directive_defs(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.directive_defs.values()
    }

    /// Extensions targeting `name`, in arrival order. Includes extensions
    /// whose target is undefined or of the wrong kind; see
    /// [`check_extension_targets`](Self::check_extension_targets).
    pub fn extensions_of(&self, name: &str) -> &[TypeExtension] {
        self.type_extensions
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn schema_definition(&self) -> Option<&SchemaDefinition> {
        self.schema_definition.as_ref()
    }

    /// Check every accumulated extension against its base definition. Run
    /// after all documents are merged; an extension may target a base from
    /// any document regardless of merge order.
    pub fn check_extension_targets(&self) -> Vec<MergeError> {
        let mut errors = vec![];
        for (target_name, extensions) in &self.type_extensions {
            for extension in extensions {
                match self.types.get(target_name) {
                    None => errors.push(MergeError::ExtensionOfUndefinedType {
                        name: target_name.clone(),
                        location: extension.source_location().cloned(),
                    }),
                    Some(base) if base.kind() != extension.kind() =>
                        errors.push(MergeError::InvalidExtensionKind {
                            name: target_name.clone(),
                            extension_kind: extension.kind(),
                            base_kind: base.kind(),
                            location: extension.source_location().cloned(),
                        }),
                    Some(_) => {},
                }
            }
        }
        errors
    }
}
