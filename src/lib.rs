//! Infer model declarations from a JSON document and emit them as source code
//! in one of several Swift, Objective-C and Dart conventions.
//!
//! ```text
//! text ─parse→ JsonValue ─infer→ TypeNode ─register→ TypeRegistry ─emit→ String
//! ```
pub mod config;
pub mod emit;
pub mod error;
pub mod inference;
pub mod ir;
pub mod naming;
pub mod path_de;
pub mod registry;
pub mod store;
pub mod value;

pub use config::{ConfigRecord, Convention, DeclarationKind, GenerationConfig, Selection, SelectionState};
pub use error::{ConfigStoreError, GenerateError};
pub use naming::NameCollision;
pub use value::JsonValue;

/// Generate declarations for one JSON document.
///
/// `root_name` names the top-level type (before any class prefix). Nothing is
/// returned on failure; there is no partial output.
pub fn generate(source: &str, root_name: &str, config: &GenerationConfig) -> Result<String, GenerateError> {
    let value = value::parse(source)?;
    generate_from_value(&value, root_name, config)
}

/// Like [`generate`], for an already parsed document.
pub fn generate_from_value(
    value: &JsonValue,
    root_name: &str,
    config: &GenerationConfig,
) -> Result<String, GenerateError> {
    config.validate()?;

    let tree = inference::infer(value);
    let opts = config.convention.naming_options(config);
    let (root, registry) = registry::register(&tree, root_name, &opts);
    if root.is_none() {
        return Err(GenerateError::NoModel);
    }
    tracing::debug!(root = root_name, types = registry.len(), "generating declarations");

    config.convention.emit(&registry, config)
}
