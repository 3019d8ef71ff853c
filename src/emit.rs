//! Source emission: one submodule per output convention.
//!
//! Every emitter walks the registry in order (root first, then discovery
//! order) and renders each [`NamedType`](crate::registry::NamedType) through a
//! fixed per-convention type table. Output is a pure function of the registry
//! and the config.
mod codable;
mod dart;
mod handyjson;
mod objc;
mod objectmapper;
mod swift;
mod swift_types;
mod swiftyjson;

use crate::config::{Convention, GenerationConfig};
use crate::error::GenerateError;
use crate::naming::{IdentStyle, NamingOptions};
use crate::registry::TypeRegistry;

impl Convention {
    /// Render every declaration in `registry` in this convention.
    pub fn emit(self, registry: &TypeRegistry, config: &GenerationConfig) -> Result<String, GenerateError> {
        if config.convention != self {
            return Err(GenerateError::Configuration(format!(
                "{} emitter given a {} configuration",
                self.display_name(),
                config.convention.display_name(),
            )));
        }
        config.validate()?;
        if registry.is_empty() {
            return Err(GenerateError::NoModel);
        }

        let source = match self {
            Convention::Swift => swift::emit(registry, config.kind),
            Convention::HandyJson => handyjson::emit(registry, config.kind),
            Convention::SwiftyJson => swiftyjson::emit(registry, config.kind),
            Convention::ObjectMapper => objectmapper::emit(registry, config.kind),
            Convention::ObjC => objc::emit(registry),
            Convention::Dart => dart::emit(registry),
            Convention::Codable => codable::emit(registry),
        };
        tracing::debug!(convention = self.display_name(), bytes = source.len(), "emitted source");
        Ok(source)
    }

    /// Identifier and type-name rules the registry should apply for this convention.
    pub fn naming_options(self, config: &GenerationConfig) -> NamingOptions {
        let (style, reserved_words, reserved_type_names) = match self {
            Convention::Swift | Convention::HandyJson => {
                (IdentStyle::LowerFirst, swift_types::KEYWORDS, swift_types::TYPE_NAMES)
            }
            Convention::SwiftyJson => {
                (IdentStyle::LowerFirst, swiftyjson::RESERVED, swift_types::TYPE_NAMES)
            }
            Convention::ObjectMapper => {
                (IdentStyle::Camel, objectmapper::RESERVED, swift_types::TYPE_NAMES)
            }
            Convention::Codable => (IdentStyle::Camel, swift_types::KEYWORDS, swift_types::TYPE_NAMES),
            Convention::ObjC => (IdentStyle::LowerFirst, objc::RESERVED, objc::TYPE_NAMES),
            Convention::Dart => (IdentStyle::Camel, dart::RESERVED, dart::TYPE_NAMES),
        };
        let reserved_leading_words = match self {
            Convention::ObjC => objc::METHOD_FAMILIES,
            _ => &[],
        };
        NamingOptions {
            prefix: config.type_prefix().to_string(),
            style,
            reserved_words,
            reserved_type_names,
            reserved_leading_words,
            collisions: config.collisions,
        }
    }
}

/// Header, blank line, then declarations separated by blank lines.
fn assemble(header: &str, declarations: impl IntoIterator<Item = String>) -> String {
    let mut out = String::new();
    out.push_str(header);
    for decl in declarations {
        out.push('\n');
        out.push_str(&decl);
    }
    out
}
