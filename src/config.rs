//! Generation configuration: which convention, struct or class, and the
//! forcing rules that tie the two together.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::naming::NameCollision;

/// Output convention. The discriminant is the persisted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Convention {
    /// Plain Swift declarations with a dictionary initializer.
    #[default]
    Swift = 0,
    /// HandyJSON reflection mapping.
    #[value(name = "handyjson")]
    HandyJson = 1,
    /// SwiftyJSON subscript accessors.
    #[value(name = "swiftyjson")]
    SwiftyJson = 2,
    /// ObjectMapper `Mappable` declarations.
    #[value(name = "objectmapper")]
    ObjectMapper = 3,
    /// Objective-C header.
    #[value(name = "objc")]
    ObjC = 4,
    /// Dart classes for Flutter.
    Dart = 5,
    /// Swift `Codable` structs.
    Codable = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum DeclarationKind {
    #[default]
    Struct = 0,
    Class = 1,
}

impl Convention {
    pub const ALL: [Convention; 7] = [
        Convention::Swift,
        Convention::HandyJson,
        Convention::SwiftyJson,
        Convention::ObjectMapper,
        Convention::ObjC,
        Convention::Dart,
        Convention::Codable,
    ];

    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    /// Declaration kind this convention always uses, if any.
    pub fn forced_kind(self) -> Option<DeclarationKind> {
        match self {
            Convention::ObjC | Convention::Dart => Some(DeclarationKind::Class),
            Convention::Codable => Some(DeclarationKind::Struct),
            Convention::Swift
            | Convention::HandyJson
            | Convention::SwiftyJson
            | Convention::ObjectMapper => None,
        }
    }

    /// File extension of generated sources.
    pub fn file_extension(self) -> &'static str {
        match self {
            Convention::ObjC => "h",
            Convention::Dart => "dart",
            Convention::Swift
            | Convention::HandyJson
            | Convention::SwiftyJson
            | Convention::ObjectMapper
            | Convention::Codable => "swift",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Convention::Swift => "Swift",
            Convention::HandyJson => "HandyJSON",
            Convention::SwiftyJson => "SwiftyJSON",
            Convention::ObjectMapper => "ObjectMapper",
            Convention::ObjC => "Objective-C",
            Convention::Dart => "Flutter",
            Convention::Codable => "Codable",
        }
    }
}

impl DeclarationKind {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(DeclarationKind::Struct),
            1 => Some(DeclarationKind::Class),
            _ => None,
        }
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    pub fn keyword(self) -> &'static str {
        match self {
            DeclarationKind::Struct => "struct",
            DeclarationKind::Class => "class",
        }
    }
}

/// Everything one generation run needs to know besides the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationConfig {
    pub convention: Convention,
    pub kind: DeclarationKind,
    /// Type-name prefix; only the Objective-C convention uses it.
    pub class_prefix: Option<String>,
    pub collisions: NameCollision,
}

impl GenerationConfig {
    /// Build a config with the convention's forced kind applied.
    pub fn new(convention: Convention, kind: DeclarationKind) -> Self {
        Self {
            convention,
            kind: convention.forced_kind().unwrap_or(kind),
            class_prefix: None,
            collisions: NameCollision::default(),
        }
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    pub fn with_collisions(mut self, collisions: NameCollision) -> Self {
        self.collisions = collisions;
        self
    }

    /// Reject a kind that contradicts the convention's forcing rule.
    pub fn validate(&self) -> Result<(), GenerateError> {
        match self.convention.forced_kind() {
            Some(forced) if forced != self.kind => Err(GenerateError::Configuration(format!(
                "{} output requires {} declarations, got {}",
                self.convention.display_name(),
                forced.keyword(),
                self.kind.keyword(),
            ))),
            _ => Ok(()),
        }
    }

    /// Prefix to prepend to generated type names.
    pub fn type_prefix(&self) -> &str {
        match self.convention {
            Convention::ObjC => self.class_prefix.as_deref().unwrap_or(""),
            _ => "",
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// SELECTION STATE MACHINE
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    NoSelection,
    LanguageSelected(Convention),
    LanguageAndStructSelected(Convention, DeclarationKind),
}

/// User-driven selection of convention and declaration kind.
///
/// The forcing rule re-applies on every change: under Objective-C or Dart the
/// kind is always `Class`, under Codable always `Struct`. Selecting a forcing
/// convention overwrites any earlier kind choice with the forced kind, so the
/// kind carried over to the next convention is the same whether or not the
/// selection went through a save and reload in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    convention: Option<Convention>,
    chosen_kind: Option<DeclarationKind>,
    class_prefix: Option<String>,
}

impl Selection {
    pub fn select_convention(&mut self, convention: Convention) {
        self.convention = Some(convention);
        if let Some(forced) = convention.forced_kind() {
            self.chosen_kind = Some(forced);
        }
    }

    pub fn select_kind(&mut self, kind: DeclarationKind) {
        match self.convention.and_then(Convention::forced_kind) {
            // snaps back to the forced kind
            Some(forced) if forced != kind => {
                tracing::debug!(?kind, ?forced, "declaration kind forced by convention");
            }
            _ => self.chosen_kind = Some(kind),
        }
    }

    pub fn set_class_prefix(&mut self, prefix: Option<String>) {
        self.class_prefix = prefix.filter(|p| !p.is_empty());
    }

    pub fn convention(&self) -> Option<Convention> {
        self.convention
    }

    pub fn kind(&self) -> Option<DeclarationKind> {
        self.chosen_kind
    }

    pub fn state(&self) -> SelectionState {
        match (self.convention, self.kind()) {
            (None, _) => SelectionState::NoSelection,
            (Some(c), None) => SelectionState::LanguageSelected(c),
            (Some(c), Some(k)) => SelectionState::LanguageAndStructSelected(c, k),
        }
    }

    /// Config for a generation run; unset choices take their defaults.
    pub fn to_config(&self) -> GenerationConfig {
        let mut config = GenerationConfig::new(
            self.convention.unwrap_or_default(),
            self.kind().unwrap_or_default(),
        );
        config.class_prefix = self.class_prefix.clone();
        config
    }

    pub fn to_record(&self) -> ConfigRecord {
        let config = self.to_config();
        ConfigRecord {
            output_convention: config.convention.index(),
            declaration_kind: config.kind.index(),
            class_prefix: config.class_prefix,
        }
    }

    /// Restore a persisted selection. Out-of-range values fall back to defaults.
    pub fn from_record(record: &ConfigRecord) -> Self {
        let convention = Convention::from_index(record.output_convention).unwrap_or_else(|| {
            tracing::warn!(
                value = record.output_convention,
                "persisted output convention out of range; using default"
            );
            Convention::default()
        });
        let kind = DeclarationKind::from_index(record.declaration_kind).unwrap_or_else(|| {
            tracing::warn!(
                value = record.declaration_kind,
                "persisted declaration kind out of range; using default"
            );
            DeclarationKind::default()
        });

        let mut selection = Selection::default();
        selection.select_convention(convention);
        selection.select_kind(kind);
        selection.set_class_prefix(record.class_prefix.clone());
        selection
    }
}

/// Persisted form of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    #[serde(default)]
    pub output_convention: i64,
    #[serde(default)]
    pub declaration_kind: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_prefix: Option<String>,
}
