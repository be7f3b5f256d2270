//! Language selection and string lookup.
//!
//! Locale tables are embedded JSON documents keyed by dotted paths
//! (`"form.errors.required"`). Unresolved keys translate to themselves.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};

const EN_LOCALE: &str = include_str!("../locale/en.json");
const AR_LOCALE: &str = include_str!("../locale/ar.json");

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Native name of the language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ar => "العربية",
            Language::En => "English",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// Translates dotted keys for the current language.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    en: Value,
    ar: Value,
}

impl Translator {
    /// Load the embedded locale tables.
    ///
    /// A table that fails to parse is replaced by an empty one, so every
    /// key in that language falls back to itself.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            en: parse_locale(Language::En, EN_LOCALE),
            ar: parse_locale(Language::Ar, AR_LOCALE),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn translate(&self, key: &str) -> String {
        self.translate_in(self.language, key)
    }

    pub fn translate_in(&self, language: Language, key: &str) -> String {
        let table = match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        };
        key.split('.')
            .try_fold(table, |node, segment| node.get(segment))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| key.to_owned())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn parse_locale(language: Language, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(language = language.code(), error = %e, "Failed to parse locale table");
        Value::Object(Default::default())
    })
}

#[derive(Debug, Serialize, Deserialize)]
struct PreferenceRecord {
    selected_language: String,
}

/// Single-entry persisted store for the selected language.
#[derive(Debug, Clone)]
pub struct LanguagePreference {
    path: PathBuf,
}

impl LanguagePreference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved language.
    ///
    /// Returns `Ok(None)` when nothing is saved or the saved code is not a
    /// supported language.
    pub fn load(&self) -> CatalogResult<Option<Language>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CatalogError::Preferences(e.to_string())),
        };
        let record: PreferenceRecord =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Preferences(e.to_string()))?;

        let language = Language::from_code(&record.selected_language);
        if language.is_none() {
            debug!(code = %record.selected_language, "Ignoring unsupported saved language");
        }
        Ok(language)
    }

    pub fn save(&self, language: Language) -> CatalogResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CatalogError::Preferences(e.to_string()))?;
            }
        }
        let record = PreferenceRecord {
            selected_language: language.code().to_owned(),
        };
        let body = serde_json::to_string_pretty(&record)
            .map_err(|e| CatalogError::Preferences(e.to_string()))?;
        fs::write(&self.path, body).map_err(|e| CatalogError::Preferences(e.to_string()))
    }
}
