//! Bilingual display names.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// An English/Arabic name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub en: String,
    pub ar: String,
}

impl LocalizedName {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// The name to show for `language`.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Case-insensitive substring match against either language.
    ///
    /// `needle` must already be lower-cased.
    pub fn contains(&self, needle: &str) -> bool {
        self.en.to_lowercase().contains(needle) || self.ar.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_name_by_language() {
        let name = LocalizedName::new("Food Health Group", "مجموعة الصحة الغذائية");
        assert_eq!(name.get(Language::En), "Food Health Group");
        assert_eq!(name.get(Language::Ar), "مجموعة الصحة الغذائية");
    }

    #[test]
    fn contains_matches_either_language() {
        let name = LocalizedName::new("Environment Group", "مجموعة البيئة");
        assert!(name.contains("environment"));
        assert!(name.contains("البيئة"));
        assert!(!name.contains("kitchen"));
    }
}
