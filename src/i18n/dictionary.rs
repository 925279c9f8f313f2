//! Translation dictionaries loaded from `{code}.json` files.
//!
//! The JSON content is opaque to the site: pages look up dotted keys such as
//! `navbar.subcategories.beamSaws` and supply an English fallback.

use crate::error::DictionaryError;
use crate::i18n::{Locale, LocaleConfig};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// A dictionary's root must be a JSON object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    root: Map<String, Value>,
}

impl Dictionary {
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a dotted key. Only string leaves resolve.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str()
    }

    /// Look up a dotted key, falling back when it is missing or empty.
    pub fn text<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => fallback,
        }
    }
}

/// One dictionary per supported locale.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    by_code: HashMap<&'static str, Dictionary>,
    default: &'static str,
}

impl Dictionaries {
    /// Read `{dir}/{code}.json` for every supported locale.
    pub fn load_dir(dir: impl AsRef<Path>, config: &LocaleConfig) -> Result<Self, DictionaryError> {
        let dir = dir.as_ref();
        let mut by_code = HashMap::new();

        for locale in config.locales() {
            let path = dir.join(format!("{}.json", locale.code()));
            let json = std::fs::read_to_string(&path).map_err(|source| DictionaryError::Io {
                path: path.clone(),
                source,
            })?;
            let dictionary = Dictionary::from_json_str(&json)?;
            info!("Loaded {} dictionary from {}", locale.name(), path.display());
            by_code.insert(locale.code(), dictionary);
        }

        Ok(Self {
            by_code,
            default: config.default_locale().code(),
        })
    }

    /// Build from already-parsed dictionaries.
    #[cfg(test)]
    pub(crate) fn from_entries(
        config: &LocaleConfig,
        entries: impl IntoIterator<Item = (Locale, Dictionary)>,
    ) -> Self {
        Self {
            by_code: entries
                .into_iter()
                .map(|(locale, dictionary)| (locale.code(), dictionary))
                .collect(),
            default: config.default_locale().code(),
        }
    }

    /// The locale's dictionary, or the default locale's when it has none.
    pub fn for_locale(&self, locale: Locale) -> &Dictionary {
        static EMPTY: std::sync::OnceLock<Dictionary> = std::sync::OnceLock::new();

        self.by_code
            .get(locale.code())
            .or_else(|| self.by_code.get(self.default))
            .unwrap_or_else(|| EMPTY.get_or_init(Dictionary::default))
    }
}
