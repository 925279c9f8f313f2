//! Locale registry: the table of known locales and the configured subset.
//!
//! `known_locales()` is the single source of locale metadata. A
//! `LocaleConfig` selects which of those the site serves and which one is
//! the default; it is built once at startup and shared read-only.

use crate::error::ConfigError;
use crate::i18n::{Direction, Locale};

/// Static metadata for a locale the site knows how to serve.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleInfo {
    /// Language code used in paths and cookies (e.g., "en", "ar")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language (e.g., "العربية")
    pub native_name: &'static str,

    /// Text direction for rendered pages
    pub direction: Direction,

    /// Open Graph locale (e.g., "en_US")
    pub og_locale: &'static str,
}

static KNOWN_LOCALES: [LocaleInfo; 2] = [
    LocaleInfo {
        code: "en",
        name: "English",
        native_name: "English",
        direction: Direction::Ltr,
        og_locale: "en_US",
    },
    LocaleInfo {
        code: "ar",
        name: "Arabic",
        native_name: "العربية",
        direction: Direction::Rtl,
        og_locale: "ar_SA",
    },
];

/// All locales the registry has metadata for.
pub fn known_locales() -> &'static [LocaleInfo] {
    &KNOWN_LOCALES
}

fn lookup(code: &str) -> Option<&'static LocaleInfo> {
    known_locales().iter().find(|info| info.code == code)
}

/// The supported locales and the default, in configured order.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    locales: Vec<Locale>,
    default: Locale,
}

impl LocaleConfig {
    /// Build a configuration from locale codes and a default code.
    ///
    /// Every code must be known to the registry and listed once, and the
    /// default must be one of them.
    pub fn new(codes: &[&str], default: &str) -> Result<Self, ConfigError> {
        if codes.is_empty() {
            return Err(ConfigError::NoLocales);
        }

        let mut locales: Vec<Locale> = Vec::with_capacity(codes.len());
        for code in codes {
            let info = lookup(code).ok_or_else(|| ConfigError::UnknownLocale(code.to_string()))?;
            if locales.iter().any(|l| l.code() == info.code) {
                return Err(ConfigError::DuplicateLocale(code.to_string()));
            }
            locales.push(Locale::new(info));
        }

        let default = locales
            .iter()
            .copied()
            .find(|l| l.code() == default)
            .ok_or_else(|| ConfigError::DefaultNotSupported(default.to_string()))?;

        Ok(Self { locales, default })
    }

    /// Supported locales in configured order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    /// Look up a supported locale by exact code.
    ///
    /// Matching is case-sensitive: `"EN"` is not a supported locale.
    pub fn parse(&self, code: &str) -> Option<Locale> {
        self.locales.iter().copied().find(|l| l.code() == code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.parse(code).is_some()
    }

    /// The locale for `code`, or the default when it isn't supported.
    pub fn resolve_or_default(&self, code: &str) -> Locale {
        self.parse(code).unwrap_or(self.default)
    }

    /// The next supported locale after `locale`, wrapping around.
    ///
    /// With two locales this toggles between them.
    pub fn alternate(&self, locale: Locale) -> Locale {
        let position = self
            .locales
            .iter()
            .position(|l| *l == locale)
            .unwrap_or(0);
        self.locales[(position + 1) % self.locales.len()]
    }
}

impl Default for LocaleConfig {
    /// English and Arabic, English by default.
    fn default() -> Self {
        let locales: Vec<Locale> = known_locales().iter().map(Locale::new).collect();
        Self {
            default: locales[0],
            locales,
        }
    }
}
