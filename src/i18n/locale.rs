//! Locale type: a language tag validated against the supported set.
//!
//! A `Locale` can only be obtained from a [`LocaleConfig`], so holding one
//! means the code is a member of the configured locales.
//!
//! [`LocaleConfig`]: crate::i18n::LocaleConfig

use crate::i18n::LocaleInfo;
use std::fmt;

/// Text direction used for the `dir` attribute of rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    info: &'static LocaleInfo,
}

impl Locale {
    pub(crate) fn new(info: &'static LocaleInfo) -> Self {
        Self { info }
    }

    /// Language code used in paths and cookies (e.g., "en", "ar").
    pub fn code(&self) -> &'static str {
        self.info.code
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.info.name
    }

    /// Name of the language in its own script (e.g., "العربية").
    pub fn native_name(&self) -> &'static str {
        self.info.native_name
    }

    pub fn direction(&self) -> Direction {
        self.info.direction
    }

    /// Open Graph locale tag (e.g., "ar_SA").
    pub fn og_locale(&self) -> &'static str {
        self.info.og_locale
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info.code)
    }
}
