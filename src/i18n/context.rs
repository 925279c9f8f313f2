use crate::i18n::{Dictionary, Direction, Locale, LocaleConfig};

/// Everything a page needs to render in one locale.
///
/// Built per request and passed explicitly into the render functions.
#[derive(Debug, Clone, Copy)]
pub struct LocaleContext<'a> {
    pub locale: Locale,
    pub config: &'a LocaleConfig,
    pub dictionary: &'a Dictionary,
}

impl<'a> LocaleContext<'a> {
    pub fn new(locale: Locale, config: &'a LocaleConfig, dictionary: &'a Dictionary) -> Self {
        Self {
            locale,
            config,
            dictionary,
        }
    }

    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Shorthand for `self.dictionary.text(key, fallback)`.
    pub fn t<'b>(&'b self, key: &str, fallback: &'b str) -> &'b str {
        self.dictionary.text(key, fallback)
    }

    /// Prefix a site-relative path with this locale (`"/wood"` → `"/ar/wood"`).
    pub fn href(&self, path: &str) -> String {
        localized_path(self.locale, path)
    }

    /// The locale the language switch points to.
    pub fn alternate(&self) -> Locale {
        self.config.alternate(self.locale)
    }
}

/// `/{locale}` followed by `path`, without a trailing slash for the root.
pub fn localized_path(locale: Locale, path: &str) -> String {
    if path.is_empty() || path == "/" {
        format!("/{}", locale.code())
    } else if path.starts_with('/') {
        format!("/{}{}", locale.code(), path)
    } else {
        format!("/{}/{}", locale.code(), path)
    }
}

/// Replace the locale segment of a prefixed path (`/en/wood` → `/ar/wood`).
///
/// A path without a locale segment gets the target prefix added instead.
pub fn switch_locale_path(config: &LocaleConfig, path: &str, target: Locale) -> String {
    let rest = path.strip_prefix('/').unwrap_or(path);
    let (first, tail) = match rest.split_once('/') {
        Some((first, tail)) => (first, Some(tail)),
        None => (rest, None),
    };

    if !config.is_supported(first) {
        return localized_path(target, path);
    }

    match tail {
        Some(tail) => format!("/{}/{}", target.code(), tail),
        None => format!("/{}", target.code()),
    }
}
