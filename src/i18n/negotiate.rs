//! Preferred-locale resolution from the cookie and `Accept-Language` header.

use crate::i18n::{Locale, LocaleConfig};

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    /// Lowercased primary subtag (`"en"` for `"en-US"`)
    pub code: String,
    /// Quality weight, 1.0 when unspecified
    pub quality: f64,
}

/// Parse an `Accept-Language` header into preferences, highest quality first.
///
/// Entries are split on `;q=`; anything after the first hyphen of the tag is
/// dropped. A missing, unparsable or non-finite quality counts as 1.0. The
/// sort is stable, so equal weights keep their listed order.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<LanguagePreference> = header
        .split(',')
        .map(|entry| {
            let mut parts = entry.trim().split(";q=");
            let tag = parts.next().unwrap_or("");
            let quality = parts.next().map(parse_quality).unwrap_or(1.0);

            LanguagePreference {
                code: tag.split('-').next().unwrap_or("").to_lowercase(),
                quality,
            }
        })
        .collect();

    // Qualities are always finite, so -0 and 0 compare equal and keep listed order
    preferences.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    preferences
}

fn parse_quality(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(q) if q.is_finite() => q,
        _ => 1.0,
    }
}

/// Pick the locale for a request that has none in its path.
///
/// Priority: a supported cookie value, then the best supported
/// `Accept-Language` entry, then the configured default.
pub fn resolve_preferred_locale(
    config: &LocaleConfig,
    cookie: Option<&str>,
    accept_language: Option<&str>,
) -> Locale {
    if let Some(locale) = cookie.and_then(|value| config.parse(value)) {
        return locale;
    }

    if let Some(header) = accept_language {
        let matched = parse_accept_language(header)
            .iter()
            .find_map(|pref| config.parse(&pref.code));
        if let Some(locale) = matched {
            return locale;
        }
    }

    config.default_locale()
}
