//! Internationalization (i18n) module for the site's locales.
//!
//! # Architecture
//!
//! - `registry`: Known locales and the configured supported set
//! - `locale`: Validated `Locale` type and text direction
//! - `negotiate`: `Accept-Language` parsing and preferred-locale resolution
//! - `dictionary`: Per-locale JSON dictionaries with dotted-key lookup
//! - `context`: Per-request render context and locale path helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use machinery_site::i18n::{resolve_preferred_locale, LocaleConfig};
//!
//! let config = LocaleConfig::new(&["en", "ar"], "en")?;
//! let locale = resolve_preferred_locale(&config, None, Some("ar-SA,en;q=0.8"));
//! assert_eq!(locale.code(), "ar");
//! ```

mod context;
mod dictionary;
mod locale;
mod negotiate;
mod registry;

pub use context::{localized_path, switch_locale_path, LocaleContext};
pub use dictionary::{Dictionaries, Dictionary};
pub use locale::{Direction, Locale};
pub use negotiate::{parse_accept_language, resolve_preferred_locale, LanguagePreference};
pub use registry::{known_locales, LocaleConfig, LocaleInfo};
