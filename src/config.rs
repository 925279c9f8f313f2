use crate::error::ConfigError;
use crate::i18n::LocaleConfig;
use crate::middleware::LocaleCookie;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Locales
    pub supported_locales: Vec<String>,
    pub default_locale: String,
    pub locale_cookie: String,

    // Content
    pub dictionary_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?,
                Err(_) => 8080,
            },

            // Locales
            supported_locales: std::env::var("SUPPORTED_LOCALES")
                .map(|v| parse_list(&v))
                .unwrap_or_else(|_| vec!["en".to_string(), "ar".to_string()]),
            default_locale: std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),
            locale_cookie: std::env::var("LOCALE_COOKIE")
                .unwrap_or_else(|_| crate::middleware::locale::LOCALE_COOKIE.to_string()),

            // Content
            dictionary_dir: std::env::var("DICTIONARY_DIR")
                .unwrap_or_else(|_| "dictionaries".to_string())
                .into(),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
        })
    }

    /// Validate the locale settings into a `LocaleConfig`.
    pub fn locale_config(&self) -> Result<LocaleConfig, ConfigError> {
        let codes: Vec<&str> = self.supported_locales.iter().map(String::as_str).collect();
        LocaleConfig::new(&codes, &self.default_locale)
    }

    pub fn locale_cookie(&self) -> Result<LocaleCookie, ConfigError> {
        LocaleCookie::new(self.locale_cookie.clone())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated list, dropping blanks.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
