//! Locale redirect middleware.
//!
//! Every page path is served under a locale prefix (`/en/...`, `/ar/...`).
//! Bare paths are redirected to the visitor's preferred locale, and the
//! chosen locale is remembered in a cookie for the next visit.

use crate::error::ConfigError;
use crate::i18n::{localized_path, resolve_preferred_locale, Locale, LocaleConfig};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default name of the locale preference cookie.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// One year, in seconds.
pub const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

const SKIPPED_PREFIXES: [&str; 3] = ["/_next", "/api", "/static"];
const FAVICON: &str = "/favicon.ico";

/// How a request path relates to locale handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Assets, API and framework paths: no locale logic at all
    Skip,
    /// First segment is a supported locale
    Prefixed(Locale),
    /// Page path that still needs a locale prefix
    Bare,
}

/// Classify a request path.
pub fn classify(config: &LocaleConfig, path: &str) -> PathClass {
    if SKIPPED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || path.contains('.')
        || path == FAVICON
    {
        return PathClass::Skip;
    }

    let rest = path.strip_prefix('/').unwrap_or(path);
    for locale in config.locales() {
        if let Some(after) = rest.strip_prefix(locale.code()) {
            if after.is_empty() || after.starts_with('/') {
                return PathClass::Prefixed(*locale);
            }
        }
    }

    PathClass::Bare
}

/// What the middleware does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleAction {
    /// Forward untouched
    PassThrough,
    /// Forward, then set the cookie to this locale
    Refresh(Locale),
    /// Redirect to `location` and set the cookie to `locale`
    Redirect { location: String, locale: Locale },
}

/// Decide how to handle a request from its path, query and locale signals.
pub fn decide(
    config: &LocaleConfig,
    path: &str,
    query: Option<&str>,
    cookie: Option<&str>,
    accept_language: Option<&str>,
) -> LocaleAction {
    match classify(config, path) {
        PathClass::Skip => LocaleAction::PassThrough,
        PathClass::Prefixed(locale) => LocaleAction::Refresh(locale),
        PathClass::Bare => {
            let locale = resolve_preferred_locale(config, cookie, accept_language);
            let mut location = localized_path(locale, path);
            if let Some(query) = query {
                location.push('?');
                location.push_str(query);
            }
            LocaleAction::Redirect { location, locale }
        }
    }
}

/// Value of the first cookie named `name` across all `Cookie` headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Attributes of the locale preference cookie.
#[derive(Debug, Clone)]
pub struct LocaleCookie {
    name: String,
    max_age_secs: u64,
}

impl LocaleCookie {
    /// The name must be a non-empty HTTP token (RFC 7230).
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if !is_token(&name) {
            return Err(ConfigError::InvalidCookieName(name));
        }
        Ok(Self {
            name,
            max_age_secs: COOKIE_MAX_AGE_SECS,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Set-Cookie` value storing `locale` site-wide.
    pub fn header_value(&self, locale: Locale) -> String {
        format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            self.name,
            locale.code(),
            self.max_age_secs
        )
    }
}

impl Default for LocaleCookie {
    fn default() -> Self {
        Self {
            name: LOCALE_COOKIE.to_string(),
            max_age_secs: COOKIE_MAX_AGE_SECS,
        }
    }
}

fn is_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

/// Shared state for [`handle`].
#[derive(Debug, Clone)]
pub struct LocaleRedirect {
    pub locales: Arc<LocaleConfig>,
    pub cookie: Arc<LocaleCookie>,
}

impl LocaleRedirect {
    pub fn new(locales: Arc<LocaleConfig>, cookie: LocaleCookie) -> Self {
        Self {
            locales,
            cookie: Arc::new(cookie),
        }
    }

    fn set_cookie(&self, response: &mut Response, locale: Locale) {
        match HeaderValue::from_str(&self.cookie.header_value(locale)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Invalid locale cookie header: {}", e),
        }
    }
}

/// Axum middleware: apply [`decide`] to the incoming request.
pub async fn handle(
    State(redirect): State<LocaleRedirect>,
    request: Request,
    next: Next,
) -> Response {
    let uri = request.uri();
    let headers = request.headers();
    let action = decide(
        &redirect.locales,
        uri.path(),
        uri.query(),
        read_cookie(headers, redirect.cookie.name()),
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok()),
    );

    match action {
        LocaleAction::PassThrough => next.run(request).await,
        LocaleAction::Refresh(locale) => {
            let mut response = next.run(request).await;
            redirect.set_cookie(&mut response, locale);
            response
        }
        LocaleAction::Redirect { location, locale } => {
            debug!("Redirecting to {} (locale: {})", location, locale);
            let mut response = Redirect::temporary(&location).into_response();
            redirect.set_cookie(&mut response, locale);
            response
        }
    }
}
