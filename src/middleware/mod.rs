//! Request middleware.

pub mod locale;

pub use locale::{LocaleCookie, LocaleRedirect};
