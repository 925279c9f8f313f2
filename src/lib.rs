pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod pages;
pub mod server;
