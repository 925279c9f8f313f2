use crate::catalog::find_category;
use crate::config::Config;
use crate::i18n::{Dictionaries, LocaleConfig, LocaleContext};
use crate::middleware::{locale, LocaleCookie, LocaleRedirect};
use crate::pages;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// Read-only state shared by all page handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub locales: Arc<LocaleConfig>,
    pub dictionaries: Arc<Dictionaries>,
}

impl AppState {
    pub fn new(locales: Arc<LocaleConfig>, dictionaries: Dictionaries) -> Self {
        Self {
            locales,
            dictionaries: Arc::new(dictionaries),
        }
    }

    /// Render context for a `{lang}` path segment; unsupported codes use the default locale.
    pub fn context(&self, code: &str) -> LocaleContext<'_> {
        let locale = self.locales.resolve_or_default(code);
        LocaleContext::new(locale, &self.locales, self.dictionaries.for_locale(locale))
    }
}

/// Build the site router with locale redirects applied to every route.
pub fn build_router(state: AppState, cookie: LocaleCookie, static_dir: &std::path::Path) -> Router {
    let redirect = LocaleRedirect::new(Arc::clone(&state.locales), cookie);

    Router::new()
        .route("/api/health", get(health))
        .route("/:lang", get(home))
        .route("/:lang/products", get(products))
        .route("/:lang/:category", get(category))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(redirect, locale::handle))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

async fn health() -> &'static str {
    "ok"
}

async fn home(State(state): State<AppState>, Path(lang): Path<String>) -> Html<String> {
    Html(pages::render_home(&state.context(&lang)))
}

async fn products(State(state): State<AppState>, Path(lang): Path<String>) -> Html<String> {
    Html(pages::render_products(&state.context(&lang)))
}

async fn category(
    State(state): State<AppState>,
    Path((lang, slug)): Path<(String, String)>,
) -> Response {
    let ctx = state.context(&lang);
    match find_category(&slug) {
        Some(category) => Html(pages::render_category(&ctx, category)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(pages::render_not_found(&ctx))).into_response(),
    }
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    let lang = uri
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or("");
    (
        StatusCode::NOT_FOUND,
        Html(pages::render_not_found(&state.context(lang))),
    )
}

/// Load dictionaries and serve the site until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let locales = Arc::new(
        config
            .locale_config()
            .context("Invalid locale configuration")?,
    );
    let cookie = config.locale_cookie().context("Invalid LOCALE_COOKIE")?;
    info!(
        "Serving locales {:?} (default: {})",
        locales.locales().iter().map(|l| l.code()).collect::<Vec<_>>(),
        locales.default_locale()
    );

    let dictionaries = Dictionaries::load_dir(&config.dictionary_dir, &locales).with_context(|| {
        format!(
            "Failed to load dictionaries from {}",
            config.dictionary_dir.display()
        )
    })?;

    let state = AppState::new(locales, dictionaries);
    let app = build_router(state, cookie, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
