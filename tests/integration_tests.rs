//! Integration tests for the machinery site
//!
//! These tests drive the full router in-process, so the locale middleware,
//! routing and page rendering are exercised together.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    Router,
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use machinery_site::{
    i18n::{Dictionaries, LocaleConfig},
    middleware::LocaleCookie,
    server::{build_router, AppState},
};

// ==================== Test Helpers ====================

const EN_DICTIONARY: &str = r#"{
    "navbar": { "home": "Home", "woodMachines": "Wood Working Machines" },
    "products": { "title": "Our Products" }
}"#;

const AR_DICTIONARY: &str = r#"{
    "navbar": { "home": "الرئيسية", "woodMachines": "آلات النجارة" },
    "products": { "title": "منتجاتنا" }
}"#;

const COOKIE: &str = "NEXT_LOCALE=ar; Path=/; Max-Age=31536000; SameSite=Lax";

/// Create a router backed by dictionaries and static files in a temp dir
fn create_test_app(temp_dir: &TempDir) -> Router {
    let dictionary_dir = temp_dir.path().join("dictionaries");
    let static_dir = temp_dir.path().join("static");
    std::fs::create_dir_all(&dictionary_dir).expect("Failed to create dictionary dir");
    std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");
    std::fs::write(dictionary_dir.join("en.json"), EN_DICTIONARY).expect("Failed to write en.json");
    std::fs::write(dictionary_dir.join("ar.json"), AR_DICTIONARY).expect("Failed to write ar.json");
    std::fs::write(static_dir.join("logo"), "logo-bytes").expect("Failed to write static file");

    let locales = Arc::new(LocaleConfig::default());
    let dictionaries = Dictionaries::load_dir(&dictionary_dir, &locales).expect("Failed to load");
    build_router(
        AppState::new(locales, dictionaries),
        LocaleCookie::default(),
        &static_dir,
    )
}

async fn send(app: Router, uri: &str, headers: &[(header::HeaderName, &str)]) -> Response {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(name, *value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .expect("Request failed")
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

fn set_cookie(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

// ==================== Redirect Tests ====================

#[tokio::test]
async fn test_bare_path_redirects_to_default_locale() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/products", &[]).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/en/products"));
    assert_eq!(
        set_cookie(&response),
        Some("NEXT_LOCALE=en; Path=/; Max-Age=31536000; SameSite=Lax")
    );
}

#[tokio::test]
async fn test_cookie_beats_accept_language() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(
        create_test_app(&temp_dir),
        "/wood",
        &[
            (header::COOKIE, "NEXT_LOCALE=ar"),
            (header::ACCEPT_LANGUAGE, "en;q=1.0"),
        ],
    )
    .await;

    assert_eq!(location(&response), Some("/ar/wood"));
    assert_eq!(set_cookie(&response), Some(COOKIE));
}

#[tokio::test]
async fn test_accept_language_quality_ordering() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(
        create_test_app(&temp_dir),
        "/",
        &[(header::ACCEPT_LANGUAGE, "ar;q=0.5,en;q=0.9")],
    )
    .await;

    assert_eq!(location(&response), Some("/en"));
}

#[tokio::test]
async fn test_browser_arabic_header() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(
        create_test_app(&temp_dir),
        "/",
        &[(header::ACCEPT_LANGUAGE, "ar-SA,ar;q=0.9,en;q=0.8")],
    )
    .await;

    // Root redirects without a trailing slash
    assert_eq!(location(&response), Some("/ar"));
    assert_eq!(set_cookie(&response), Some(COOKIE));
}

#[tokio::test]
async fn test_unsupported_language_uses_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(
        create_test_app(&temp_dir),
        "/metal",
        &[(header::ACCEPT_LANGUAGE, "fr;q=1.0")],
    )
    .await;

    assert_eq!(location(&response), Some("/en/metal"));
}

#[tokio::test]
async fn test_redirect_keeps_query_string() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/products?ref=ad", &[]).await;

    assert_eq!(location(&response), Some("/en/products?ref=ad"));
}

#[tokio::test]
async fn test_unknown_locale_segment_is_prefixed() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/fr/wood", &[]).await;

    assert_eq!(location(&response), Some("/en/fr/wood"));
}

#[tokio::test]
async fn test_non_utf8_headers_fall_back_to_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let invalid = HeaderValue::from_bytes(b"\xff").expect("Opaque bytes are a valid header");
    let request = Request::builder()
        .uri("/products")
        .header(header::COOKIE, invalid.clone())
        .header(header::ACCEPT_LANGUAGE, invalid)
        .body(Body::empty())
        .unwrap();

    let response = create_test_app(&temp_dir)
        .oneshot(request)
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/en/products"));
    assert!(set_cookie(&response).unwrap().starts_with("NEXT_LOCALE=en;"));
}

// ==================== Pass-through Tests ====================

#[tokio::test]
async fn test_prefixed_path_serves_page_and_refreshes_cookie() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(
        create_test_app(&temp_dir),
        "/ar/metal",
        &[(header::COOKIE, "NEXT_LOCALE=en")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(location(&response).is_none());
    assert_eq!(set_cookie(&response), Some(COOKIE));

    let body = body_text(response).await;
    assert!(body.contains(r#"<html lang="ar" dir="rtl">"#));
}

#[tokio::test]
async fn test_prefixed_path_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = create_test_app(&temp_dir);

    let first = send(app.clone(), "/ar/metal", &[]).await;
    let first_cookie = set_cookie(&first).map(str::to_string);

    let second = send(app, "/ar/metal", &[(header::COOKIE, "NEXT_LOCALE=ar")]).await;

    assert_eq!(first_cookie.as_deref(), Some(COOKIE));
    assert_eq!(set_cookie(&second), first_cookie.as_deref());
    assert_eq!(second.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_excluded_path_is_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(
        create_test_app(&temp_dir),
        "/_next/static/chunk.js",
        &[
            (header::COOKIE, "NEXT_LOCALE=ar"),
            (header::ACCEPT_LANGUAGE, "ar"),
        ],
    )
    .await;

    assert!(location(&response).is_none());
    assert!(set_cookie(&response).is_none());
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint_is_not_localized() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/api/health", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).is_none());
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_static_files_are_served() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/static/logo", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).is_none());
    assert_eq!(body_text(response).await, "logo-bytes");
}

// ==================== Page Tests ====================

#[tokio::test]
async fn test_home_page_in_english() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/en", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(body.contains(r#"class="language-switcher" href="/ar""#));
}

#[tokio::test]
async fn test_products_page_uses_dictionary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/ar/products", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h1>منتجاتنا</h1>"));
    assert!(body.contains("الرئيسية"));
}

#[tokio::test]
async fn test_category_page() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/ar/wood", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h1>آلات النجارة</h1>"));
    assert!(body.contains(r#"href="/ar/wood/beam-saws""#));
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/en/plastic", &[]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        set_cookie(&response),
        Some("NEXT_LOCALE=en; Path=/; Max-Age=31536000; SameSite=Lax")
    );
    assert!(body_text(response).await.contains("Page Not Found"));
}

#[tokio::test]
async fn test_unrouted_prefixed_path_renders_localized_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let response = send(create_test_app(&temp_dir), "/ar/wood/cnc", &[]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains(r#"<html lang="ar" dir="rtl">"#));
}

// ==================== Startup Tests ====================

#[test]
fn test_missing_dictionary_fails_startup() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("en.json"), EN_DICTIONARY).unwrap();

    let result = Dictionaries::load_dir(temp_dir.path(), &LocaleConfig::default());
    assert!(result.is_err());
}
