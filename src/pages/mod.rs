//! Server-rendered HTML pages.
//!
//! Every render function takes the request's [`LocaleContext`] explicitly and
//! returns a complete HTML document.
//!
//! [`LocaleContext`]: crate::i18n::LocaleContext

mod category;
mod home;
mod layout;
mod products;

pub use category::render_category;
pub use home::render_home;
pub use layout::{render_layout, render_not_found, Page};
pub use products::render_products;

use crate::catalog::Subcategory;
use crate::i18n::LocaleContext;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A product card linking to `href`.
fn card(title: &str, description: &str, href: &str, view_text: &str) -> String {
    format!(
        r#"<article class="product-card"><h3>{}</h3><p>{}</p><a href="{}">{}</a></article>"#,
        escape_html(title),
        escape_html(description),
        escape_html(href),
        escape_html(view_text)
    )
}

/// Breadcrumb trail; the last item is the current page and has no link.
fn breadcrumb(items: &[(&str, Option<String>)]) -> String {
    let links: Vec<String> = items
        .iter()
        .map(|(label, href)| match href {
            Some(href) => format!(r#"<a href="{}">{}</a>"#, escape_html(href), escape_html(label)),
            None => format!(r#"<span aria-current="page">{}</span>"#, escape_html(label)),
        })
        .collect();
    format!(r#"<nav class="breadcrumb">{}</nav>"#, links.join(" / "))
}

fn subcategory_card(ctx: &LocaleContext<'_>, category_slug: &str, sub: &Subcategory) -> String {
    card(
        ctx.t(sub.title_key, sub.title),
        ctx.t(sub.description_key, sub.description),
        &ctx.href(&format!("/{}/{}", category_slug, sub.slug)),
        ctx.t("products.viewProducts", "View Products"),
    )
}
