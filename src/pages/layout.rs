use super::escape_html;
use crate::catalog::categories;
use crate::i18n::{localized_path, switch_locale_path, LocaleContext};

/// Per-page content handed to [`render_layout`].
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Page title, or `None` for the site's default title
    pub title: Option<&'a str>,
    pub description: &'a str,
    /// Path below the locale prefix (e.g., "/wood"; "/" for the home page)
    pub path: &'a str,
    pub body: String,
}

/// Wrap a page body in the shared document shell.
pub fn render_layout(ctx: &LocaleContext<'_>, page: Page<'_>) -> String {
    let locale = ctx.locale;
    let alternate = ctx.alternate();
    let canonical = ctx.href(page.path);

    let title = match page.title {
        Some(title) => format!(
            "{} | {}",
            title,
            ctx.t("site.titleSuffix", "Industrial Machinery")
        ),
        None => ctx.t("site.title", "Industrial Machinery Solutions").to_string(),
    };

    let hreflang: String = ctx
        .config
        .locales()
        .iter()
        .map(|l| {
            format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                l.code(),
                escape_html(&localized_path(*l, page.path))
            )
        })
        .collect();

    let og_alternates: String = ctx
        .config
        .locales()
        .iter()
        .filter(|l| **l != locale)
        .map(|l| format!(r#"<meta property="og:locale:alternate" content="{}">"#, l.og_locale()))
        .collect();

    // Each category entry carries a dropdown of its subcategories
    let category_links: String = categories()
        .iter()
        .map(|c| {
            let subcategory_links: String = c
                .subcategories
                .iter()
                .map(|s| {
                    format!(
                        r#"<li><a href="{}">{}</a></li>"#,
                        escape_html(&ctx.href(&format!("/{}/{}", c.slug, s.slug))),
                        escape_html(ctx.t(s.title_key, s.title))
                    )
                })
                .collect();
            format!(
                r#"<li class="has-menu"><a href="{}">{}</a><ul class="mega-menu">{}</ul></li>"#,
                escape_html(&ctx.href(&format!("/{}", c.slug))),
                escape_html(ctx.t(c.title_key, c.title)),
                subcategory_links
            )
        })
        .collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="canonical" href="{canonical}">
{hreflang}
<meta property="og:locale" content="{og_locale}">
{og_alternates}
<link rel="stylesheet" href="/static/site.css">
</head>
<body>
<header class="navbar">
<a class="brand" href="{home}">{brand}</a>
<nav>
<ul>
<li><a href="{home}">{home_label}</a></li>
<li><a href="{products}">{products_label}</a></li>
{category_links}
<li><a href="{home}#contact">{contact_label}</a></li>
</ul>
</nav>
<a class="language-switcher" href="{switch_href}" hreflang="{switch_lang}" title="{switch_title}">{switch_name}</a>
</header>
<main>
{body}
</main>
<footer class="footer">
<p>{footer}</p>
</footer>
</body>
</html>
"##,
        lang = locale.code(),
        dir = ctx.direction().as_str(),
        title = escape_html(&title),
        description = escape_html(page.description),
        canonical = escape_html(&canonical),
        hreflang = hreflang,
        og_locale = locale.og_locale(),
        og_alternates = og_alternates,
        home = ctx.href("/"),
        brand = escape_html(ctx.t("navbar.brand", "Industrial Machinery")),
        home_label = escape_html(ctx.t("navbar.home", "Home")),
        products = ctx.href("/products"),
        products_label = escape_html(ctx.t("navbar.products", "Products")),
        category_links = category_links,
        contact_label = escape_html(ctx.t("navbar.contact", "Contact Us")),
        switch_href = escape_html(&switch_locale_path(ctx.config, &canonical, alternate)),
        switch_lang = alternate.code(),
        switch_title = escape_html(&format!(
            "{} {}",
            ctx.t("navbar.switchTo", "Switch to"),
            alternate.native_name()
        )),
        switch_name = escape_html(alternate.native_name()),
        footer = escape_html(ctx.t(
            "footer.copyright",
            "© Industrial Machinery Solutions. All rights reserved."
        )),
        body = page.body,
    )
}

/// Localized 404 page.
pub fn render_not_found(ctx: &LocaleContext<'_>) -> String {
    let title = ctx.t("notFound.title", "Page Not Found");
    let body = format!(
        r#"<section class="not-found"><h1>{}</h1><p>{}</p><a href="{}">{}</a></section>"#,
        escape_html(title),
        escape_html(ctx.t(
            "notFound.description",
            "The page you are looking for does not exist."
        )),
        ctx.href("/"),
        escape_html(ctx.t("notFound.backHome", "Back to Home"))
    );

    render_layout(
        ctx,
        Page {
            title: Some(title),
            description: title,
            path: "/",
            body,
        },
    )
}
