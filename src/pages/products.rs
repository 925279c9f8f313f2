use super::{breadcrumb, card, escape_html, render_layout, Page};
use crate::catalog::categories;
use crate::i18n::LocaleContext;

pub fn render_products(ctx: &LocaleContext<'_>) -> String {
    let title = ctx.t("products.title", "Our Products");
    let description = ctx.t(
        "products.description",
        "Discover our full range of industrial machinery for every production need.",
    );
    let view_text = ctx.t("products.viewCategory", "View Category");

    let cards: String = categories()
        .iter()
        .map(|c| {
            card(
                ctx.t(c.title_key, c.title),
                ctx.t(c.summary_key, c.summary),
                &ctx.href(&format!("/{}", c.slug)),
                view_text,
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero-banner">
{breadcrumb}
<h1>{title}</h1>
<p>{description}</p>
</section>
<section class="categories">
<span class="badge">{badge}</span>
<h2>{categories_title}</h2>
<p>{categories_subtitle}</p>
<div class="grid">{cards}</div>
</section>"#,
        breadcrumb = breadcrumb(&[
            (ctx.t("navbar.home", "Home"), Some(ctx.href("/"))),
            (ctx.t("products.title", "Products"), None),
        ]),
        title = escape_html(title),
        description = escape_html(description),
        badge = escape_html(ctx.t("products.categoriesBadge", "Browse Categories")),
        categories_title = escape_html(ctx.t("products.categoriesTitle", "Product Categories")),
        categories_subtitle = escape_html(ctx.t(
            "products.categoriesSubtitle",
            "Choose a category to explore our specialized machinery"
        )),
        cards = cards,
    );

    render_layout(
        ctx,
        Page {
            title: Some(title),
            description,
            path: "/products",
            body,
        },
    )
}
