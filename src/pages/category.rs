use super::{breadcrumb, escape_html, render_layout, subcategory_card, Page};
use crate::catalog::Category;
use crate::i18n::LocaleContext;

pub fn render_category(ctx: &LocaleContext<'_>, category: &Category) -> String {
    let title = ctx.t(category.title_key, category.title);
    let description = ctx.t(&category.key("pageDescription"), category.page_description);

    let cards: String = category
        .subcategories
        .iter()
        .map(|sub| subcategory_card(ctx, category.slug, sub))
        .collect();

    let subcategories_title = format!("Browse {}", category.title);
    let body = format!(
        r#"<section class="hero-banner">
{breadcrumb}
<h1>{title}</h1>
<p>{description}</p>
</section>
<section class="subcategories">
<span class="badge">{badge}</span>
<h2>{subcategories_title}</h2>
<p>{subcategories_subtitle}</p>
<div class="grid">{cards}</div>
</section>"#,
        breadcrumb = breadcrumb(&[
            (ctx.t("navbar.home", "Home"), Some(ctx.href("/"))),
            (ctx.t("products.title", "Products"), Some(ctx.href("/products"))),
            (title, None),
        ]),
        title = escape_html(title),
        description = escape_html(description),
        badge = escape_html(ctx.t(&category.key("subcategoriesBadge"), category.badge)),
        subcategories_title = escape_html(
            ctx.t(&category.key("subcategoriesTitle"), &subcategories_title)
        ),
        subcategories_subtitle = escape_html(ctx.t(
            &category.key("subcategoriesSubtitle"),
            "Select a category to view our specialized equipment"
        )),
        cards = cards,
    );

    render_layout(
        ctx,
        Page {
            title: Some(title),
            description,
            path: &format!("/{}", category.slug),
            body,
        },
    )
}
