use super::{card, escape_html, render_layout, Page};
use crate::catalog::categories;
use crate::i18n::LocaleContext;

const REASONS: [(&str, &str, &str); 4] = [
    ("quality", "Premium Quality", "Machines from trusted European and Asian manufacturers"),
    ("support", "Technical Support", "Installation, training and after-sales service by our engineers"),
    ("parts", "Spare Parts", "Genuine spare parts kept in stock for fast delivery"),
    ("experience", "Experience", "Years of experience equipping workshops across the region"),
];

pub fn render_home(ctx: &LocaleContext<'_>) -> String {
    let view_text = ctx.t("products.viewCategory", "View Category");

    let category_cards: String = categories()
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

    let reasons: String = REASONS
        .iter()
        .map(|(key, title, description)| {
            format!(
                "<li><h3>{}</h3><p>{}</p></li>",
                escape_html(ctx.t(&format!("whyChooseUs.{}.title", key), title)),
                escape_html(ctx.t(&format!("whyChooseUs.{}.description", key), description))
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
<h1>{hero_title}</h1>
<p>{hero_subtitle}</p>
<a class="cta" href="{products}">{hero_cta}</a>
</section>
<section class="machinery">
<h2>{machinery_title}</h2>
<div class="grid">{category_cards}</div>
</section>
<section class="why-choose-us">
<h2>{why_title}</h2>
<ul>{reasons}</ul>
</section>
<section id="contact" class="contact">
<h2>{contact_title}</h2>
<p>{contact_subtitle}</p>
<p><a href="tel:{phone}">{phone}</a> · <a href="mailto:{email}">{email}</a></p>
</section>"#,
        hero_title = escape_html(ctx.t("hero.title", "Industrial Machinery Solutions")),
        hero_subtitle = escape_html(ctx.t(
            "hero.subtitle",
            "High-quality machinery for wood, metal, glass, and aluminum processing"
        )),
        products = ctx.href("/products"),
        hero_cta = escape_html(ctx.t("hero.cta", "Explore Products")),
        machinery_title = escape_html(ctx.t("machinery.title", "Our Machinery")),
        category_cards = category_cards,
        why_title = escape_html(ctx.t("whyChooseUs.title", "Why Choose Us")),
        reasons = reasons,
        contact_title = escape_html(ctx.t("contact.title", "Get in Touch")),
        contact_subtitle = escape_html(ctx.t(
            "contact.subtitle",
            "Talk to our team about the right machine for your production"
        )),
        phone = escape_html(ctx.t("contact.phone", "+966 000 000 000")),
        email = escape_html(ctx.t("contact.email", "sales@example.com")),
    );

    render_layout(
        ctx,
        Page {
            title: None,
            description: ctx.t(
                "site.description",
                "High-quality machinery for wood, metal, glass, and aluminum processing",
            ),
            path: "/",
            body,
        },
    )
}
