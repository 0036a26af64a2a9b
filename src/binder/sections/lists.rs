//! Flat lists: preloader numbers, feature tags, social links, hero stack.

use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::{esc, esc_value, list_html};

pub fn preloader_numbers(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, n| format!("<span>{}</span>", esc_value(n)))
}

pub fn mobile_menu_features(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, f| format!("<span>{}</span>", esc_value(f)))
}

pub fn about_features(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, f| {
        format!(r#"<span class="features__item">{}</span>"#, esc_value(f))
    })
}

pub fn mobile_menu_socials(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, s| {
        format!(
            r#"<a href="{}" class="mobile-menu__socials-link" target="_blank">{}</a>"#,
            esc(s, "href"),
            esc(s, "text")
        )
    })
}

pub fn footer_socials(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, s| {
        format!(
            r#"<a href="{}" target="_blank" class="footer__socials-link">{}</a>"#,
            esc(s, "href"),
            esc(s, "text")
        )
    })
}

pub fn hero_stack(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, s| format!("<span>{}</span>", esc_value(s)))
}
