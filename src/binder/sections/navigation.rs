//! Navigation lists (header, hero, mobile, footer) and header CTA buttons.

use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::{esc, list_html};
use crate::content::get_str;

const ARROW_ICON: &str = r#"<svg width="12" height="12" viewBox="0 0 24 24" fill="none"><path d="M7 17L17 7M17 7H7M17 7V17" stroke="currentColor" stroke-width="2"/></svg>"#;

pub fn header_nav(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, item| {
        format!(
            r#"<a href="{}" class="header__nav-item single-anchors">{}</a>"#,
            esc(item, "href"),
            esc(item, "text")
        )
    })
}

pub fn hero_nav(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, item| {
        format!(
            r#"<a href="{}" class="main-screen__nav-item single-anchors">{}</a>"#,
            esc(item, "href"),
            esc(item, "text")
        )
    })
}

pub fn mobile_nav(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, item| {
        format!(
            r#"<div class="links__item"><a href="{}" class="links__text single-anchors"><span>{}</span></a></div>"#,
            esc(item, "href"),
            esc(item, "text")
        )
    })
}

pub fn footer_nav(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, item| {
        format!(
            r#"<a href="{}" class="footer__nav-item">{}</a>"#,
            esc(item, "href"),
            esc(item, "text")
        )
    })
}

/// `style: "filled"` gets the filled modifier, anything else is outlined.
pub fn header_cta(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, btn| {
        let style_class = match get_str(btn, "style") {
            Some("filled") => "header__cta-btn--filled",
            _ => "header__cta-btn--outline",
        };
        let icon = match get_str(btn, "icon") {
            Some("arrow") => ARROW_ICON,
            _ => "",
        };
        format!(
            r#"<a href="{}" class="header__cta-btn {}">{}{}</a>"#,
            esc(btn, "href"),
            style_class,
            esc(btn, "text"),
            icon
        )
    })
}
