//! Portfolio: two independent renderings of `works.projects`.
//!
//! Blocks are the video backgrounds (first one active); the list holds the
//! project cards. Both keep the source order.

use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::{esc, list_html};

pub const ACTIVE_BLOCK_CLASS: &str = "works__block--active";

pub fn works_blocks(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |i, p| {
        let class = if i == 0 {
            format!("works__block {}", ACTIVE_BLOCK_CLASS)
        } else {
            "works__block".to_string()
        };
        let title = esc(p, "title");
        format!(
            concat!(
                r#"<div class="{}" data-image="{}">"#,
                r#"<div class="works__block-title"><span class="works__block-title--plug">{}</span><span>{}</span></div>"#,
                r#"<video src="{}" muted loop playsinline></video>"#,
                "</div>"
            ),
            class,
            esc(p, "id"),
            title,
            title,
            esc(p, "video")
        )
    })
}

pub fn works_list(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, p| {
        let title = esc(p, "title");
        format!(
            concat!(
                r#"<a href="{}" target="_blank" class="works__item cursor-works" data-image="{}">"#,
                r#"<div class="works__item-img"><img src="{}" alt="{}"></div>"#,
                r#"<div class="works__item-info"><span class="works__item-title">{}</span><span class="works__item-type">{}</span></div>"#,
                "</a>"
            ),
            esc(p, "href"),
            esc(p, "id"),
            esc(p, "image"),
            title,
            title,
            esc(p, "type")
        )
    })
}
