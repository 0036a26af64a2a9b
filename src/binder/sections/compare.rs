//! Comparison table: left column, animated counter, right column.

use serde_json::Value;

use crate::binder::escape::escape_html;
use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::{esc, esc_value};
use crate::content::{display, get_str, items};

/// Initial value of `#counter`; the page animation counts on from here.
pub const COUNTER_START: u32 = 28;

/// Renders only when both `left` and `right` columns are objects.
pub fn compare(ctx: &RenderContext<'_>) -> Option<Write> {
    let left = ctx.value.get("left").filter(|c| c.is_object())?;
    let right = ctx.value.get("right").filter(|c| c.is_object())?;

    let counter_text = ctx
        .document
        .resolve("compare.counterText")
        .map(display)
        .unwrap_or_default();

    Some(Write::Html(format!(
        concat!(
            "{}",
            r#"<div class="compare__counter-wrap">"#,
            r#"<div class="compare__counter"><span id="counter">{}</span><span>%</span></div>"#,
            r#"<span class="compare__counter-text">{}</span>"#,
            "</div>",
            "{}"
        ),
        render_column(left, "left"),
        COUNTER_START,
        escape_html(&counter_text),
        render_column(right, "right"),
    )))
}

fn render_column(column: &Value, side: &str) -> String {
    let list_type = escape_html(get_str(column, "type").unwrap_or_default());
    let rows: String = column
        .get("items")
        .map(items)
        .unwrap_or_default()
        .iter()
        .map(|item| {
            format!(
                r#"<li class="compare__item"><span class="compare__text">{}</span></li>"#,
                esc_value(item)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<div class="compare__column compare__column--{}">"#,
            r#"<h3 class="compare__column-title">{}</h3>"#,
            r#"<ul class="compare__list compare__list--{}">{}</ul>"#,
            "</div>"
        ),
        side,
        esc(column, "title"),
        list_type,
        rows
    )
}
