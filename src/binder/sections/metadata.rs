//! Page metadata: document title and meta description.

use crate::binder::rules::{RenderContext, Write};
use crate::content::display;

pub fn site_title(ctx: &RenderContext<'_>) -> Option<Write> {
    Some(Write::Text(display(ctx.value)))
}

pub fn site_description(ctx: &RenderContext<'_>) -> Option<Write> {
    Some(Write::Attribute {
        name: "content",
        value: display(ctx.value),
    })
}
