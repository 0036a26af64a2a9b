//! Generic `data-content` text and `data-href` attribute bindings.

use crate::binder::rules::{RenderContext, Write};
use crate::content::display;

/// Element text = display string of the resolved value.
pub fn text(ctx: &RenderContext<'_>) -> Option<Write> {
    Some(Write::Text(display(ctx.value)))
}

/// `href` = optional `data-href-prefix` + resolved value (e.g. `mailto:` + address).
pub fn href(ctx: &RenderContext<'_>) -> Option<Write> {
    let prefix = ctx.href_prefix.unwrap_or("");
    Some(Write::Attribute {
        name: "href",
        value: format!("{}{}", prefix, display(ctx.value)),
    })
}
