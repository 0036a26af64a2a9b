//! Calculator section: title spans, slider cards, and the initial result.

use serde_json::Value;

use crate::binder::escape::escape_html;
use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::{esc, esc_value, list_html};
use crate::calculator::{estimate, format_currency, slider_progress};
use crate::content::{field, get_f64, get_str, items, ContentDocument};

/// Id of the element that shows the yearly estimate.
pub const RESULT_ELEMENT_ID: &str = "result";

pub fn calculator_title(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, t| {
        format!(r#"<span class="mission__text">{}</span>"#, esc_value(t))
    })
}

pub fn calculator_sliders(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, s| render_slider(s))
}

fn render_slider(slider: &Value) -> String {
    let id = field(slider, "id");
    // `slider1` -> `display1`
    let display_id = format!("display{}", id.replacen("slider", "", 1));
    let default = esc(slider, "default");

    let progress = match (
        get_f64(slider, "default"),
        get_f64(slider, "min"),
        get_f64(slider, "max"),
    ) {
        (Some(value), Some(min), Some(max)) => format!(
            r#" style="--slider-progress: {}%""#,
            slider_progress(value, min, max)
        ),
        _ => String::new(),
    };

    format!(
        concat!(
            r#"<div class="calc__card tils-start">"#,
            r#"<div class="calc__card-header">"#,
            r#"<span class="calc__card-title">{}</span>"#,
            r#"<span class="calc__card-value">{}<span id="{}">{}</span>{}</span>"#,
            "</div>",
            r#"<input type="range" id="{}" min="{}" max="{}" value="{}" class="calc__slider"{}>"#,
            "</div>"
        ),
        esc(slider, "title"),
        esc(slider, "prefix"),
        escape_html(&display_id),
        default,
        esc(slider, "suffix"),
        escape_html(&id),
        esc(slider, "min"),
        esc(slider, "max"),
        default,
        progress
    )
}

/// Slider whose value is the hourly rate.
pub const RATE_SLIDER_ID: &str = "slider1";
/// Slider whose value is the monthly hours.
pub const HOURS_SLIDER_ID: &str = "slider2";

/// Formatted yearly estimate from the rate and hours sliders' defaults.
///
/// Sliders are matched by `id`, so their order in the document does not matter.
pub fn result_text(document: &ContentDocument) -> Option<String> {
    let sliders = items(document.resolve("calculator.sliders")?);
    let default_of = |id: &str| {
        sliders
            .iter()
            .find(|s| get_str(s, "id") == Some(id))
            .and_then(|s| get_f64(s, "default"))
    };
    let rate = default_of(RATE_SLIDER_ID)?;
    let hours = default_of(HOURS_SLIDER_ID)?;
    Some(format_currency(estimate(rate, hours)))
}
