//! Section renderers
//!
//! One module per page section. Each renderer turns the resolved value of its
//! rule into a single `Write`, or `None` when the value has the wrong shape
//! (the element is then left untouched).
//!
//! Every value interpolated into markup goes through `escape_html`.

pub mod about;
pub mod calculator;
pub mod compare;
pub mod contact;
pub mod designer;
pub mod lists;
pub mod metadata;
pub mod mission;
pub mod navigation;
pub mod text;
pub mod works;

use serde_json::Value;

use crate::binder::escape::escape_html;
use crate::binder::rules::Write;
use crate::content::{display, field};

/// Render one fragment per array item, in source order.
///
/// Non-array values yield `None` so the bound element keeps its markup.
pub(crate) fn list_html<F>(value: &Value, render_item: F) -> Option<Write>
where
    F: Fn(usize, &Value) -> String,
{
    let arr = value.as_array()?;
    let html = arr
        .iter()
        .enumerate()
        .map(|(i, item)| render_item(i, item))
        .collect::<String>();
    Some(Write::Html(html))
}

/// Escaped display string of an object field; empty when absent.
pub(crate) fn esc(data: &Value, key: &str) -> String {
    escape_html(&field(data, key))
}

/// Escaped display string of a whole value.
pub(crate) fn esc_value(value: &Value) -> String {
    escape_html(&display(value))
}

/// Whether a field holds something worth rendering.
///
/// Absent, `null`, `false`, `0` and `""` are all empty.
pub(crate) fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
