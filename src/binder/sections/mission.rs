//! Mission text: rows of styled spans.
//!
//! Each line is either a list of entries or a single entry. An entry is a
//! plain string or `{ "text", "color", "align" }`.

use serde_json::Value;

use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::{esc, esc_value, list_html, truthy};

pub fn mission(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, line| {
        let entries: Vec<&Value> = match line {
            Value::Array(arr) => arr.iter().collect(),
            single => vec![single],
        };
        let spans: String = entries.into_iter().map(render_entry).collect();
        format!(r#"<div class="mission__row">{}</div>"#, spans)
    })
}

fn render_entry(entry: &Value) -> String {
    match entry {
        Value::Object(_) => {
            let mut class = String::from("mission__text");
            for modifier in ["color", "align"] {
                if truthy(entry.get(modifier)) {
                    class.push_str(" mission__text--");
                    class.push_str(&esc(entry, modifier));
                }
            }
            format!(r#"<span class="{}">{}</span>"#, class, esc(entry, "text"))
        }
        other => format!(r#"<span class="mission__text">{}</span>"#, esc_value(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDocument;
    use serde_json::json;

    #[test]
    fn test_mixed_entries() {
        let doc = ContentDocument::new(json!({}));
        let value = json!([
            ["We", {"text": "craft", "color": "accent", "align": "right"}],
            "digital"
        ]);
        let ctx = RenderContext { value: &value, document: &doc, href_prefix: None };
        let Some(Write::Html(html)) = mission(&ctx) else {
            panic!("expected html");
        };
        assert_eq!(
            html,
            concat!(
                r#"<div class="mission__row"><span class="mission__text">We</span>"#,
                r#"<span class="mission__text mission__text--accent mission__text--right">craft</span></div>"#,
                r#"<div class="mission__row"><span class="mission__text">digital</span></div>"#
            )
        );
    }

    #[test]
    fn test_object_without_modifiers() {
        assert_eq!(
            render_entry(&json!({"text": "plain"})),
            r#"<span class="mission__text">plain</span>"#
        );
    }
}
