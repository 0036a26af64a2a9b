//! About cards
//!
//! One card per `about.items` entry. Only `title` is always rendered;
//! `subtitle`, `desc`, `tags` and `gradient` appear when present.

use serde_json::Value;

use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::{esc, esc_value, list_html, truthy};
use crate::content::items;

pub fn about_items(ctx: &RenderContext<'_>) -> Option<Write> {
    list_html(ctx.value, |_, item| render_card(item))
}

fn render_card(item: &Value) -> String {
    let mut class = String::from("about__item");
    if truthy(item.get("gradient")) {
        class.push_str(" about__item--");
        class.push_str(&esc(item, "gradient"));
    }

    let mut body = format!(
        r#"<span class="about__item-title">{}</span>"#,
        esc(item, "title")
    );
    if truthy(item.get("subtitle")) {
        body.push_str(&format!(
            r#"<span class="about__item-subtitle">{}</span>"#,
            esc(item, "subtitle")
        ));
    }
    if truthy(item.get("desc")) {
        body.push_str(&format!(
            r#"<span class="about__item-desc">{}</span>"#,
            esc(item, "desc")
        ));
    }
    if let Some(tags) = item.get("tags").filter(|t| t.is_array()) {
        body.push_str(r#"<div class="about__item-tags">"#);
        for tag in items(tags) {
            body.push_str(&format!(
                r#"<span class="about__item-tag">{}</span>"#,
                esc_value(tag)
            ));
        }
        body.push_str("</div>");
    }

    format!(
        r#"<a href="{}" class="{}"><div class="about__item-content">{}</div></a>"#,
        esc(item, "href"),
        class,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_card_has_title_and_gradient_only() {
        let html = render_card(&json!({"title": "Brand", "gradient": "purple", "href": "#b"}));
        assert_eq!(
            html,
            concat!(
                r##"<a href="#b" class="about__item about__item--purple">"##,
                r#"<div class="about__item-content"><span class="about__item-title">Brand</span></div></a>"#
            )
        );
        assert!(!html.contains("about__item-tags"));
        assert!(!html.contains("about__item-subtitle"));
        assert!(!html.contains("about__item-desc"));
    }

    #[test]
    fn test_full_card() {
        let html = render_card(&json!({
            "title": "Awards",
            "subtitle": "2024",
            "desc": "Recognised work",
            "tags": ["Awwwards", "CSSDA"]
        }));
        assert!(html.contains(r#"class="about__item""#));
        assert!(html.contains(r#"<span class="about__item-subtitle">2024</span>"#));
        assert!(html.contains(r#"<span class="about__item-desc">Recognised work</span>"#));
        assert!(html.contains(concat!(
            r#"<div class="about__item-tags"><span class="about__item-tag">Awwwards</span>"#,
            r#"<span class="about__item-tag">CSSDA</span></div>"#
        )));
    }

    #[test]
    fn test_empty_subtitle_is_skipped() {
        let html = render_card(&json!({"title": "Web", "subtitle": ""}));
        assert!(!html.contains("about__item-subtitle"));
    }
}
