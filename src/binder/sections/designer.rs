//! Designer credit line: `prefix` followed by credit links joined with `&`.

use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::esc;
use crate::content::items;

pub fn designer(ctx: &RenderContext<'_>) -> Option<Write> {
    let designer = ctx.value;
    if !designer.is_object() {
        return None;
    }

    let credits = designer.get("credits").map(items).unwrap_or_default();
    let links = credits
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                esc(c, "href"),
                esc(c, "name")
            )
        })
        .collect::<Vec<_>>()
        .join(" &amp; ");

    Some(Write::Html(format!("{} {}", esc(designer, "prefix"), links)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDocument;
    use serde_json::json;

    #[test]
    fn test_two_credits_joined_with_ampersand() {
        let doc = ContentDocument::new(json!({}));
        let value = json!({
            "prefix": "Designed by",
            "credits": [
                {"name": "Kim", "href": "https://kim.dev"},
                {"name": "Lee", "href": "https://lee.dev"}
            ]
        });
        let ctx = RenderContext { value: &value, document: &doc, href_prefix: None };
        assert_eq!(
            designer(&ctx),
            Some(Write::Html(
                concat!(
                    r#"Designed by <a href="https://kim.dev" target="_blank">Kim</a>"#,
                    r#" &amp; <a href="https://lee.dev" target="_blank">Lee</a>"#
                )
                .to_string()
            ))
        );
    }

    #[test]
    fn test_single_credit_has_no_separator() {
        let doc = ContentDocument::new(json!({}));
        let value = json!({"prefix": "By", "credits": [{"name": "Kim", "href": "#"}]});
        let ctx = RenderContext { value: &value, document: &doc, href_prefix: None };
        let Some(Write::Html(html)) = designer(&ctx) else {
            panic!("expected html");
        };
        assert!(!html.contains("&amp;"));
    }
}
