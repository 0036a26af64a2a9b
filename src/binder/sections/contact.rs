//! Contact form: greeting, name and social inputs, input-type buttons, submit.

use serde_json::Value;

use crate::binder::escape::escape_html;
use crate::binder::rules::{RenderContext, Write};
use crate::binder::sections::{esc, esc_value};
use crate::content::{field, items};

/// Class carried by the selected input-type button.
pub const ACTIVE_BUTTON_CLASS: &str = "btn--active";

pub fn contact(ctx: &RenderContext<'_>) -> Option<Write> {
    let contact = ctx.value;
    if !contact.is_object() {
        return None;
    }

    let greeting: String = contact
        .get("greeting")
        .map(items)
        .unwrap_or_default()
        .iter()
        .map(|g| format!(r#"<span class="contact__text">{}</span>"#, esc_value(g)))
        .collect();

    let buttons: String = contact
        .get("buttons")
        .map(items)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, b)| render_button(i, b))
        .collect();

    Some(Write::Html(format!(
        concat!(
            r#"<div class="contact__row">{}</div>"#,
            r#"<div class="contact__row"><span class="contact__text">{}</span>"#,
            r#"<div class="contact__input-wrap"><input type="text" name="name" class="contact__input" placeholder="{}" required><span class="contact__input-border"></span></div>"#,
            "</div>",
            r#"<div class="contact__row"><span class="contact__text">{}</span>"#,
            r#"<div class="contact__input-wrap"><input type="text" name="social" class="contact__input contact__input--social" placeholder="{}" required><span class="contact__input-border"></span></div>"#,
            "</div>",
            r#"<div class="contact__row"><div class="contact__btns">{}</div></div>"#,
            r#"<button type="submit" class="btn contact__send btn--white">{}</button>"#
        ),
        greeting,
        esc(contact, "nameLabel"),
        esc(contact, "namePlaceholder"),
        esc(contact, "socialLabel"),
        esc(contact, "socialPlaceholder"),
        buttons,
        esc(contact, "submitText"),
    )))
}

fn render_button(index: usize, button: &Value) -> String {
    let text = field(button, "text");
    let mut class = format!("btn contact__btn contact__btn--{}", escape_html(&text.to_lowercase()));
    if index == 0 {
        class.push(' ');
        class.push_str(ACTIVE_BUTTON_CLASS);
    }
    format!(
        r#"<button type="button" class="{}" data-input-type="{}" data-placeholder="{}">{}</button>"#,
        class,
        esc(button, "type"),
        esc(button, "placeholder"),
        escape_html(&text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDocument;
    use serde_json::json;

    #[test]
    fn test_contact_form() {
        let doc = ContentDocument::new(json!({}));
        let value = json!({
            "greeting": ["Hello,", "my name is"],
            "nameLabel": "Name",
            "namePlaceholder": "Your name",
            "socialLabel": "Reach me at",
            "socialPlaceholder": "@telegram",
            "buttons": [
                {"text": "Telegram", "type": "text", "placeholder": "@telegram"},
                {"text": "Phone", "type": "tel", "placeholder": "+82 10"}
            ],
            "submitText": "Send"
        });
        let ctx = RenderContext { value: &value, document: &doc, href_prefix: None };
        let Some(Write::Html(html)) = contact(&ctx) else {
            panic!("expected html");
        };

        assert!(html.contains(r#"<span class="contact__text">Hello,</span><span class="contact__text">my name is</span>"#));
        assert!(html.contains(r#"placeholder="Your name""#));
        assert!(html.contains(r#"class="contact__input contact__input--social" placeholder="@telegram""#));
        assert!(html.contains(
            r#"<button type="button" class="btn contact__btn contact__btn--telegram btn--active" data-input-type="text" data-placeholder="@telegram">Telegram</button>"#
        ));
        assert!(html.contains(
            r#"<button type="button" class="btn contact__btn contact__btn--phone" data-input-type="tel" data-placeholder="+82 10">Phone</button>"#
        ));
        assert!(html.ends_with(r#"<button type="submit" class="btn contact__send btn--white">Send</button>"#));
    }

    #[test]
    fn test_contact_without_optional_lists() {
        let doc = ContentDocument::new(json!({}));
        let value = json!({"submitText": "Go"});
        let ctx = RenderContext { value: &value, document: &doc, href_prefix: None };
        let Some(Write::Html(html)) = contact(&ctx) else {
            panic!("expected html");
        };
        assert!(html.starts_with(r#"<div class="contact__row"></div>"#));
        assert!(html.contains(r#"<div class="contact__btns"></div>"#));
    }
}
