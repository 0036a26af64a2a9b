//! Content Binder
//!
//! Projects a loaded content document onto a page template. Every rule in
//! `rules::RULES` is applied exactly once, in table order, as its own rewrite
//! pass, so later rules see the markup earlier rules produced. After the
//! table, the calculator result is filled in from the slider defaults.
//!
//! Elements whose path resolves to the null sentinel are left untouched.

pub mod escape;
pub mod rules;
pub mod sections;

use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::content::ContentDocument;
use crate::error::BindError;
use rules::{BindingKind, BindingRule, RenderContext, Write, HREF_PREFIX_ATTR, RULES};

/// Per-kind counts of what a binding pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindReport {
    /// Elements rewritten, per rule.
    pub touched: FxHashMap<BindingKind, usize>,
    /// Elements matched but left alone (null sentinel or wrong shape).
    pub skipped: FxHashMap<BindingKind, usize>,
    /// Whether `#result` received a calculator estimate.
    pub calculator_result: bool,
}

impl BindReport {
    pub fn touched(&self, kind: BindingKind) -> usize {
        self.touched.get(&kind).copied().unwrap_or(0)
    }

    pub fn skipped(&self, kind: BindingKind) -> usize {
        self.skipped.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_touched(&self) -> usize {
        self.touched.values().sum()
    }
}

/// Output of one binding pass.
#[derive(Debug, Clone)]
pub struct BoundPage {
    pub html: String,
    pub report: BindReport,
}

/// Applies the binding table to page templates.
#[derive(Debug, Clone, Copy)]
pub struct Binder {
    rules: &'static [BindingRule],
}

impl Binder {
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Run every rule once against `template`.
    pub fn bind(&self, template: &str, document: &ContentDocument) -> Result<BoundPage, BindError> {
        let mut html = template.to_string();
        let mut report = BindReport::default();

        for rule in self.rules {
            let (next, touched, skipped) = apply_rule(&html, rule, document)?;
            html = next;
            if touched > 0 {
                report.touched.insert(rule.kind, touched);
            }
            if skipped > 0 {
                tracing::trace!("{:?}: {} element(s) left unchanged", rule.kind, skipped);
                report.skipped.insert(rule.kind, skipped);
            }
        }

        if let Some(result) = sections::calculator::result_text(document) {
            let (next, written) = set_text_by_id(&html, sections::calculator::RESULT_ELEMENT_ID, &result)?;
            html = next;
            report.calculator_result = written;
        }

        tracing::debug!(
            "Binding pass complete: {} element(s) rewritten across {} rule(s)",
            report.total_touched(),
            report.touched.len()
        );

        Ok(BoundPage { html, report })
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

/// One rewrite pass for one rule. Returns the new markup plus touched/skipped counts.
fn apply_rule(
    html: &str,
    rule: &BindingRule,
    document: &ContentDocument,
) -> Result<(String, usize, usize), BindError> {
    let selector = rule.selector();
    let mut touched = 0usize;
    let mut skipped = 0usize;

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(selector.as_str(), |el| {
                let attribute_value = rule.attribute().and_then(|attr| el.get_attribute(attr));
                let value = rule
                    .path_for(attribute_value.as_deref())
                    .and_then(|path| document.resolve(&path));

                let Some(value) = value else {
                    skipped += 1;
                    return Ok(());
                };

                let href_prefix = el.get_attribute(HREF_PREFIX_ATTR);
                let ctx = RenderContext {
                    value,
                    document,
                    href_prefix: href_prefix.as_deref(),
                };

                match (rule.render)(&ctx) {
                    // Void elements (`<input>`, `<img>`, ...) have no content to replace.
                    Some(Write::Text(_) | Write::Html(_)) if !el.can_have_content() => {
                        skipped += 1;
                        return Ok(());
                    }
                    Some(Write::Text(text)) => el.set_inner_content(&text, ContentType::Text),
                    Some(Write::Html(fragment)) => el.set_inner_content(&fragment, ContentType::Html),
                    Some(Write::Attribute { name, value }) => el.set_attribute(name, &value)?,
                    None => {
                        skipped += 1;
                        return Ok(());
                    }
                }
                touched += 1;
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )?;

    Ok((output, touched, skipped))
}

/// Replace the text of the element with `id`. Returns whether it existed.
fn set_text_by_id(html: &str, id: &str, text: &str) -> Result<(String, bool), BindError> {
    let selector = format!("#{}", id);
    let mut found = false;

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(selector.as_str(), |el| {
                el.set_inner_content(text, ContentType::Text);
                found = true;
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )?;

    Ok((output, found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> ContentDocument {
        ContentDocument::new(json!({
            "site": {"title": "Hive Media", "description": "Digital studio"},
            "hero": {"title": "We build", "stack": ["Rust", "Web"]},
            "footer": {"email": "hi@hive.media"}
        }))
    }

    #[test]
    fn test_text_binding() {
        let page = Binder::new()
            .bind(r#"<h1 data-content="hero.title">placeholder</h1>"#, &doc())
            .unwrap();
        assert_eq!(page.html, r#"<h1 data-content="hero.title">We build</h1>"#);
        assert_eq!(page.report.touched(BindingKind::Text), 1);
    }

    #[test]
    fn test_missing_path_leaves_element_unmodified() {
        let template = r#"<p data-content="hero.subtitle">keep me</p>"#;
        let page = Binder::new().bind(template, &doc()).unwrap();
        assert_eq!(page.html, template);
        assert_eq!(page.report.touched(BindingKind::Text), 0);
        assert_eq!(page.report.skipped(BindingKind::Text), 1);
    }

    #[test]
    fn test_href_binding_with_prefix() {
        let page = Binder::new()
            .bind(
                r#"<a data-href="footer.email" data-href-prefix="mailto:">mail</a>"#,
                &doc(),
            )
            .unwrap();
        assert!(page.html.contains(r#"href="mailto:hi@hive.media""#));
    }

    #[test]
    fn test_metadata_binding() {
        let template = concat!(
            r#"<head><title id="site-title">x</title>"#,
            r#"<meta id="site-description" name="description" content=""></head>"#
        );
        let page = Binder::new().bind(template, &doc()).unwrap();
        assert!(page.html.contains(r#"<title id="site-title">Hive Media</title>"#));
        assert!(page.html.contains(r#"content="Digital studio""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = ContentDocument::new(json!({"hero": {"title": "<script>alert(1)</script>"}}));
        let page = Binder::new()
            .bind(r#"<h1 data-content="hero.title"></h1>"#, &doc)
            .unwrap();
        assert!(!page.html.contains("<script>"));
        assert!(page.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_content_write_on_void_element_is_skipped() {
        let template = r#"<input data-content="hero.title"><img data-stack="hero.stack">"#;
        let page = Binder::new().bind(template, &doc()).unwrap();
        assert_eq!(page.html, template);
        assert_eq!(page.report.touched(BindingKind::Text), 0);
        assert_eq!(page.report.skipped(BindingKind::Text), 1);
        assert_eq!(page.report.touched(BindingKind::HeroStack), 0);
        assert_eq!(page.report.skipped(BindingKind::HeroStack), 1);
    }

    #[test]
    fn test_attribute_write_on_void_element_is_applied() {
        let template = r#"<meta id="site-description" name="description" content="">"#;
        let page = Binder::new().bind(template, &doc()).unwrap();
        assert!(page.html.contains(r#"content="Digital studio""#));
        assert_eq!(page.report.touched(BindingKind::SiteDescription), 1);
    }

    #[test]
    fn test_many_elements_same_rule() {
        let template = r#"<div data-stack="hero.stack"></div><div data-stack="hero.stack"></div>"#;
        let page = Binder::new().bind(template, &doc()).unwrap();
        assert_eq!(page.html.matches("<span>Rust</span>").count(), 2);
        assert_eq!(page.report.touched(BindingKind::HeroStack), 2);
    }

    #[test]
    fn test_unknown_binding_value_is_ignored() {
        let template = r#"<div data-stack="footer.stack">static</div>"#;
        let page = Binder::new().bind(template, &doc()).unwrap();
        assert_eq!(page.html, template);
        assert_eq!(page.report.total_touched(), 0);
    }

    #[test]
    fn test_calculator_result_written() {
        let doc = ContentDocument::new(json!({
            "calculator": {"sliders": [{"id": "slider1", "default": 25}, {"id": "slider2", "default": 100}]}
        }));
        let page = Binder::new()
            .bind(r#"<span id="result">$0</span>"#, &doc)
            .unwrap();
        assert_eq!(page.html, r#"<span id="result">$6,900</span>"#);
        assert!(page.report.calculator_result);
    }

    #[test]
    fn test_calculator_result_with_sliders_out_of_order() {
        let doc = ContentDocument::new(json!({
            "calculator": {"sliders": [{"id": "slider2", "default": 100}, {"id": "slider1", "default": 25}]}
        }));
        let page = Binder::new()
            .bind(r#"<span id="result">$0</span>"#, &doc)
            .unwrap();
        assert_eq!(page.html, r#"<span id="result">$6,900</span>"#);
    }
}
