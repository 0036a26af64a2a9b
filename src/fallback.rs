//! Load-failure notice
//!
//! When the content document cannot be fetched or parsed, the entire page
//! body is replaced by a static notice telling the visitor to open the site
//! through a web server. There is no retry.

use askama::Template;
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};

use crate::error::BindError;

#[derive(Template)]
#[template(
    source = r#"<div style="display:flex;height:100vh;align-items:center;justify-content:center;background:#0c0c0c;color:#fff;text-align:center;padding:2rem;"><div><h1 style="font-size:3rem;margin-bottom:1rem;">콘텐츠 로드 실패</h1><p style="color:#ccc;">{{ location }} 파일을 찾을 수 없습니다.</p><p style="color:#888;margin-top:1rem;">웹 서버를 통해 접속하세요 (localhost)</p></div></div>"#,
    ext = "html"
)]
struct FallbackNotice<'a> {
    location: &'a str,
}

/// The notice markup for a document expected at `location`.
pub fn notice(location: &str) -> Result<String, BindError> {
    Ok(FallbackNotice { location }.render()?)
}

/// Replace the body of `template` with the notice.
///
/// A template without a `<body>` is replaced outright.
pub fn render_fallback(template: &str, location: &str) -> Result<String, BindError> {
    let notice = notice(location)?;
    let mut replaced = false;

    let output = rewrite_str(
        template,
        RewriteStrSettings {
            element_content_handlers: vec![element!("body", |el| {
                el.set_inner_content(&notice, ContentType::Html);
                replaced = true;
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )?;

    if replaced {
        Ok(output)
    } else {
        Ok(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_fully_replaced() {
        let template = r#"<html><head><title>Hive</title></head><body><header data-nav="header.nav">nav</header><main>static</main></body></html>"#;
        let html = render_fallback(template, "config/content.json").unwrap();

        assert!(html.contains("<title>Hive</title>"));
        assert!(html.contains("콘텐츠 로드 실패"));
        assert!(html.contains("config/content.json 파일을 찾을 수 없습니다."));
        assert!(!html.contains("static"));
        assert!(!html.contains("data-nav"));
    }

    #[test]
    fn test_template_without_body() {
        let html = render_fallback("<p>fragment</p>", "content.json").unwrap();
        assert!(html.starts_with("<div style="));
        assert!(!html.contains("fragment"));
    }

    #[test]
    fn test_location_is_escaped() {
        let html = notice("<img src=x>").unwrap();
        assert!(!html.contains("<img"));
    }
}
