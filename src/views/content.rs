//! HTML for individual content blocks.

use crate::model::Content;
use handlebars::{
    html_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
    RenderErrorReason,
};
use serde_json::Value;

/// Renders one content block.
pub fn render_content(content: &Content) -> String {
    match content {
        Content::Heading2 { text } => format!("<h2>{}</h2>", escape(text)),
        Content::Heading3 { text } => format!("<h3>{}</h3>", escape(text)),
        Content::Paragraph { text } => format!("<p>{}</p>", escape(text)),
        Content::Quote { text } => format!("<blockquote>{}</blockquote>", escape(text)),
        Content::Code { text, language } => match language {
            Some(language) => format!(
                "<pre><code class=\"language-{}\" data-language=\"{}\">{}</code></pre>",
                html_escape(language),
                html_escape(language),
                escape(text)
            ),
            None => format!("<pre><code>{}</code></pre>", escape(text)),
        },
    }
}

/// Renders a block from its JSON form, with a visible placeholder for
/// anything that is not a known `Content` shape.
pub fn render_content_value(value: &Value) -> String {
    match serde_json::from_value::<Content>(value.clone()) {
        Ok(content) => render_content(&content),
        Err(_) => {
            let tag = value
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            log::warn!("Rendering placeholder for unsupported content '{}'", tag);
            format!(
                "<div class=\"unsupported-block\">Unsupported content: {}</div>",
                html_escape(tag)
            )
        }
    }
}

/// `{{content_block this}}`
pub fn content_block_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("content_block", 0))?;
    out.write(&render_content_value(param.value()))?;
    Ok(())
}

fn escape(text: &Option<String>) -> String {
    text.as_deref().map(html_escape).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn each_variant_has_its_markup() {
        assert_eq!(
            render_content(&Content::Heading2 { text: some("A") }),
            "<h2>A</h2>"
        );
        assert_eq!(
            render_content(&Content::Heading3 { text: some("B") }),
            "<h3>B</h3>"
        );
        assert_eq!(
            render_content(&Content::Paragraph { text: some("C") }),
            "<p>C</p>"
        );
        assert_eq!(
            render_content(&Content::Quote { text: some("D") }),
            "<blockquote>D</blockquote>"
        );
    }

    #[test]
    fn code_is_annotated_with_language() {
        let html = render_content(&Content::Code {
            text: some("a < b"),
            language: some("rust"),
        });
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\" data-language=\"rust\">a &lt; b</code></pre>"
        );

        let plain = render_content(&Content::Code {
            text: None,
            language: None,
        });
        assert_eq!(plain, "<pre><code></code></pre>");
    }

    #[test]
    fn text_is_escaped_and_null_is_empty() {
        assert_eq!(
            render_content(&Content::Paragraph {
                text: some("<script>")
            }),
            "<p>&lt;script&gt;</p>"
        );
        assert_eq!(render_content(&Content::Quote { text: None }), "<blockquote></blockquote>");
    }

    #[test]
    fn unknown_json_renders_a_placeholder() {
        let html = render_content_value(&json!({"type": "callout", "text": "hi"}));
        assert_eq!(
            html,
            "<div class=\"unsupported-block\">Unsupported content: callout</div>"
        );

        let html = render_content_value(&json!("not an object"));
        assert!(html.contains("Unsupported content: unknown"));
    }

    #[test]
    fn known_json_renders_normally() {
        let html = render_content_value(&json!({"type": "heading_3", "text": "Hi"}));
        assert_eq!(html, "<h3>Hi</h3>");
    }
}
