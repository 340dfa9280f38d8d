//! Block records as returned by `GET blocks/{id}/children`.
//!
//! Only the five block kinds the blog renders carry a payload. Everything
//! else collapses into [`BlockRecord::Unsupported`] so that one exotic block
//! never fails a whole page of children.

use super::common::RichTextRun;
use serde::Deserialize;
use serde_json::Value;

/// Payload shared by text-like blocks (`paragraph`, `quote`, headings).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextRun>,
}

impl TextPayload {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            rich_text: vec![RichTextRun::plain(text)],
        }
    }
}

/// Payload of a `code` block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CodePayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextRun>,
    #[serde(default)]
    pub language: Option<String>,
}

/// One child block of a post, discriminated by its `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum BlockRecord {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: TextPayload },
    #[serde(rename = "quote")]
    Quote { quote: TextPayload },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: TextPayload },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: TextPayload },
    #[serde(rename = "code")]
    Code { code: CodePayload },
    #[serde(other)]
    Unsupported,
}

impl BlockRecord {
    /// Parses one element of a `results` array.
    ///
    /// A recognized tag with a payload of the wrong shape is treated the same
    /// as an unrecognized tag.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(block) => block,
            Err(e) => {
                log::debug!("Treating malformed block as unsupported: {}", e);
                Self::Unsupported
            }
        }
    }

    /// Get block type name
    pub fn block_type(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Quote { .. } => "quote",
            Self::Heading2 { .. } => "heading_2",
            Self::Heading3 { .. } => "heading_3",
            Self::Code { .. } => "code",
            Self::Unsupported => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_recognized_blocks() {
        let block = BlockRecord::from_value(json!({
            "object": "block",
            "id": "b1",
            "type": "heading_2",
            "has_children": false,
            "heading_2": {
                "rich_text": [{"type": "text", "plain_text": "Intro"}],
                "is_toggleable": false,
                "color": "default"
            }
        }));
        assert_eq!(
            block,
            BlockRecord::Heading2 {
                heading_2: TextPayload::plain("Intro")
            }
        );
    }

    #[test]
    fn parses_code_language() {
        let block = BlockRecord::from_value(json!({
            "type": "code",
            "code": {"rich_text": [{"plain_text": "fn main() {}"}], "language": "rust"}
        }));
        match block {
            BlockRecord::Code { code } => assert_eq!(code.language.as_deref(), Some("rust")),
            other => panic!("expected code block, got {:?}", other),
        }
    }

    #[test]
    fn unknown_and_malformed_blocks_are_unsupported() {
        let image = BlockRecord::from_value(json!({"type": "image", "image": {}}));
        assert_eq!(image, BlockRecord::Unsupported);

        let broken = BlockRecord::from_value(json!({"type": "paragraph", "paragraph": 42}));
        assert_eq!(broken, BlockRecord::Unsupported);

        let untagged = BlockRecord::from_value(json!({"id": "b2"}));
        assert_eq!(untagged, BlockRecord::Unsupported);
    }

    #[test]
    fn missing_rich_text_defaults_to_empty() {
        let block = BlockRecord::from_value(json!({"type": "quote", "quote": {}}));
        assert_eq!(
            block,
            BlockRecord::Quote {
                quote: TextPayload::default()
            }
        );
    }
}
