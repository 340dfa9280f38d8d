//! The local content model: what a post body is made of once normalized.

use serde::{Deserialize, Serialize};

/// One unit of post content.
///
/// Serialized with its tag in a `type` field, e.g.
/// `{"type": "code", "text": "...", "language": "rust"}`. Only `Code` carries a
/// language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "paragraph")]
    Paragraph { text: Option<String> },
    #[serde(rename = "quote")]
    Quote { text: Option<String> },
    #[serde(rename = "heading_2")]
    Heading2 { text: Option<String> },
    #[serde(rename = "heading_3")]
    Heading3 { text: Option<String> },
    #[serde(rename = "code")]
    Code {
        text: Option<String>,
        language: Option<String>,
    },
}

impl Content {
    pub fn tag(&self) -> &'static str {
        match self {
            Content::Paragraph { .. } => "paragraph",
            Content::Quote { .. } => "quote",
            Content::Heading2 { .. } => "heading_2",
            Content::Heading3 { .. } => "heading_3",
            Content::Code { .. } => "code",
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Paragraph { text }
            | Content::Quote { text }
            | Content::Heading2 { text }
            | Content::Heading3 { text }
            | Content::Code { text, .. } => text.as_deref(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Content::Code { language, .. } => language.as_deref(),
            _ => None,
        }
    }
}
