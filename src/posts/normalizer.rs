//! Content normalization: block records in, `Content` out.

use crate::model::common::first_plain_text;
use crate::model::{BlockRecord, Content};

/// Maps one block to its content, or `None` for block kinds the blog does not render.
///
/// Text is the plain text of the first rich-text run; a block with no runs
/// yields `text: None`.
pub fn normalize_block(block: &BlockRecord) -> Option<Content> {
    match block {
        BlockRecord::Paragraph { paragraph } => Some(Content::Paragraph {
            text: first_plain_text(&paragraph.rich_text),
        }),
        BlockRecord::Quote { quote } => Some(Content::Quote {
            text: first_plain_text(&quote.rich_text),
        }),
        BlockRecord::Heading2 { heading_2 } => Some(Content::Heading2 {
            text: first_plain_text(&heading_2.rich_text),
        }),
        BlockRecord::Heading3 { heading_3 } => Some(Content::Heading3 {
            text: first_plain_text(&heading_3.rich_text),
        }),
        BlockRecord::Code { code } => Some(Content::Code {
            text: first_plain_text(&code.rich_text),
            language: code.language.clone(),
        }),
        BlockRecord::Unsupported => None,
    }
}

/// Normalizes blocks in document order, dropping unsupported ones.
pub fn normalize_blocks(blocks: &[BlockRecord]) -> Vec<Content> {
    blocks.iter().filter_map(normalize_block).collect()
}
