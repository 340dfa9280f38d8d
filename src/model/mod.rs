//! Data model: the local `Post`/`Content` shapes the site renders, and the
//! Notion wire records they are built from.

pub mod blocks;
pub mod common;
mod content;
mod post;
pub mod properties;
mod row;

pub use blocks::{BlockRecord, CodePayload, TextPayload};
pub use common::{RichTextRun, SelectOption};
pub use content::Content;
pub use post::Post;
pub use properties::{PropertyMap, PropertyValue};
pub use row::RowRecord;
