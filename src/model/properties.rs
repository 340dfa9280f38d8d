//! Database row properties.
//!
//! A property is a `{ "type": <kind>, <kind>: <payload> }` object. The three
//! kinds the blog schema relies on get a typed variant; everything else, and
//! any payload that does not match its declared kind, is `Unsupported`.

use super::common::{RichTextRun, SelectOption};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Properties of one row, keyed by column name, in the order Notion sent them.
pub type PropertyMap = IndexMap<String, PropertyValue>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyValue {
    #[serde(rename = "title")]
    Title { title: Vec<RichTextRun> },
    #[serde(rename = "multi_select")]
    MultiSelect { multi_select: Vec<SelectOption> },
    #[serde(rename = "checkbox")]
    Checkbox { checkbox: bool },
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or(Self::Unsupported)
    }

    /// Kind tag as Notion spells it.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::MultiSelect { .. } => "multi_select",
            Self::Checkbox { .. } => "checkbox",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Builds a property map from a raw `properties` object, one value at a time.
pub fn parse_property_map(map: serde_json::Map<String, Value>) -> PropertyMap {
    map.into_iter()
        .map(|(name, value)| (name, PropertyValue::from_value(value)))
        .collect()
}
