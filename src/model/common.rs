//! Value types shared by block and property payloads.

use serde::Deserialize;

/// One styled fragment of a rich-text array.
///
/// Only the rendered plain text is kept; annotations, links and mentions are
/// not part of the blog's content model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RichTextRun {
    #[serde(default)]
    pub plain_text: Option<String>,
}

impl RichTextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: Some(text.into()),
        }
    }
}

/// One option of a select or multi-select property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Plain text of the first run, if there is one.
pub fn first_plain_text(runs: &[RichTextRun]) -> Option<String> {
    runs.first().and_then(|run| run.plain_text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_plain_text_takes_only_the_first_run() {
        let runs = vec![RichTextRun::plain("Hello"), RichTextRun::plain(" world")];
        assert_eq!(first_plain_text(&runs), Some("Hello".to_string()));
    }

    #[test]
    fn first_plain_text_of_empty_runs_is_none() {
        assert_eq!(first_plain_text(&[]), None);
        assert_eq!(first_plain_text(&[RichTextRun::default()]), None);
    }
}
