//! Post assembly: one database row plus its normalized contents.

use crate::constants::{SLUG_PROPERTY, TITLE_PROPERTY};
use crate::model::common::first_plain_text;
use crate::model::{Content, Post, PropertyMap, PropertyValue, RowRecord};

/// Builds a post, or `None` if the row has no properties object.
pub fn assemble_post(row: RowRecord, contents: Vec<Content>) -> Option<Post> {
    let Some(properties) = row.properties else {
        log::debug!("Skipping row {} without properties", row.id);
        return None;
    };

    Some(Post {
        title: extract_title(&properties),
        slug: extract_slug(&properties),
        id: row.id,
        created_ts: row.created_time,
        last_edited_ts: row.last_edited_time,
        contents,
    })
}

/// The first title run of the `name` column, if it is a non-empty title.
pub fn extract_title(properties: &PropertyMap) -> Option<String> {
    match properties.get(TITLE_PROPERTY) {
        Some(PropertyValue::Title { title }) => first_plain_text(title),
        Some(other) => {
            log_kind_mismatch(TITLE_PROPERTY, other, "title");
            None
        }
        None => None,
    }
}

/// The first option name of the `slug` column, if it is a non-empty multi-select.
pub fn extract_slug(properties: &PropertyMap) -> Option<String> {
    match properties.get(SLUG_PROPERTY) {
        Some(PropertyValue::MultiSelect { multi_select }) => {
            multi_select.first().and_then(|option| option.name.clone())
        }
        Some(other) => {
            log_kind_mismatch(SLUG_PROPERTY, other, "multi_select");
            None
        }
        None => None,
    }
}

fn log_kind_mismatch(name: &str, value: &PropertyValue, expected: &str) {
    log::debug!(
        "Property '{}' is {}, expected {}; treating it as empty",
        name,
        value.kind(),
        expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RichTextRun, SelectOption};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn properties(pairs: Vec<(&str, PropertyValue)>) -> PropertyMap {
        pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn title_requires_title_kind_and_entries() {
        let ok = properties(vec![(
            "name",
            PropertyValue::Title {
                title: vec![RichTextRun::plain("Hello"), RichTextRun::plain("!")],
            },
        )]);
        assert_eq!(extract_title(&ok), Some("Hello".to_string()));

        let empty = properties(vec![("name", PropertyValue::Title { title: vec![] })]);
        assert_eq!(extract_title(&empty), None);

        let wrong_kind = properties(vec![("name", PropertyValue::Checkbox { checkbox: true })]);
        assert_eq!(extract_title(&wrong_kind), None);

        assert_eq!(extract_title(&PropertyMap::new()), None);
    }

    #[test]
    fn slug_requires_multi_select_kind_and_entries() {
        let ok = properties(vec![(
            "slug",
            PropertyValue::MultiSelect {
                multi_select: vec![SelectOption::named("first"), SelectOption::named("second")],
            },
        )]);
        assert_eq!(extract_slug(&ok), Some("first".to_string()));

        let empty = properties(vec![(
            "slug",
            PropertyValue::MultiSelect {
                multi_select: vec![],
            },
        )]);
        assert_eq!(extract_slug(&empty), None);

        let wrong_kind = properties(vec![("slug", PropertyValue::Unsupported)]);
        assert_eq!(extract_slug(&wrong_kind), None);
    }

    #[test]
    fn row_without_properties_is_skipped() {
        let row = RowRecord::from_value(json!({"id": "row-1"})).unwrap();
        assert_eq!(assemble_post(row, vec![]), None);
    }

    #[test]
    fn assembles_the_reference_row() {
        let row = RowRecord::from_value(json!({
            "id": "row-1",
            "created_time": "2023-01-01T00:00:00Z",
            "properties": {
                "name": {"type": "title", "title": [{"plain_text": "Hello"}]},
                "slug": {"type": "multi_select", "multi_select": [{"name": "hello-world"}]}
            }
        }))
        .unwrap();
        let contents = vec![Content::Paragraph {
            text: Some("Hi there".to_string()),
        }];

        let post = assemble_post(row, contents.clone()).unwrap();
        assert_eq!(post.id.as_str(), "row-1");
        assert_eq!(post.title.as_deref(), Some("Hello"));
        assert_eq!(post.slug.as_deref(), Some("hello-world"));
        assert_eq!(post.created_ts.as_deref(), Some("2023-01-01T00:00:00Z"));
        assert_eq!(post.last_edited_ts, None);
        assert_eq!(post.contents, contents);
    }

    #[test]
    fn empty_properties_still_make_a_post() {
        let row = RowRecord::from_value(json!({"id": "row-2", "properties": {}})).unwrap();
        let post = assemble_post(row, vec![]).unwrap();
        assert_eq!(post.title, None);
        assert_eq!(post.slug, None);
        assert!(post.contents.is_empty());
    }
}
