// src/api/query.rs
//! Database query bodies for `POST databases/{id}/query`.
//!
//! The types serialize directly into the JSON shape Notion expects:
//!
//! ```json
//! {
//!   "filter": { "and": [ { "property": "published", "checkbox": { "equals": true } } ] },
//!   "sorts": [ { "timestamp": "created_time", "direction": "descending" } ],
//!   "page_size": 100
//! }
//! ```

use crate::constants::{NOTION_API_PAGE_SIZE, PUBLISHED_PROPERTY, SLUG_PROPERTY};
use serde::Serialize;
use std::fmt;

/// A filter expression: either a compound of filters or a single property test.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Filter {
    Compound(CompoundFilter),
    Property(PropertyFilter),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundFilter {
    And(Vec<Filter>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyFilter {
    pub property: String,
    #[serde(flatten)]
    pub condition: PropertyCondition,
}

/// The predicate applied to a property, keyed by the property's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCondition {
    Checkbox { equals: bool },
    MultiSelect { contains: String },
}

impl Filter {
    pub fn checkbox_equals(property: &str, equals: bool) -> Self {
        Filter::Property(PropertyFilter {
            property: property.to_string(),
            condition: PropertyCondition::Checkbox { equals },
        })
    }

    pub fn multi_select_contains(property: &str, value: &str) -> Self {
        Filter::Property(PropertyFilter {
            property: property.to_string(),
            condition: PropertyCondition::MultiSelect {
                contains: value.to_string(),
            },
        })
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::Compound(CompoundFilter::And(filters))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timestamp {
    CreatedTime,
    LastEditedTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampSort {
    pub timestamp: Timestamp,
    pub direction: SortDirection,
}

/// Whether a lookup by slug also requires the post to be published.
///
/// `AnyStatus` lets an unpublished post be reached by its direct URL, which is
/// how the blog has always behaved; `PublishedOnly` closes that door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SlugLookupPolicy {
    /// Any post with the slug, published or not
    #[default]
    #[value(name = "any")]
    AnyStatus,
    /// Only published posts
    #[value(name = "published")]
    PublishedOnly,
}

impl fmt::Display for SlugLookupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnyStatus => write!(f, "any"),
            Self::PublishedOnly => write!(f, "published"),
        }
    }
}

/// The body of a database query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<TimestampSort>,
    pub page_size: u32,
}

impl DatabaseQuery {
    /// Published posts, newest first.
    pub fn published_newest_first() -> Self {
        Self {
            filter: Some(Filter::and(vec![Filter::checkbox_equals(
                PUBLISHED_PROPERTY,
                true,
            )])),
            sorts: vec![TimestampSort {
                timestamp: Timestamp::CreatedTime,
                direction: SortDirection::Descending,
            }],
            page_size: NOTION_API_PAGE_SIZE,
        }
    }

    /// Rows whose slug options contain `slug`. No ordering is requested.
    pub fn by_slug(slug: &str, policy: SlugLookupPolicy) -> Self {
        let slug_filter = Filter::multi_select_contains(SLUG_PROPERTY, slug);
        let filter = match policy {
            SlugLookupPolicy::AnyStatus => slug_filter,
            SlugLookupPolicy::PublishedOnly => Filter::and(vec![
                slug_filter,
                Filter::checkbox_equals(PUBLISHED_PROPERTY, true),
            ]),
        };
        Self {
            filter: Some(filter),
            sorts: Vec::new(),
            page_size: NOTION_API_PAGE_SIZE,
        }
    }

    /// The slug this query looks up, if it is a slug lookup.
    pub fn slug(&self) -> Option<&str> {
        fn find(filter: &Filter) -> Option<&str> {
            match filter {
                Filter::Property(PropertyFilter {
                    condition: PropertyCondition::MultiSelect { contains },
                    ..
                }) => Some(contains.as_str()),
                Filter::Property(_) => None,
                Filter::Compound(CompoundFilter::And(filters)) => filters.iter().find_map(find),
            }
        }
        self.filter.as_ref().and_then(find)
    }

    /// Whether the query only admits published rows.
    pub fn requires_published(&self) -> bool {
        fn find(filter: &Filter) -> bool {
            match filter {
                Filter::Property(PropertyFilter {
                    property,
                    condition: PropertyCondition::Checkbox { equals: true },
                }) => property == PUBLISHED_PROPERTY,
                Filter::Property(_) => false,
                Filter::Compound(CompoundFilter::And(filters)) => filters.iter().any(find),
            }
        }
        self.filter.as_ref().is_some_and(find)
    }
}
