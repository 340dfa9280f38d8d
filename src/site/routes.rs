//! The site's route table and where each route lands on disk.

use super::controllers::RouteParams;
use crate::output::{page_path, sanitize_slug};
use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};

pub const POST_ROUTE_PREFIX: &str = "post";
pub const NOT_FOUND_FILE: &str = "404.html";

/// A page the generator can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    /// Holds the sanitized slug, which is always a single path segment.
    Post { slug: String },
    NotFound,
}

impl Route {
    /// The detail route for `slug`, or `None` if the slug has no usable characters.
    pub fn post(slug: &str) -> Option<Self> {
        sanitize_slug(slug).map(|slug| Route::Post { slug })
    }

    pub fn href(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::Post { slug } => format!("/{}/{}/", POST_ROUTE_PREFIX, slug),
            Route::NotFound => format!("/{}", NOT_FOUND_FILE),
        }
    }

    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        match self {
            Route::Index => page_path(base_dir, &[]),
            Route::Post { slug } => page_path(base_dir, &[POST_ROUTE_PREFIX, slug]),
            Route::NotFound => base_dir.join(NOT_FOUND_FILE),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// The detail pages a build produces, each owned by the slug it was built for.
///
/// Slugs that sanitize to nothing get no page. Slugs that collide after
/// sanitizing keep the first entry; later posts with the colliding slug are
/// left unlinked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: IndexMap<Route, RouteParams>,
}

impl RouteTable {
    pub fn from_paths(paths: impl IntoIterator<Item = RouteParams>) -> Self {
        let mut routes: IndexMap<Route, RouteParams> = IndexMap::new();
        for params in paths {
            let Some(route) = Route::post(&params.slug) else {
                log::warn!("Skipping slug '{}': nothing usable in a path", params.slug);
                continue;
            };
            if let Some(existing) = routes.get(&route) {
                if existing.slug != params.slug {
                    log::warn!(
                        "Slug '{}' maps to {} already taken by '{}'; skipping",
                        params.slug,
                        route,
                        existing.slug
                    );
                }
                continue;
            }
            routes.insert(route, params);
        }
        Self { routes }
    }

    /// The route built for exactly this slug, if any.
    pub fn link_for(&self, slug: &str) -> Option<&Route> {
        let route = Route::post(slug)?;
        let (route, params) = self.routes.get_key_value(&route)?;
        (params.slug == slug).then_some(route)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Route, &RouteParams)> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
