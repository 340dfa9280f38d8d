//! Page controllers: decide what each page shows by calling the repository.
//!
//! Controllers never render; they hand back data for the views.

use crate::error::AppError;
use crate::model::Post;
use crate::posts::PostRepository;

/// Parameters captured from the detail route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteParams {
    pub slug: String,
}

impl RouteParams {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

/// Result of a controller that may have nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> PageOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, PageOutcome::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            PageOutcome::Found(value) => Some(value),
            PageOutcome::NotFound => None,
        }
    }
}

/// The list page: published posts, newest first.
pub async fn list_page(repository: &PostRepository) -> Result<Vec<Post>, AppError> {
    repository.list_posts(None).await
}

/// The detail page for the post behind `params.slug`.
///
/// Missing params short-circuit to `NotFound` without touching the API.
/// When several rows share the slug the first one Notion returned wins.
pub async fn detail_page(
    repository: &PostRepository,
    params: Option<&RouteParams>,
) -> Result<PageOutcome<Post>, AppError> {
    let Some(params) = params else {
        log::debug!("Detail page requested without a slug");
        return Ok(PageOutcome::NotFound);
    };

    let matches = repository.list_posts(Some(&params.slug)).await?;
    if matches.len() > 1 {
        log::warn!(
            "{} posts share slug '{}'; showing {}",
            matches.len(),
            params.slug,
            matches[0].id
        );
    }

    let Some(post) = matches.into_iter().next() else {
        log::info!("No post with slug '{}'", params.slug);
        return Ok(PageOutcome::NotFound);
    };

    let contents = repository.fetch_post_contents(&post).await?;
    Ok(PageOutcome::Found(post.with_contents(contents)))
}

/// Every slug the detail route can be built for, in list order.
///
/// Posts without a slug are left out.
pub async fn static_paths(repository: &PostRepository) -> Result<Vec<RouteParams>, AppError> {
    let posts = repository.list_posts(None).await?;
    Ok(post_paths(&posts))
}

/// The detail-route params of an already listed set of posts.
pub fn post_paths(posts: &[Post]) -> Vec<RouteParams> {
    posts
        .iter()
        .filter_map(|post| post.slug.as_deref().map(RouteParams::new))
        .collect()
}
