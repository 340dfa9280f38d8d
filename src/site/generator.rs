//! Static site generation: run every controller, render, and write the result.

use super::controllers::{detail_page, list_page, post_paths, static_paths, PageOutcome};
use super::routes::{Route, RouteTable};
use crate::error::AppError;
use crate::output::{deliver, OutputPlan, OutputReport};
use crate::posts::PostRepository;
use crate::views::SiteRenderer;
use std::path::{Path, PathBuf};

/// Builds the whole site into `output_dir`.
pub struct SiteGenerator {
    repository: PostRepository,
    renderer: SiteRenderer,
    output_dir: PathBuf,
}

impl SiteGenerator {
    pub fn new(
        repository: PostRepository,
        renderer: SiteRenderer,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repository,
            renderer,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The detail pages a build would produce, from a fresh path listing.
    pub async fn route_table(&self) -> Result<RouteTable, AppError> {
        Ok(RouteTable::from_paths(static_paths(&self.repository).await?))
    }

    /// One line per route, for `--list-paths`.
    pub async fn path_table(&self) -> Result<String, AppError> {
        let table = self.route_table().await?;
        let lines: Vec<String> = std::iter::once(&Route::Index)
            .chain(table.iter().map(|(route, _)| route))
            .chain(std::iter::once(&Route::NotFound))
            .map(Route::href)
            .collect();
        Ok(lines.join("\n") + "\n")
    }

    /// Renders every page into an [`OutputPlan`] without writing anything.
    ///
    /// The list page and the detail routes come from the same listing, so
    /// every link on the list page points at a page built for that post.
    pub async fn plan(&self) -> Result<OutputPlan, AppError> {
        let posts = list_page(&self.repository).await?;
        let routes = RouteTable::from_paths(post_paths(&posts));
        log::info!(
            "List page has {} post(s), {} with a detail page",
            posts.len(),
            routes.len()
        );

        let mut plan = OutputPlan::new(self.output_dir.clone())
            .with_page(Route::Index, self.renderer.render_list(&posts, &routes)?);

        for (route, params) in routes.iter() {
            match detail_page(&self.repository, Some(params)).await? {
                PageOutcome::Found(post) => {
                    plan = plan.with_page(route.clone(), self.renderer.render_detail(&post)?);
                }
                PageOutcome::NotFound => {
                    log::warn!("Slug '{}' disappeared since posts were listed", params.slug);
                }
            }
        }

        Ok(plan.with_page(Route::NotFound, self.renderer.render_not_found()?))
    }

    /// Plans and writes the site. Any failed write fails the build.
    pub async fn generate(&self) -> Result<OutputReport, AppError> {
        let report = deliver(self.plan().await?)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failure_messages(),
            });
        }
        Ok(report)
    }
}
