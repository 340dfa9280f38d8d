// src/views/mod.rs
//! HTML views for the blog.
//!
//! Rendering is pure: a [`SiteRenderer`] turns posts into [`RenderedPage`]s
//! and never talks to Notion or the filesystem. Templates are handlebars and
//! are compiled into the binary.

mod content;
mod format;

pub use content::{render_content, render_content_value};
pub use format::{format_timestamp, validate_date_format};

use crate::error::AppError;
use crate::model::{Content, Post};
use crate::site::RouteTable;
use crate::types::RenderedPage;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

const HEADER_PARTIAL: &str = include_str!("templates/header.hbs");
const FOOTER_PARTIAL: &str = include_str!("templates/footer.hbs");
const POST_PARTIAL: &str = include_str!("templates/post.hbs");
const INDEX_TEMPLATE: &str = include_str!("templates/index.hbs");
const DETAIL_TEMPLATE: &str = include_str!("templates/detail.hbs");
const NOT_FOUND_TEMPLATE: &str = include_str!("templates/not_found.hbs");

pub const DEFAULT_SITE_TITLE: &str = "Blog";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Presentation settings shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub site_title: String,
    /// strftime pattern; check it with [`validate_date_format`] first.
    pub date_format: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// What the `post` partial sees for one post.
#[derive(Debug, Serialize)]
struct PostView<'a> {
    title: &'a str,
    href: Option<String>,
    created: String,
    created_ts: &'a str,
    last_edited: String,
    last_edited_ts: &'a str,
    contents: &'a [Content],
}

/// Renders the list, detail and not-found pages.
pub struct SiteRenderer {
    handlebars: Handlebars<'static>,
    options: ViewOptions,
}

impl SiteRenderer {
    pub fn new(options: ViewOptions) -> Result<Self, AppError> {
        validate_date_format(&options.date_format)?;

        let mut handlebars = Handlebars::new();
        handlebars.register_helper("content_block", Box::new(content::content_block_helper));

        for (name, source) in [
            ("header", HEADER_PARTIAL),
            ("footer", FOOTER_PARTIAL),
            ("post", POST_PARTIAL),
        ] {
            handlebars
                .register_partial(name, source)
                .map_err(|e| template_error(name, e))?;
        }

        for (name, source) in [
            ("index", INDEX_TEMPLATE),
            ("detail", DETAIL_TEMPLATE),
            ("not_found", NOT_FOUND_TEMPLATE),
        ] {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| template_error(name, e))?;
        }

        Ok(Self {
            handlebars,
            options,
        })
    }

    /// The list view: every post in the given order, each linked to its
    /// detail page when `routes` holds a page built for its slug.
    pub fn render_list(
        &self,
        posts: &[Post],
        routes: &RouteTable,
    ) -> Result<RenderedPage, AppError> {
        let views: Vec<PostView> = posts
            .iter()
            .map(|post| {
                let href = post
                    .slug
                    .as_deref()
                    .and_then(|slug| routes.link_for(slug))
                    .map(|route| route.href());
                self.post_view(post, href)
            })
            .collect();

        let data = json!({
            "site_title": self.options.site_title,
            "page_title": null,
            "posts": views,
        });
        self.render("index", &data)
    }

    /// The detail view for a single post.
    pub fn render_detail(&self, post: &Post) -> Result<RenderedPage, AppError> {
        let data = json!({
            "site_title": self.options.site_title,
            "page_title": post.title,
            "post": self.post_view(post, None),
        });
        self.render("detail", &data)
    }

    pub fn render_not_found(&self) -> Result<RenderedPage, AppError> {
        let data = json!({
            "site_title": self.options.site_title,
            "page_title": "Not found",
        });
        self.render("not_found", &data)
    }

    fn post_view<'a>(&self, post: &'a Post, href: Option<String>) -> PostView<'a> {
        let format = self.options.date_format.as_str();
        PostView {
            title: post.title.as_deref().unwrap_or_default(),
            href,
            created: format_timestamp(post.created_ts.as_deref(), format),
            created_ts: post.created_ts.as_deref().unwrap_or_default(),
            last_edited: format_timestamp(post.last_edited_ts.as_deref(), format),
            last_edited_ts: post.last_edited_ts.as_deref().unwrap_or_default(),
            contents: &post.contents,
        }
    }

    fn render(&self, name: &str, data: &serde_json::Value) -> Result<RenderedPage, AppError> {
        self.handlebars
            .render(name, data)
            .map(RenderedPage::new)
            .map_err(|e| template_error(name, e))
    }
}

fn template_error(name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRenderError {
        name: name.to_string(),
        message: err.to_string(),
    }
}
