//! HTML catalog page
//!
//! Rendered with an askama template, so every course field is HTML-escaped.

use crate::core::catalog::view::BUY_LABEL;
use crate::core::catalog::{CatalogRenderer, CatalogView, CourseCard, Notice};
use askama::Template;
use std::error::Error;

/// Title shown in the page head and heading
pub const PAGE_TITLE: &str = "Available Courses";

#[derive(Template)]
#[template(path = "catalog.html")]
struct CatalogPage<'a> {
    title: &'a str,
    notice: Option<&'a Notice>,
    cards: &'a [CourseCard],
    buy_label: &'a str,
}

/// HTML catalog renderer
pub struct HtmlCatalogRenderer;

impl HtmlCatalogRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlCatalogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRenderer for HtmlCatalogRenderer {
    fn render(&self, view: &CatalogView) -> Result<String, Box<dyn Error>> {
        let page = CatalogPage {
            title: PAGE_TITLE,
            notice: view.notice.as_ref(),
            cards: &view.cards,
            buy_label: BUY_LABEL,
        };
        Ok(page.render()?)
    }
}
