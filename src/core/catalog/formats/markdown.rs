//! Markdown catalog page

use crate::core::catalog::{CatalogRenderer, CatalogView};
use std::error::Error;
use std::fmt::Write;

/// Markdown catalog renderer
pub struct MarkdownCatalogRenderer;

impl MarkdownCatalogRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape characters that would break a table cell
    fn cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownCatalogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRenderer for MarkdownCatalogRenderer {
    fn render(&self, view: &CatalogView) -> Result<String, Box<dyn Error>> {
        let mut out = String::from("# Available Courses\n\n");

        if let Some(notice) = &view.notice {
            writeln!(out, "> {}", notice.text)?;
        }
        if view.cards.is_empty() {
            return Ok(out);
        }

        writeln!(out, "| Course | Title | Instructor | Price | Checkout |")?;
        writeln!(out, "|--------|-------|------------|-------|----------|")?;
        for card in &view.cards {
            writeln!(
                out,
                "| {} | {} | {} | {} | [Buy Now]({}) |",
                Self::cell(&card.course_id),
                Self::cell(&card.title),
                Self::cell(card.instructor.trim_start_matches("Instructor: ")),
                Self::cell(card.price_line.trim_start_matches("Price: ")),
                card.checkout_url
            )?;
        }
        Ok(out)
    }
}
