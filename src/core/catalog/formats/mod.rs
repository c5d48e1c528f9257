//! Catalog page formats
//!
//! Renders a [`CatalogView`] as a standalone document: HTML for the site,
//! Markdown for READMEs and quick review.

pub mod html;
pub mod markdown;

pub use html::HtmlCatalogRenderer;
pub use markdown::MarkdownCatalogRenderer;

use crate::core::catalog::CatalogView;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported catalog page formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// Self-contained HTML page
    Html,
    /// Markdown table
    Markdown,
}

impl CatalogFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    /// Renderer producing this format
    #[must_use]
    pub fn renderer(&self) -> Box<dyn CatalogRenderer> {
        match self {
            Self::Html => Box::new(HtmlCatalogRenderer::new()),
            Self::Markdown => Box::new(MarkdownCatalogRenderer::new()),
        }
    }
}

impl FromStr for CatalogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown catalog format: {s}")),
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Trait for catalog page renderers
pub trait CatalogRenderer {
    /// Render the page content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, view: &CatalogView) -> Result<String, Box<dyn Error>>;

    /// Render the page and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, view: &CatalogView, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(view)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }
}
