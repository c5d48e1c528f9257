//! Course catalog: loading the course list and describing how it renders
//!
//! Loading produces a [`CatalogState`]; [`view::CatalogView`] turns that
//! state into cards or a notice; [`formats`] renders a view as a standalone
//! HTML or Markdown page.

pub mod formats;
pub mod view;

use crate::core::models::Course;
use crate::core::resource::{FetchError, ResourceLoader};
use crate::{error, info};
use thiserror::Error;

pub use formats::{CatalogFormat, CatalogRenderer, HtmlCatalogRenderer, MarkdownCatalogRenderer};
pub use view::{CatalogView, CourseCard, Notice, NoticeKind};

/// Relative path of the course list, as seen from the course listing page
pub const COURSES_RESOURCE: &str = "../assets/data/courses.json";

/// Why the course list could not be shown
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The resource could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The resource is not a JSON array of courses
    #[error("course list is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of loading the course list
#[derive(Debug)]
pub enum CatalogState {
    /// At least one course was listed
    Loaded(Vec<Course>),
    /// The list parsed but holds no courses
    Empty,
    /// Fetching or parsing failed
    Failed(CatalogError),
}

impl CatalogState {
    /// Courses to show; empty unless loaded
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        match self {
            Self::Loaded(courses) => courses,
            Self::Empty | Self::Failed(_) => &[],
        }
    }

    /// Whether loading failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Parse a course list body
///
/// # Errors
/// Returns an error unless `body` is a JSON array of course objects
pub fn parse_courses(body: &str) -> Result<Vec<Course>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch and parse the course list at `path`
#[must_use]
pub fn load_catalog(loader: &dyn ResourceLoader, path: &str) -> CatalogState {
    let result = loader
        .fetch(path)
        .map_err(CatalogError::from)
        .and_then(|body| parse_courses(&body));
    match result {
        Ok(courses) if courses.is_empty() => {
            info!("course list at {path} is empty");
            CatalogState::Empty
        }
        Ok(courses) => {
            info!("loaded {} course(s) from {path}", courses.len());
            CatalogState::Loaded(courses)
        }
        Err(err) => {
            error!("failed to load courses from {path}: {err}");
            CatalogState::Failed(err)
        }
    }
}
