//! Static resource loading (the single fetch the catalog page makes)

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Why a resource could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    /// Nothing is served at the path
    #[error("resource not found: {0}")]
    NotFound(String),
    /// The resource exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Requested path
        path: String,
        /// Underlying error
        source: io::Error,
    },
}

/// Serves page resources by relative path
pub trait ResourceLoader {
    /// Fetch the body of the resource at `path`
    ///
    /// # Errors
    /// Returns a [`FetchError`] when the resource is missing or unreadable.
    fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for &L {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch(path)
    }
}

/// Resolves paths against the directory of the page being shown
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    page_dir: PathBuf,
}

impl FsResourceLoader {
    /// Serve resources relative to `page_dir`
    #[must_use]
    pub fn new(page_dir: impl Into<PathBuf>) -> Self {
        Self {
            page_dir: page_dir.into(),
        }
    }

    /// Absolute or page-relative path with `.` and `..` folded away
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let joined = self.page_dir.join(path);
        let mut resolved = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !resolved.pop() {
                        resolved.push("..");
                    }
                }
                other => resolved.push(other.as_os_str()),
            }
        }
        resolved
    }
}

impl ResourceLoader for FsResourceLoader {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let resolved = self.resolve(path);
        read_file(&resolved, path)
    }
}

fn read_file(resolved: &Path, requested: &str) -> Result<String, FetchError> {
    fs::read_to_string(resolved).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FetchError::NotFound(requested.to_string())
        } else {
            FetchError::Io {
                path: requested.to_string(),
                source,
            }
        }
    })
}

/// In-memory resources keyed by the exact requested path
#[derive(Debug, Clone, Default)]
pub struct StaticResourceLoader {
    bodies: HashMap<String, String>,
}

impl StaticResourceLoader {
    /// Create a loader serving nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `path`
    #[must_use]
    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.bodies.insert(path.to_string(), body.to_string());
        self
    }
}

impl ResourceLoader for StaticResourceLoader {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}
