//! Catalog command handlers
//!
//! Renders the course list as an HTML or Markdown page and starts checkout
//! for a single course.

use edu_portal::config::Config;
use edu_portal::core::catalog::{CatalogFormat, CatalogState, CatalogView};
use edu_portal::core::pages::catalog::catalog_page_document;
use edu_portal::core::pages::CatalogController;
use edu_portal::core::payment::MockCheckout;
use edu_portal::core::resource::FsResourceLoader;
use edu_portal::core::storage::MemoryStore;
use edu_portal::core::window::Window;
use edu_portal::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File stem of rendered catalog pages
const PAGE_STEM: &str = "courses";

/// Run the catalog command.
///
/// # Arguments
/// * `courses` - Optional course list file; defaults to the configured resource
/// * `format_str` - Page format (html, markdown)
/// * `output` - Optional output path; defaults to the configured pages directory
/// * `config` - Configuration holding the site layout
pub fn run(courses: Option<&Path>, format_str: &str, output: Option<&Path>, config: &Config) -> bool {
    match generate_catalog(courses, format_str, output, config) {
        Ok((path, loaded)) => {
            println!("✓ Catalog generated: {}", path.display());
            loaded
        }
        Err(err) => {
            error!("Catalog generation failed: {err}");
            eprintln!("{err}");
            false
        }
    }
}

fn catalog_controller(
    courses: Option<&Path>,
    config: &Config,
) -> CatalogController<FsResourceLoader, MockCheckout> {
    let payment = MockCheckout::new(&config.site.checkout_path);
    match courses {
        Some(file) => CatalogController::with_resource(
            FsResourceLoader::new("."),
            payment,
            &file.to_string_lossy(),
        ),
        None => CatalogController::with_resource(
            FsResourceLoader::new(&config.site.page_dir),
            payment,
            &config.site.courses_resource,
        ),
    }
}

/// Load the list, render it and write the page
///
/// A list that fails to load still produces a page showing the failure.
///
/// # Returns
/// The written path and whether the list loaded
fn generate_catalog(
    courses: Option<&Path>,
    format_str: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(PathBuf, bool), String> {
    let format = CatalogFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let controller = catalog_controller(courses, config);

    let mut window = Window::new(catalog_page_document(), Box::new(MemoryStore::new()));
    let state = controller.on_ready(&mut window);
    if let CatalogState::Failed(err) = &state {
        eprintln!("✗ Failed to load courses: {err}");
    }

    let view = CatalogView::from_state(&state, controller.payment());
    let output_path = output.map_or_else(
        || Path::new(&config.paths.pages_dir).join(format!("{PAGE_STEM}.{}", format.extension())),
        Path::to_path_buf,
    );

    format
        .renderer()
        .generate(&view, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;
    info!("{format} catalog written to {}", output_path.display());

    Ok((output_path, !state.is_failed()))
}

/// Start checkout for one course and print the redirect
pub fn buy(course_id: &str, price: f64, config: &Config) -> bool {
    if !price.is_finite() || price < 0.0 {
        eprintln!("✗ Invalid price: {price}");
        return false;
    }
    let controller = catalog_controller(None, config);
    let mut window = Window::new(catalog_page_document(), Box::new(MemoryStore::new()));
    let url = controller.buy(&mut window, course_id, price);
    for alert in window.alerts() {
        println!("{alert}");
    }
    println!("→ {url}");
    true
}
