//! Integration tests for the course catalog page

use edu_portal::core::catalog::view::{BUY_LABEL, EMPTY_MESSAGE, FAILED_MESSAGE};
use edu_portal::core::catalog::{CatalogFormat, CatalogState, CatalogView, COURSES_RESOURCE};
use edu_portal::core::pages::catalog::{buy_target, catalog_page_document};
use edu_portal::core::pages::CatalogController;
use edu_portal::core::payment::MockCheckout;
use edu_portal::core::resource::{FetchError, FsResourceLoader, ResourceLoader, StaticResourceLoader};
use edu_portal::core::storage::MemoryStore;
use edu_portal::core::window::Window;
use std::cell::Cell;
use std::fs;
use tempfile::TempDir;

const TWO_COURSES: &str = r#"[
    {"id": "C1", "title": "Intro to Rust", "teacher": "Ferris", "price": 499},
    {"id": "C2", "title": "Web Basics", "teacher": "Ada", "price": 299.5}
]"#;

fn window() -> Window {
    Window::new(catalog_page_document(), Box::new(MemoryStore::new()))
        .at("/student/pages/courses.html")
}

fn controller(body: &str) -> CatalogController<StaticResourceLoader, MockCheckout> {
    let loader = StaticResourceLoader::new().with(COURSES_RESOURCE, body);
    CatalogController::new(loader, MockCheckout::default())
}

#[test]
fn two_courses_render_two_cards() {
    let controller = controller(TWO_COURSES);
    let mut window = window();
    let state = controller.on_ready(&mut window);
    assert_eq!(state.courses().len(), 2);

    let doc = window.document();
    let cards = doc.query_selector_all("#courseList .course-card");
    assert_eq!(cards.len(), 2);

    let first: Vec<&str> = doc.children(cards[0]).iter().map(|&n| doc.text(n)).collect();
    assert_eq!(
        first,
        ["Intro to Rust", "Instructor: Ferris", "Price: ₹499", BUY_LABEL]
    );
    let second: Vec<&str> = doc.children(cards[1]).iter().map(|&n| doc.text(n)).collect();
    assert_eq!(
        second,
        ["Web Basics", "Instructor: Ada", "Price: ₹299.5", BUY_LABEL]
    );
}

#[test]
fn buying_c1_redirects_to_checkout() {
    let controller = controller(TWO_COURSES);
    let mut window = window();
    controller.on_ready(&mut window);

    let button = window.document().query_selector_all(".buy-button")[0];
    assert_eq!(
        buy_target(window.document(), button),
        Some(("C1".to_string(), 499.0))
    );

    let url = controller.on_buy_click(&mut window, button).unwrap();
    assert!(url.contains("courseId=C1&price=499"));
    assert_eq!(window.location(), "/razorpay/checkout.html?courseId=C1&price=499");
    assert_eq!(
        window.alerts(),
        ["Redirecting to Razorpay for course ID: C1 at ₹499".to_string()]
    );
}

#[test]
fn empty_list_shows_notice() {
    let controller = controller("[]");
    let mut window = window();
    assert!(matches!(controller.on_ready(&mut window), CatalogState::Empty));

    let doc = window.document();
    let notice = doc.query_selector("#courseList .course-empty").unwrap();
    assert_eq!(doc.text(notice), EMPTY_MESSAGE);
    assert!(doc.query_selector(".course-card").is_none());
}

#[test]
fn malformed_list_shows_failure() {
    let controller = controller("{ not json");
    let mut window = window();
    assert!(controller.on_ready(&mut window).is_failed());

    let doc = window.document();
    let notice = doc.query_selector("#courseList .course-error").unwrap();
    assert_eq!(doc.text(notice), FAILED_MESSAGE);
}

#[test]
fn filesystem_loader_resolves_against_page_dir() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("student").join("assets").join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("courses.json"), TWO_COURSES).unwrap();

    let loader = FsResourceLoader::new(temp.path().join("student").join("pages"));
    let controller = CatalogController::new(loader, MockCheckout::new("/pay.html"));
    let mut window = window();
    let state = controller.on_ready(&mut window);

    assert_eq!(state.courses().len(), 2);
    let url = controller.buy(&mut window, "C2", 299.5);
    assert_eq!(url, "/pay.html?courseId=C2&price=299.5");
}

#[test]
fn rendered_page_written_to_disk() {
    let temp = TempDir::new().unwrap();
    let controller = controller(TWO_COURSES);
    let state = controller.on_ready(&mut window());
    let view = CatalogView::from_state(&state, controller.payment());

    for format in [CatalogFormat::Html, CatalogFormat::Markdown] {
        let path = temp
            .path()
            .join("pages")
            .join(format!("courses.{}", format.extension()));
        format.renderer().generate(&view, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Intro to Rust"));
        assert!(written.contains("₹299.5"));
    }
}

/// Serves one body and counts how often it was requested
struct CountingLoader {
    body: &'static str,
    fetches: Cell<usize>,
}

impl ResourceLoader for CountingLoader {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.fetches.set(self.fetches.get() + 1);
        if path == COURSES_RESOURCE {
            Ok(self.body.to_string())
        } else {
            Err(FetchError::NotFound(path.to_string()))
        }
    }
}

#[test]
fn course_list_is_fetched_once_per_page_load() {
    let loader = CountingLoader {
        body: TWO_COURSES,
        fetches: Cell::new(0),
    };
    let controller = CatalogController::new(&loader, MockCheckout::default());
    let mut window = window();

    controller.on_ready(&mut window);
    assert_eq!(loader.fetches.get(), 1);

    let button = window.document().query_selector(".buy-button").unwrap();
    controller.on_buy_click(&mut window, button).unwrap();
    assert_eq!(loader.fetches.get(), 1);
}
