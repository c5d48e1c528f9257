//! Integration tests for the login page, session marker and dashboard guard

use edu_portal::core::auth::MockAuthProvider;
use edu_portal::core::models::Role;
use edu_portal::core::pages::login::{
    fill_login_form, ids, login_page_document, FAILURE_MESSAGE, STORAGE_FAILURE_MESSAGE,
    SUCCESS_MESSAGE,
};
use edu_portal::core::pages::{LoginController, LoginOutcome};
use edu_portal::core::session::{self, DashboardGuard, GuardOutcome, ROLE_KEY};
use edu_portal::core::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
use edu_portal::core::window::Window;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

const LOGIN_PAGE: &str = "/index.html";
const DELAY: Duration = Duration::from_millis(1000);

fn submit(role: &str, email: &str, password: &str) -> (LoginOutcome, Window) {
    submit_with(Box::new(MemoryStore::new()), role, email, password)
}

fn submit_with(
    storage: Box<dyn KeyValueStore>,
    role: &str,
    email: &str,
    password: &str,
) -> (LoginOutcome, Window) {
    let mut doc = login_page_document();
    fill_login_form(&mut doc, role, email, password);
    let controller = LoginController::attach(&doc, MockAuthProvider::demo(), DELAY)
        .expect("login page has every field");
    let mut window = Window::new(doc, storage).at(LOGIN_PAGE);
    let outcome = controller.on_submit(&mut window);
    (outcome, window)
}

fn message(window: &Window) -> (String, Option<String>) {
    let doc = window.document();
    let node = doc.get_element_by_id(ids::MESSAGE).unwrap();
    (
        doc.text(node).to_string(),
        doc.style(node, "color").map(str::to_string),
    )
}

#[test]
fn each_role_signs_in_and_redirects_after_delay() {
    for role in Role::ALL {
        let email = format!("{role}@sus.com");
        let (outcome, mut window) = submit(role.as_str(), &email, "123456");

        let expected = format!("./{role}/dashboard.html");
        assert_eq!(
            outcome,
            LoginOutcome::Success {
                role,
                redirect: expected.clone()
            }
        );
        assert_eq!(window.storage().get(ROLE_KEY), Some(role.as_str().to_string()));
        assert_eq!(
            message(&window),
            (SUCCESS_MESSAGE.to_string(), Some("green".to_string()))
        );

        window.advance(Duration::from_millis(999));
        assert_eq!(window.location(), LOGIN_PAGE);

        window.advance(Duration::from_millis(1));
        assert_eq!(window.location(), expected);
        assert_eq!(window.pending_timers(), 0);
    }
}

#[test]
fn any_single_field_mismatch_is_rejected() {
    let attempts = [
        ("teacher", "student@sus.com", "123456"),
        ("student", "student@sus.co", "123456"),
        ("student", "student@sus.com", "1234567"),
        ("student", "Student@sus.com", "123456"),
        ("superuser", "student@sus.com", "123456"),
    ];

    for (role, email, password) in attempts {
        let (outcome, mut window) = submit(role, email, password);

        assert!(matches!(outcome, LoginOutcome::Rejected(_)), "{role}/{email}/{password}");
        assert_eq!(
            message(&window),
            (FAILURE_MESSAGE.to_string(), Some("red".to_string()))
        );
        assert_eq!(window.storage().get(ROLE_KEY), None);

        window.advance(Duration::from_secs(10));
        assert_eq!(window.location(), LOGIN_PAGE);
        assert!(window.history().is_empty());
    }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: PathBuf::from("read-only"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.set(key, "")
    }
}

#[test]
fn storage_failure_blocks_the_redirect() {
    let (outcome, mut window) =
        submit_with(Box::new(ReadOnlyStore), "admin", "admin@sus.com", "123456");

    assert!(matches!(outcome, LoginOutcome::StorageFailed(_)));
    assert_eq!(message(&window).0, STORAGE_FAILURE_MESSAGE);
    window.advance(DELAY);
    assert_eq!(window.location(), LOGIN_PAGE);
}

#[test]
fn navigating_away_abandons_the_redirect() {
    let (_, mut window) = submit("student", "student@sus.com", "123456");
    window.advance(Duration::from_millis(400));
    window.navigate("/about.html");
    window.advance(DELAY);

    assert_eq!(window.location(), "/about.html");
    assert_eq!(window.history(), ["/about.html".to_string()]);
}

#[test]
fn session_survives_in_file_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state").join("local_storage.json");

    let store = FileStore::open(&path).unwrap();
    let (outcome, _) = submit_with(Box::new(store), "teacher", "teacher@sus.com", "123456");
    assert!(matches!(outcome, LoginOutcome::Success { .. }));

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(session::current_role(&reopened), Some(Role::Teacher));
}

#[test]
fn dashboard_guard_follows_the_session() {
    let (_, mut window) = submit("student", "student@sus.com", "123456");
    window.advance(DELAY);

    let student = DashboardGuard::new(Role::Student, LOGIN_PAGE);
    assert_eq!(student.enforce(&mut window), GuardOutcome::Allowed(Role::Student));

    let admin = DashboardGuard::new(Role::Admin, LOGIN_PAGE);
    assert_eq!(
        admin.enforce(&mut window),
        GuardOutcome::Redirected {
            found: Some(Role::Student)
        }
    );
    assert_eq!(window.location(), LOGIN_PAGE);
}

#[test]
fn logout_clears_the_session() {
    let (_, mut window) = submit("admin", "admin@sus.com", "123456");
    window.advance(DELAY);

    session::logout(&mut window, LOGIN_PAGE).unwrap();

    assert_eq!(window.storage().get(ROLE_KEY), None);
    assert_eq!(window.location(), LOGIN_PAGE);
    let guard = DashboardGuard::new(Role::Admin, LOGIN_PAGE);
    assert_eq!(
        guard.enforce(&mut window),
        GuardOutcome::Redirected { found: None }
    );
}
