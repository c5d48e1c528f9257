//! Login command handler

use super::open_store;
use edu_portal::config::Config;
use edu_portal::core::auth::MockAuthProvider;
use edu_portal::core::pages::login::{fill_login_form, ids, login_page_document, LoginController};
use edu_portal::core::pages::LoginOutcome;
use edu_portal::core::window::Window;
use edu_portal::{error, verbose};

/// Submit the login form and follow the redirect
///
/// # Returns
/// `true` when the visitor ended up on their dashboard
pub fn run(role: &str, email: &str, password: &str, config: &Config) -> bool {
    let Some(store) = open_store(config) else {
        return false;
    };

    let mut document = login_page_document();
    fill_login_form(&mut document, role, email, password);
    let delay = config.site.redirect_delay();
    let Some(controller) = LoginController::attach(&document, MockAuthProvider::demo(), delay)
    else {
        error!("login page is missing form fields");
        return false;
    };

    let mut window = Window::new(document, Box::new(store)).at(&config.site.login_path);
    let outcome = controller.on_submit(&mut window);
    print_message(&window);

    match outcome {
        LoginOutcome::Success { redirect, .. } => {
            verbose!("Waiting {}ms before redirect", delay.as_millis());
            std::thread::sleep(delay);
            window.advance(delay);
            if window.location() == redirect {
                println!("→ {redirect}");
            }
            true
        }
        LoginOutcome::Rejected(_) | LoginOutcome::StorageFailed(_) => false,
    }
}

fn print_message(window: &Window) {
    let document = window.document();
    let Some(message) = document.get_element_by_id(ids::MESSAGE) else {
        return;
    };
    let text = document.text(message);
    if document.style(message, "color") == Some("green") {
        println!("✓ {text}");
    } else {
        eprintln!("✗ {text}");
    }
}
