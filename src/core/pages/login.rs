//! Login form controller

use crate::core::auth::{AuthError, AuthProvider};
use crate::core::dom::{Document, NodeId};
use crate::core::models::Role;
use crate::core::session;
use crate::core::window::{TimerAction, Window};
use crate::{debug, error, info, warn};
use std::time::Duration;

/// Shown when the credentials match
pub const SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";

/// Shown for any credential mismatch
pub const FAILURE_MESSAGE: &str = "Invalid credentials!";

/// Shown when the session marker cannot be written
pub const STORAGE_FAILURE_MESSAGE: &str = "Could not save your session. Please try again.";

/// Element ids the login page markup provides
pub mod ids {
    /// The `<form>`
    pub const FORM: &str = "loginForm";
    /// Role picker
    pub const ROLE: &str = "roleSelect";
    /// Email input
    pub const EMAIL: &str = "email";
    /// Password input
    pub const PASSWORD: &str = "password";
    /// Status line under the form
    pub const MESSAGE: &str = "loginMessage";
}

/// Result of one form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; a redirect is scheduled
    Success {
        /// Role signed in as
        role: Role,
        /// Dashboard the redirect goes to
        redirect: String,
    },
    /// Credentials were refused
    Rejected(AuthError),
    /// Credentials matched but the session could not be stored
    StorageFailed(String),
}

#[derive(Debug, Clone, Copy)]
struct LoginForm {
    role: NodeId,
    email: NodeId,
    password: NodeId,
    message: NodeId,
}

/// Handles submissions of the login form
pub struct LoginController<A: AuthProvider> {
    auth: A,
    redirect_delay: Duration,
    form: LoginForm,
}

impl<A: AuthProvider> LoginController<A> {
    /// Bind to the login form in `document`
    ///
    /// Returns `None` unless the form and all its fields are present.
    #[must_use]
    pub fn attach(document: &Document, auth: A, redirect_delay: Duration) -> Option<Self> {
        document.get_element_by_id(ids::FORM)?;
        let form = LoginForm {
            role: document.get_element_by_id(ids::ROLE)?,
            email: document.get_element_by_id(ids::EMAIL)?,
            password: document.get_element_by_id(ids::PASSWORD)?,
            message: document.get_element_by_id(ids::MESSAGE)?,
        };
        Some(Self {
            auth,
            redirect_delay,
            form,
        })
    }

    /// Handle a submit event
    ///
    /// The browser's own form navigation never happens. On success the role
    /// is stored, a green message is shown and the dashboard redirect is
    /// scheduled after the configured delay. Any mismatch shows the same red
    /// message and touches neither storage nor location.
    pub fn on_submit(&self, window: &mut Window) -> LoginOutcome {
        let document = window.document();
        let role = document.value(self.form.role).to_string();
        let email = document.value(self.form.email).to_string();
        let password = document.value(self.form.password).to_string();

        let role = match self.auth.authenticate(&role, &email, &password) {
            Ok(role) => role,
            Err(err) => {
                warn!("login refused for role '{role}': {err:?}");
                self.show_message(window.document_mut(), FAILURE_MESSAGE, "red");
                return LoginOutcome::Rejected(err);
            }
        };

        if let Err(err) = session::store_role(window.storage_mut(), role) {
            error!("failed to store session for {role}: {err}");
            self.show_message(window.document_mut(), STORAGE_FAILURE_MESSAGE, "red");
            return LoginOutcome::StorageFailed(err.to_string());
        }

        info!("signed in as {role}");
        self.show_message(window.document_mut(), SUCCESS_MESSAGE, "green");

        let redirect = role.dashboard_path();
        debug!("redirecting to {redirect} in {}ms", self.redirect_delay.as_millis());
        window.set_timeout(self.redirect_delay, TimerAction::Navigate(redirect.clone()));
        LoginOutcome::Success { role, redirect }
    }

    fn show_message(&self, document: &mut Document, text: &str, color: &str) {
        document.set_text(self.form.message, text);
        document.set_style(self.form.message, "color", color);
    }
}

/// Login page markup with an empty form
#[must_use]
pub fn login_page_document() -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    let form = doc.append_with_id(body, "form", ids::FORM);
    let select = doc.append_with_id(form, "select", ids::ROLE);
    for role in Role::ALL {
        let option = doc.create_element("option");
        doc.set_attribute(option, "value", role.as_str());
        doc.set_text(option, role.as_str());
        doc.append_child(select, option);
    }
    doc.set_value(select, Role::Student.as_str());
    let email = doc.append_with_id(form, "input", ids::EMAIL);
    doc.set_attribute(email, "type", "email");
    let password = doc.append_with_id(form, "input", ids::PASSWORD);
    doc.set_attribute(password, "type", "password");
    let submit = doc.append_with_class(form, "button", "login-button");
    doc.set_attribute(submit, "type", "submit");
    doc.set_text(submit, "Login");
    doc.append_with_id(body, "p", ids::MESSAGE);
    doc
}

/// Fill the login form fields of `document`
///
/// Fields missing from the document are skipped.
pub fn fill_login_form(document: &mut Document, role: &str, email: &str, password: &str) {
    for (id, value) in [(ids::ROLE, role), (ids::EMAIL, email), (ids::PASSWORD, password)] {
        if let Some(node) = document.get_element_by_id(id) {
            document.set_value(node, value);
        }
    }
}
