//! Page controllers
//!
//! Each controller binds to the elements its page provides, then handles the
//! events that page wires up. Controllers take the [`Document`] or
//! [`Window`] they act on explicitly, so pages can be driven from tests or
//! the CLI without a browser.
//!
//! [`Document`]: crate::core::dom::Document
//! [`Window`]: crate::core::window::Window

pub mod captions;
pub mod catalog;
pub mod home;
pub mod login;
pub mod sparkle;

pub use captions::CaptionSelector;
pub use catalog::CatalogController;
pub use home::AskDoubtsLink;
pub use login::{LoginController, LoginOutcome};
pub use sparkle::{SparkleDecorator, SparkleKind, SparkleReport};
