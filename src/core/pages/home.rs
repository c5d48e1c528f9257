//! Landing page "Ask Doubts" link

use crate::core::dom::{Document, NodeId, ScrollBehavior};
use crate::warn;

/// Selector of the secondary call-to-action button
pub const ASK_DOUBTS_SELECTOR: &str = ".cta-buttons .secondary";

/// Id of the section the link scrolls to
pub const CONTACT_ID: &str = "contact";

/// What a click handler did with the click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// The browser's default navigation was suppressed
    pub default_prevented: bool,
    /// The contact section was scrolled into view
    pub scrolled: bool,
}

/// Turns the "Ask Doubts" anchor into a smooth scroll to the contact section
#[derive(Debug, Clone, Copy)]
pub struct AskDoubtsLink {
    link: NodeId,
}

impl AskDoubtsLink {
    /// Find the link; `None` when the page has no such button
    #[must_use]
    pub fn attach(document: &Document) -> Option<Self> {
        document
            .query_selector(ASK_DOUBTS_SELECTOR)
            .map(|link| Self { link })
    }

    /// The anchor element
    #[must_use]
    pub const fn link(&self) -> NodeId {
        self.link
    }

    /// Handle a click on the link
    pub fn on_click(&self, document: &mut Document) -> ClickOutcome {
        let Some(contact) = document.get_element_by_id(CONTACT_ID) else {
            warn!("Ask Doubts clicked but the page has no #{CONTACT_ID} section");
            return ClickOutcome {
                default_prevented: true,
                scrolled: false,
            };
        };
        document.scroll_into_view(contact, ScrollBehavior::Smooth);
        ClickOutcome {
            default_prevented: true,
            scrolled: true,
        }
    }
}
