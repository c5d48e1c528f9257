//! Declarative description of the course list

use crate::core::catalog::CatalogState;
use crate::core::dom::{Document, NodeId};
use crate::core::models::{format_price, Course};
use crate::core::payment::PaymentProvider;

/// Label of every purchase control
pub const BUY_LABEL: &str = "Buy Now";

/// Shown when the list loaded but is empty
pub const EMPTY_MESSAGE: &str = "No courses available.";

/// Shown when the list could not be loaded
pub const FAILED_MESSAGE: &str = "Failed to load courses.";

/// Attribute on a rendered buy button holding the course id
pub const COURSE_ID_ATTR: &str = "data-course-id";

/// Attribute on a rendered buy button holding the price
pub const PRICE_ATTR: &str = "data-price";

/// One purchasable course card
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCard {
    /// Course the card sells
    pub course_id: String,
    /// Heading
    pub title: String,
    /// `Instructor: {teacher}`
    pub instructor: String,
    /// `Price: ₹{price}`
    pub price_line: String,
    /// Raw price carried by the buy action
    pub price: f64,
    /// Where the buy action leads
    pub checkout_url: String,
}

impl CourseCard {
    /// Describe the card for `course`
    #[must_use]
    pub fn new(course: &Course, payment: &dyn PaymentProvider) -> Self {
        Self {
            course_id: course.id.clone(),
            title: course.title.clone(),
            instructor: format!("Instructor: {}", course.teacher),
            price_line: format!("Price: {}", course.display_price()),
            price: course.price,
            checkout_url: payment.checkout_url(&course.id, course.price),
        }
    }
}

/// Kind of message shown instead of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Nothing to list
    Empty,
    /// The list failed to load
    Error,
}

/// Message shown instead of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// What happened
    pub kind: NoticeKind,
    /// Text shown to the visitor
    pub text: String,
}

impl Notice {
    /// CSS class of the rendered message
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Empty => "course-empty",
            NoticeKind::Error => "course-error",
        }
    }
}

/// What the course list shows: cards, or a notice when there are none
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Cards in listing order
    pub cards: Vec<CourseCard>,
    /// Message replacing the cards
    pub notice: Option<Notice>,
}

impl CatalogView {
    /// Describe how `state` renders
    #[must_use]
    pub fn from_state(state: &CatalogState, payment: &dyn PaymentProvider) -> Self {
        let notice = match state {
            CatalogState::Loaded(_) => None,
            CatalogState::Empty => Some(Notice {
                kind: NoticeKind::Empty,
                text: EMPTY_MESSAGE.to_string(),
            }),
            CatalogState::Failed(_) => Some(Notice {
                kind: NoticeKind::Error,
                text: FAILED_MESSAGE.to_string(),
            }),
        };
        Self {
            cards: state
                .courses()
                .iter()
                .map(|course| CourseCard::new(course, payment))
                .collect(),
            notice,
        }
    }

    /// Replace the contents of `container` with this view
    pub fn apply(&self, document: &mut Document, container: NodeId) {
        document.clear_children(container);

        if let Some(notice) = &self.notice {
            let message = document.append_with_class(container, "p", notice.class());
            document.set_text(message, &notice.text);
        }

        for card in &self.cards {
            let node = document.append_with_class(container, "div", "course-card");
            for (tag, text) in [
                ("h2", &card.title),
                ("p", &card.instructor),
                ("p", &card.price_line),
            ] {
                let child = document.create_element(tag);
                document.set_text(child, text);
                document.append_child(node, child);
            }
            let button = document.append_with_class(node, "button", "buy-button");
            document.set_text(button, BUY_LABEL);
            document.set_attribute(button, COURSE_ID_ATTR, &card.course_id);
            document.set_attribute(button, PRICE_ATTR, &format_price(card.price));
        }
    }
}
