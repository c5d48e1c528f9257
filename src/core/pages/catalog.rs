//! Course listing page controller

use crate::core::catalog::view::{COURSE_ID_ATTR, PRICE_ATTR};
use crate::core::catalog::{load_catalog, CatalogState, CatalogView, COURSES_RESOURCE};
use crate::core::dom::{Document, NodeId};
use crate::core::payment::PaymentProvider;
use crate::core::resource::ResourceLoader;
use crate::core::window::Window;
use crate::{debug, info, warn};

/// Id of the element the cards render into
pub const COURSE_LIST_ID: &str = "courseList";

/// Loads the course list on page ready and handles the buy buttons
pub struct CatalogController<L: ResourceLoader, P: PaymentProvider> {
    loader: L,
    payment: P,
    resource: String,
}

impl<L: ResourceLoader, P: PaymentProvider> CatalogController<L, P> {
    /// Fetch the list from [`COURSES_RESOURCE`]
    #[must_use]
    pub fn new(loader: L, payment: P) -> Self {
        Self::with_resource(loader, payment, COURSES_RESOURCE)
    }

    /// Fetch the list from `resource` instead
    #[must_use]
    pub fn with_resource(loader: L, payment: P, resource: &str) -> Self {
        let resource = if resource.is_empty() {
            COURSES_RESOURCE
        } else {
            resource
        };
        Self {
            loader,
            payment,
            resource: resource.to_string(),
        }
    }

    /// The payment provider behind the buy buttons
    pub const fn payment(&self) -> &P {
        &self.payment
    }

    /// Handle the page-ready event: fetch once and render the result
    ///
    /// A missing `#courseList` still loads the list but renders nothing.
    pub fn on_ready(&self, window: &mut Window) -> CatalogState {
        let state = load_catalog(&self.loader, &self.resource);
        let document = window.document_mut();
        match document.get_element_by_id(COURSE_LIST_ID) {
            Some(list) => {
                CatalogView::from_state(&state, &self.payment).apply(document, list);
                debug!("rendered {} course card(s)", state.courses().len());
            }
            None => warn!("page has no #{COURSE_LIST_ID}; course list not rendered"),
        }
        state
    }

    /// Start checkout for a course: notify the visitor, then redirect
    ///
    /// # Returns
    /// The checkout URL navigated to
    pub fn buy(&self, window: &mut Window, course_id: &str, price: f64) -> String {
        let url = self.payment.checkout_url(course_id, price);
        window.alert(&self.payment.notice(course_id, price));
        info!("checkout for {course_id} -> {url}");
        window.navigate(&url);
        url
    }

    /// Handle a click on a rendered buy button
    ///
    /// Returns `None` when `button` is not a buy button.
    pub fn on_buy_click(&self, window: &mut Window, button: NodeId) -> Option<String> {
        let (course_id, price) = buy_target(window.document(), button)?;
        Some(self.buy(window, &course_id, price))
    }
}

/// Course id and price carried by a rendered buy button
#[must_use]
pub fn buy_target(document: &Document, button: NodeId) -> Option<(String, f64)> {
    let course_id = document.attribute(button, COURSE_ID_ATTR)?.to_string();
    let price = document.attribute(button, PRICE_ATTR)?.parse().ok()?;
    Some((course_id, price))
}

/// Course listing page markup with an empty list
#[must_use]
pub fn catalog_page_document() -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    let heading = doc.create_element("h1");
    doc.set_text(heading, "Available Courses");
    doc.append_child(body, heading);
    doc.append_with_id(body, "div", COURSE_LIST_ID);
    doc
}
