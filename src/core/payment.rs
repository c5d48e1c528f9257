//! Payment providers
//!
//! No payment is taken anywhere in this crate. [`MockCheckout`] only builds
//! the URL of the external checkout page.

use crate::core::models::format_price;
use std::fmt::Write;

/// Turns a purchase into a checkout redirect
pub trait PaymentProvider {
    /// URL the visitor is sent to in order to pay `price` for `course_id`
    fn checkout_url(&self, course_id: &str, price: f64) -> String;

    /// Message shown to the visitor right before the redirect
    fn notice(&self, course_id: &str, price: f64) -> String;
}

/// Redirects to a placeholder checkout page with the course in the query
#[derive(Debug, Clone)]
pub struct MockCheckout {
    checkout_path: String,
}

impl MockCheckout {
    /// Checkout page used when none is configured
    pub const DEFAULT_PATH: &'static str = "/razorpay/checkout.html";

    /// Redirect to `checkout_path`
    #[must_use]
    pub fn new(checkout_path: &str) -> Self {
        let path = if checkout_path.is_empty() {
            Self::DEFAULT_PATH
        } else {
            checkout_path
        };
        Self {
            checkout_path: path.to_string(),
        }
    }
}

impl Default for MockCheckout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl PaymentProvider for MockCheckout {
    fn checkout_url(&self, course_id: &str, price: f64) -> String {
        format!(
            "{}?courseId={}&price={}",
            self.checkout_path,
            encode_query_value(course_id),
            encode_query_value(&format_price(price))
        )
    }

    fn notice(&self, course_id: &str, price: f64) -> String {
        format!(
            "Redirecting to Razorpay for course ID: {course_id} at ₹{}",
            format_price(price)
        )
    }
}

/// Percent-encode everything outside the URL unreserved set
fn encode_query_value(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}
