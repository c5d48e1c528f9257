//! Course model

use serde::{Deserialize, Serialize};

/// Currency glyph shown in front of every price
pub const CURRENCY: &str = "₹";

/// A course offered for sale, as listed in `courses.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog identifier (e.g., "C1")
    pub id: String,

    /// Course title (e.g., "Intro to Rust")
    pub title: String,

    /// Instructor name
    pub teacher: String,

    /// Price in rupees (can be fractional)
    pub price: f64,
}

impl Course {
    /// Create a new course
    #[must_use]
    pub fn new(id: &str, title: &str, teacher: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            teacher: teacher.to_string(),
            price,
        }
    }

    /// Price with the currency glyph (e.g., "₹499")
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{CURRENCY}{}", format_price(self.price))
    }
}

/// Shortest decimal form of a price: `499`, `499.5`
#[must_use]
pub fn format_price(price: f64) -> String {
    // f64's Display already drops a zero fraction
    price.to_string()
}
