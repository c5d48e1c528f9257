//! Data models for `EduPortal`

pub mod course;
pub mod role;

pub use course::{format_price, Course};
pub use role::Role;
