//! Page controllers for the course-selling education site.
//!
//! The controllers run against [`core::window::Window`], an in-memory browser
//! model holding the document, durable storage, location and timers. The
//! `eduportal` binary hosts them from the command line.

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
