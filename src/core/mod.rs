//! Core module for common functionality across all targets

pub mod auth;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod media;
pub mod models;
pub mod pages;
pub mod payment;
pub mod resource;
pub mod session;
pub mod storage;
pub mod window;

/// Returns the current version of the `edu-portal` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
