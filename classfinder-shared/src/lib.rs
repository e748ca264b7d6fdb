//! # Classfinder Shared Library
//!
//! Storage, models and the class search/registration services used by the
//! Classfinder API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and migrations
//! - `models`: Row types for tutors, classes and weekly schedules
//! - `time`: `HH:MM` to minute-of-day conversion
//! - `classes`: Class search and transactional registration

pub mod classes;
pub mod db;
pub mod models;
pub mod time;

/// Current version of the Classfinder shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
