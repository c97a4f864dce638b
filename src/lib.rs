//! Rosterdesk - a terminal client for staff, project and allocation records.
//!
//! This crate renders tables and forms for three related record kinds and
//! drives create, update and delete requests against a remote record
//! service, layered as domain, application, infrastructure and presentation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, form DTOs and panel services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing the HTTP adapter and configuration.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "rosterdesk";
