//! berichtsheft - Weekly work report logger
//!
//! Stores free-text daily entries keyed by date, prints Monday-Friday
//! overviews and exports a week into a DOCX report template, optionally
//! converted to PDF.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BerichtsheftError;
