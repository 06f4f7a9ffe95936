//! Stub CSV import pipeline for ads exports.
//!
//! Detects which platform an uploaded export came from and produces
//! campaigns satisfying the core schema, with derived metrics computed on
//! the producer side and every row validated before it reaches the engine.
//! Real row-level CSV parsing stays with the upstream ingestion service;
//! this pipeline fabricates placeholder rows for the detected platform.

pub mod detect;
pub mod error;
pub mod import;
pub mod validate;

pub use detect::{detect_format, CsvFormat};
pub use error::ImportError;
pub use import::{compute_derived, import_campaigns, import_from_str};
pub use validate::{validate_campaign, ValidationError};
