//! Testing infrastructure for logseg integration tests.
//!
//! Provides descriptor builders and sample schema/row data shared by the
//! engine and CLI test suites.

pub mod fixtures;

pub use fixtures::{field, sample_row, sample_schema, FieldBuilder};
