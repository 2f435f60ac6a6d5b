pub mod config;
pub mod error;
pub mod field;
pub mod markup;
pub mod token;

pub use config::SegmentConfig;
pub use error::{Error, Result};
pub use field::{FieldDescriptor, FieldType};
pub use markup::{decode_entities, MARK_CLOSE, MARK_OPEN};
pub use token::Token;

/// Placeholder rendered for missing, null or empty cell values.
pub const EMPTY_PLACEHOLDER: &str = "--";
