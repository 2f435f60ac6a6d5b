// Engine module - Core tokenization logic (path expansion, segmentation, virtualization)
// This layer sits between the raw field schema/row values (types) and the rendering layer

pub mod datetime;
pub mod expand;
pub mod nested;
pub mod row;
pub mod segment;
pub mod segmenter;
pub mod split;
pub mod virtualize;

pub use expand::expand_field_paths;
pub use nested::resolves_through_array;
pub use row::resolve_row_value;
pub use segment::TextSegmenter;
pub use segmenter::{CharSetSegmenter, SegmentUnit, UnicodeSegmenter, WordSegmenter};
pub use split::optimized_split;
pub use virtualize::{virtualize_json, Fragment, FragmentKind};

use logseg_types::{FieldDescriptor, SegmentConfig, Token};

// Façade API - Stable public interface for the rendering/CLI layer

/// Tokenize one field of one record with the default segmenter and budgets.
pub fn tokenize(field: &FieldDescriptor, row: &serde_json::Value) -> Vec<Token> {
    TextSegmenter::new(SegmentConfig::default()).tokenize(field, row)
}
