use serde::{Deserialize, Serialize};

/// Field classification as reported by the fields API.
///
/// `Other` absorbs types this engine has no special handling for so that a
/// schema feed with new types still deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Analyzed full-text field
    Text,
    /// Non-analyzed string field
    Keyword,
    Integer,
    Long,
    Double,
    Boolean,
    /// Millisecond-precision timestamp
    Date,
    /// Nanosecond-precision timestamp
    DateNanos,
    /// Nested object (also the type of synthetic virtual nodes)
    Object,
    /// Flattened object stored as a single value
    Flattened,
    #[serde(other)]
    Other,
}

impl FieldType {
    pub fn is_date_like(&self) -> bool {
        matches!(self, FieldType::Date | FieldType::DateNanos)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldType::Integer | FieldType::Long | FieldType::Double
        )
    }
}

/// One addressable field of a log record.
///
/// `field_name` is a dotted path (`a.b.c`) unique within a schema after path
/// expansion. Synthetic intermediate descriptors produced by the expander
/// carry `is_virtual_obj_node = true` and have no direct value of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub field_name: String,
    #[serde(default)]
    pub field_alias: String,
    #[serde(default)]
    pub query_alias: Option<String>,
    pub field_type: FieldType,
    /// Whether word segmentation applies; non-analyzed fields render as one
    /// atomic token.
    #[serde(default)]
    pub is_analyzed: bool,
    /// Explicit boundary characters overriding the default segmenter.
    /// Empty means no override.
    #[serde(default)]
    pub tokenize_on_chars: String,
    #[serde(default)]
    pub is_virtual_obj_node: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl FieldDescriptor {
    pub fn new(field_name: impl Into<String>, field_type: FieldType) -> Self {
        let field_name = field_name.into();
        Self {
            field_alias: field_name.clone(),
            field_name,
            query_alias: None,
            field_type,
            is_analyzed: false,
            tokenize_on_chars: String::new(),
            is_virtual_obj_node: false,
            description: None,
        }
    }

    /// Display name: alias when set, otherwise the field name.
    pub fn display_name(&self) -> &str {
        if self.field_alias.is_empty() {
            &self.field_name
        } else {
            &self.field_alias
        }
    }

    pub fn has_char_override(&self) -> bool {
        !self.tokenize_on_chars.is_empty()
    }

    /// Dot-separated path segments of the field name.
    pub fn path_segments(&self) -> Vec<&str> {
        self.field_name.split('.').collect()
    }
}
