use crate::datetime;
use crate::nested::resolves_through_array;
use crate::row::resolve_row_value;
use crate::segmenter::{CharSetSegmenter, UnicodeSegmenter, WordSegmenter};
use crate::split::optimized_split;
use crate::virtualize::{virtualize_json, Fragment};
use logseg_types::{markup, FieldDescriptor, FieldType, SegmentConfig, Token, EMPTY_PLACEHOLDER};
use serde_json::Value;

/// Entry point of the tokenization pipeline.
///
/// Selects the JSON virtualizer or the chunked tokenizer per field, applies
/// the date pre-formatting, and post-processes the output into the public
/// token shape with contiguous char offsets. Pure per call; one instance can
/// be shared across cells and threads.
pub struct TextSegmenter {
    config: SegmentConfig,
    default_segmenter: Box<dyn WordSegmenter + Send + Sync>,
}

impl TextSegmenter {
    pub fn new(config: SegmentConfig) -> Self {
        Self {
            config,
            default_segmenter: Box::new(UnicodeSegmenter),
        }
    }

    /// Substitute the default word segmenter (locale-aware, backend-aligned,
    /// test stub). Fields with a `tokenize_on_chars` override keep using
    /// their explicit boundary set.
    pub fn with_segmenter(mut self, segmenter: Box<dyn WordSegmenter + Send + Sync>) -> Self {
        self.default_segmenter = segmenter;
        self
    }

    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Tokenize one field of one record.
    pub fn tokenize(&self, field: &FieldDescriptor, row: &Value) -> Vec<Token> {
        let raw = resolve_row_value(row, &field.field_name);

        // Virtual object nodes render as clickable pseudo-JSON; a value that
        // turns out not to be JSON-like falls through to plain tokenization.
        if field.is_virtual_obj_node && field.field_type == FieldType::Object {
            if let Some(value) = raw.as_ref() {
                if let Some(fragments) = virtualize_json(value, &self.config) {
                    return fragments_into_tokens(fragments);
                }
            }
        }

        let text = render_cell_text(raw.as_ref(), field);
        let text = markup::decode_entities(&text);

        let force_split = {
            let segments: Vec<&str> = field.field_name.split('.').collect();
            resolves_through_array(&segments, row)
        };
        let split_words = field.is_analyzed || field.has_char_override() || force_split;

        let char_override;
        let segmenter: &dyn WordSegmenter = if field.has_char_override() {
            char_override = CharSetSegmenter::new(&field.tokenize_on_chars);
            &char_override
        } else {
            self.default_segmenter.as_ref()
        };

        let mut tokens = optimized_split(&text, split_words, segmenter, &self.config);
        assign_offsets(&mut tokens);
        tokens
    }
}

impl Default for TextSegmenter {
    fn default() -> Self {
        Self::new(SegmentConfig::default())
    }
}

/// Display text of a resolved cell value, date fields pre-formatted.
fn render_cell_text(raw: Option<&Value>, field: &FieldDescriptor) -> String {
    let text = match raw {
        None | Some(Value::Null) => return EMPTY_PLACEHOLDER.to_string(),
        Some(Value::Array(items)) if items.is_empty() => return EMPTY_PLACEHOLDER.to_string(),
        Some(Value::String(s)) if s.is_empty() => return EMPTY_PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    if field.field_type.is_date_like() {
        format_date_preserving_mark(&text, field.field_type)
    } else {
        text
    }
}

/// Reformat a date value without losing its highlight: a marker wrapping the
/// raw timestamp is stripped, the inner value formatted, and the marker put
/// back around the formatted text.
fn format_date_preserving_mark(text: &str, field_type: FieldType) -> String {
    let (inner, was_marked) = match text
        .strip_prefix(markup::MARK_OPEN)
        .and_then(|rest| rest.strip_suffix(markup::MARK_CLOSE))
    {
        Some(inner) => (inner, true),
        None => (text, false),
    };

    let formatted = match field_type {
        FieldType::Date => datetime::format_timestamp(inner),
        FieldType::DateNanos => datetime::format_timestamp_nanos(inner),
        _ => None,
    }
    .unwrap_or_else(|| inner.to_string());

    if was_marked {
        format!("{}{}{}", markup::MARK_OPEN, formatted, markup::MARK_CLOSE)
    } else {
        formatted
    }
}

/// Convert virtualizer fragments 1:1 into tokens; concatenation order alone
/// determines the offsets.
fn fragments_into_tokens(fragments: Vec<Fragment>) -> Vec<Token> {
    let mut tokens: Vec<Token> = fragments
        .into_iter()
        .map(|f| {
            Token::new(f.text)
                .with_mark(f.is_mark)
                .with_cursor_text(f.is_cursor_text)
        })
        .collect();
    assign_offsets(&mut tokens);
    tokens
}

/// Assign contiguous `[start_index, end_index)` char offsets in emission
/// order.
pub fn assign_offsets(tokens: &mut [Token]) {
    let mut cursor = 0;
    for token in tokens {
        token.start_index = cursor;
        cursor += token.char_len();
        token.end_index = cursor;
    }
}
