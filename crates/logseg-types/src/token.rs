use serde::{Deserialize, Serialize};

/// One renderable unit of a tokenized cell value.
///
/// `text` is already entity-decoded and has the highlight markers stripped;
/// `start_index`/`end_index` are char offsets into the unmarked rendered
/// string, contiguous and monotonically increasing across one cell's tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// The source run was wrapped in highlight markers.
    pub is_mark: bool,
    /// The user may click/act on this token (word content, not punctuation).
    pub is_cursor_text: bool,
    /// Fixed-size fallback slice rather than a real word.
    pub is_blob_word: bool,
    pub start_index: usize,
    pub end_index: usize,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_mark: false,
            is_cursor_text: false,
            is_blob_word: false,
            start_index: 0,
            end_index: 0,
        }
    }

    pub fn with_mark(mut self, is_mark: bool) -> Self {
        self.is_mark = is_mark;
        self
    }

    pub fn with_cursor_text(mut self, is_cursor_text: bool) -> Self {
        self.is_cursor_text = is_cursor_text;
        self
    }

    pub fn with_blob_word(mut self, is_blob_word: bool) -> Self {
        self.is_blob_word = is_blob_word;
        self
    }

    /// Length in chars, the unit `start_index`/`end_index` count.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
