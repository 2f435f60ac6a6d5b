/// Opening highlight marker emitted by the search backend.
pub const MARK_OPEN: &str = "<mark>";
/// Closing highlight marker emitted by the search backend.
pub const MARK_CLOSE: &str = "</mark>";

/// Whether `text` contains a highlight marker pair anywhere.
pub fn contains_mark(text: &str) -> bool {
    text.contains(MARK_OPEN)
}

/// Remove all highlight markers, keeping the highlighted content.
pub fn strip_marks(text: &str) -> String {
    text.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// Decode the HTML entities the search backend escapes in field values.
///
/// Marker detection and display text must be based on literal characters,
/// not encoded forms; only the entities the backend actually emits are
/// handled.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    // `&amp;` last so a double-escaped entity decodes exactly one level
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
