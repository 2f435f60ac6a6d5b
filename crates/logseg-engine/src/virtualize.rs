use logseg_types::{markup, SegmentConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a fragment renders as; only `Value` fragments are clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    Punctuation,
    Key,
    Value,
}

/// One fragment of pretty-printed pseudo-JSON: a bracket, separator, quoted
/// key, or leaf value. Fragments read in order print compact JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub kind: FragmentKind,
    pub is_mark: bool,
    pub is_cursor_text: bool,
}

impl Fragment {
    fn punctuation(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: FragmentKind::Punctuation,
            is_mark: false,
            is_cursor_text: false,
        }
    }

    fn key(name: &str) -> Self {
        let decoded = markup::decode_entities(name);
        Self {
            text: format!("{}:", json_quote(&markup::strip_marks(&decoded))),
            kind: FragmentKind::Key,
            is_mark: markup::contains_mark(&decoded),
            is_cursor_text: false,
        }
    }

    fn value(text: String, is_mark: bool) -> Self {
        Self {
            text,
            kind: FragmentKind::Value,
            is_mark,
            is_cursor_text: true,
        }
    }
}

fn json_quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

/// Convert a JSON-like value into the flat fragment sequence the rendering
/// layer turns into tokens.
///
/// A string input is re-parsed only when it structurally looks like JSON
/// (trimmed text starts and ends with a matching bracket pair); anything
/// else returns `None` and the caller falls back to plain tokenization.
/// No error ever surfaces from this path.
pub fn virtualize_json(value: &Value, config: &SegmentConfig) -> Option<Vec<Fragment>> {
    let parsed;
    let target = match value {
        Value::String(s) => {
            parsed = parse_embedded_json(s)?;
            &parsed
        }
        other => other,
    };

    let mut fragments = Vec::new();
    emit(target, &mut fragments, config);
    drop_trailing_separator(&mut fragments);
    Some(fragments)
}

/// Cheap structural check before parsing: a full parse-and-catch on every
/// cell value would be wasted work for the common plain-string case.
fn parse_embedded_json(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    let looks_like_json = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if !looks_like_json {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

fn emit(value: &Value, out: &mut Vec<Fragment>, config: &SegmentConfig) {
    match value {
        Value::Array(items) => {
            out.push(Fragment::punctuation("["));
            for item in items {
                if out.len() > config.max_json_nodes {
                    emit_opaque(item, out);
                } else {
                    emit(item, out, config);
                }
            }
            drop_trailing_separator(out);
            out.push(Fragment::punctuation("]"));
            out.push(Fragment::punctuation(","));
        }
        Value::Object(map) => {
            out.push(Fragment::punctuation("{"));
            for (key, item) in map {
                out.push(Fragment::key(key));
                // Past the node ceiling remaining values are emitted opaque,
                // without recursive pretty-printing.
                if out.len() > config.max_json_nodes {
                    emit_opaque(item, out);
                } else {
                    emit(item, out, config);
                }
            }
            drop_trailing_separator(out);
            out.push(Fragment::punctuation("}"));
            out.push(Fragment::punctuation(","));
        }
        Value::String(s) => {
            let decoded = markup::decode_entities(s);
            out.push(Fragment::punctuation("\""));
            out.push(Fragment::value(
                markup::strip_marks(&decoded),
                markup::contains_mark(&decoded),
            ));
            out.push(Fragment::punctuation("\""));
            out.push(Fragment::punctuation(","));
        }
        scalar => {
            out.push(Fragment::value(scalar.to_string(), false));
            out.push(Fragment::punctuation(","));
        }
    }
}

/// Single compact-JSON fragment for a value past the node ceiling.
fn emit_opaque(value: &Value, out: &mut Vec<Fragment>) {
    let serialized = serde_json::to_string(value).unwrap_or_default();
    let decoded = markup::decode_entities(&serialized);
    out.push(Fragment::value(
        markup::strip_marks(&decoded),
        markup::contains_mark(&decoded),
    ));
    out.push(Fragment::punctuation(","));
}

/// Drop a single dangling `,` so no separator ever precedes a closer or
/// ends the sequence.
fn drop_trailing_separator(out: &mut Vec<Fragment>) {
    if matches!(
        out.last(),
        Some(f) if f.kind == FragmentKind::Punctuation && f.text == ","
    ) {
        out.pop();
    }
}
