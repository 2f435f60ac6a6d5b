use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// One unit returned by a [`WordSegmenter`]: either word content or a
/// boundary/delimiter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentUnit {
    pub text: String,
    pub is_delimiter: bool,
}

impl SegmentUnit {
    fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_delimiter: false,
        }
    }

    fn delimiter(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_delimiter: true,
        }
    }
}

/// Strategy interface for word-boundary segmentation.
///
/// Contract: at most `max_units` units are returned, and concatenating their
/// `text` reconstructs a prefix of the input (the whole input when the
/// budget suffices). The chunked tokenizer handles any uncovered suffix, so
/// implementations never need to truncate or merge content.
pub trait WordSegmenter {
    fn segment(&self, text: &str, max_units: usize) -> Vec<SegmentUnit>;
}

/// Default segmenter: UAX-29 word boundaries.
///
/// A unit without any alphanumeric char counts as a delimiter (whitespace,
/// punctuation runs), matching how the upstream analyzer distinguishes
/// clickable words from separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl WordSegmenter for UnicodeSegmenter {
    fn segment(&self, text: &str, max_units: usize) -> Vec<SegmentUnit> {
        let mut units = Vec::new();
        for piece in text.split_word_bounds() {
            if units.len() >= max_units {
                break;
            }
            if piece.chars().any(char::is_alphanumeric) {
                units.push(SegmentUnit::word(piece));
            } else {
                units.push(SegmentUnit::delimiter(piece));
            }
        }
        units
    }
}

/// Segmenter driven by an explicit boundary-character set
/// (a field's `tokenize_on_chars` override). Every boundary char becomes
/// its own delimiter unit.
#[derive(Debug, Clone)]
pub struct CharSetSegmenter {
    boundaries: HashSet<char>,
}

impl CharSetSegmenter {
    pub fn new(chars: &str) -> Self {
        Self {
            boundaries: chars.chars().collect(),
        }
    }
}

impl WordSegmenter for CharSetSegmenter {
    fn segment(&self, text: &str, max_units: usize) -> Vec<SegmentUnit> {
        let mut units = Vec::new();
        let mut word = String::new();

        for ch in text.chars() {
            if self.boundaries.contains(&ch) {
                if !word.is_empty() {
                    if units.len() >= max_units {
                        return units;
                    }
                    units.push(SegmentUnit::word(std::mem::take(&mut word)));
                }
                if units.len() >= max_units {
                    return units;
                }
                units.push(SegmentUnit::delimiter(ch.to_string()));
            } else {
                word.push(ch);
            }
        }

        if !word.is_empty() && units.len() < max_units {
            units.push(SegmentUnit::word(word));
        }
        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(units: &[SegmentUnit]) -> String {
        units.iter().map(|u| u.text.as_str()).collect()
    }

    #[test]
    fn unicode_segmenter_reconstructs_input() {
        let text = "GET /api/v1?q=1 took 12ms";
        let units = UnicodeSegmenter.segment(text, usize::MAX);
        assert_eq!(joined(&units), text);
        assert!(units.iter().any(|u| u.text == "api" && !u.is_delimiter));
        assert!(units.iter().any(|u| u.text == "/" && u.is_delimiter));
    }

    #[test]
    fn unicode_segmenter_respects_the_budget() {
        let units = UnicodeSegmenter.segment("a b c d e", 3);
        assert_eq!(units.len(), 3);
        assert_eq!(joined(&units), "a b");
        assert!("a b c d e".starts_with(&joined(&units)));
    }

    #[test]
    fn charset_segmenter_splits_on_explicit_boundaries() {
        let segmenter = CharSetSegmenter::new(",|");
        let units = segmenter.segment("a,b|cd", usize::MAX);
        assert_eq!(joined(&units), "a,b|cd");
        let delims: Vec<&str> = units
            .iter()
            .filter(|u| u.is_delimiter)
            .map(|u| u.text.as_str())
            .collect();
        assert_eq!(delims, vec![",", "|"]);
    }

    #[test]
    fn charset_segmenter_covers_a_prefix_when_budgeted() {
        let segmenter = CharSetSegmenter::new(",");
        let units = segmenter.segment("aa,bb,cc", 2);
        assert_eq!(units.len(), 2);
        assert_eq!(joined(&units), "aa,");
    }

    #[test]
    fn charset_segmenter_without_boundary_hits_is_one_word() {
        let segmenter = CharSetSegmenter::new(";");
        let units = segmenter.segment("abc", usize::MAX);
        assert_eq!(units.len(), 1);
        assert!(!units[0].is_delimiter);
    }
}
