use crate::segmenter::WordSegmenter;
use logseg_types::{markup, SegmentConfig, Token};
use regex::Regex;
use std::sync::LazyLock;

static MARK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<mark>(.*?)</mark>").expect("valid marker regex"));

/// One alternating run of the marker split: the content between (or outside)
/// a marker pair, with the markers themselves stripped.
#[derive(Debug, Clone)]
struct Run {
    text: String,
    is_mark: bool,
}

/// Split `s` on the highlight-marker pair into ordered marked/unmarked runs.
///
/// Unbalanced or nested markers are not parsed as markup; whatever the regex
/// does not match stays literal text in an unmarked run.
fn split_mark_runs(s: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut last = 0;

    for captures in MARK_RUN.captures_iter(s) {
        let whole = captures.get(0).expect("match");
        if whole.start() > last {
            runs.push(Run {
                text: s[last..whole.start()].to_string(),
                is_mark: false,
            });
        }
        runs.push(Run {
            text: captures.get(1).expect("capture").as_str().to_string(),
            is_mark: true,
        });
        last = whole.end();
    }

    if last < s.len() {
        runs.push(Run {
            text: s[last..].to_string(),
            is_mark: false,
        });
    }
    runs
}

/// Slice `text` into fixed-size char chunks, the last one possibly shorter.
fn char_chunks(text: &str, size: usize) -> Vec<String> {
    let size = size.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == size {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Tokenize one rendered value into a bounded, mark-preserving sequence.
///
/// Word segmentation runs until `max_word_tokens` is spent; whatever remains
/// degrades to the chunked fallback so pathological inputs (huge strings,
/// no natural boundaries) produce many small blob tokens instead of an
/// unbounded list or one huge unclickable token. With `split_words` off the
/// whole value becomes a single atomic token.
///
/// Concatenating the returned tokens' text reconstructs `s` with the
/// markers stripped. Offsets are left for the caller to assign.
pub fn optimized_split(
    s: &str,
    split_words: bool,
    segmenter: &dyn WordSegmenter,
    config: &SegmentConfig,
) -> Vec<Token> {
    if !split_words {
        return vec![Token::new(markup::strip_marks(s))
            .with_mark(markup::contains_mark(s))
            .with_cursor_text(true)];
    }

    let runs = split_mark_runs(s);
    let mut tokens = Vec::new();
    let mut fallback: Vec<Run> = Vec::new();
    let mut budget = config.max_word_tokens;

    for (index, run) in runs.iter().enumerate() {
        if budget == 0 {
            fallback.extend(runs[index..].iter().cloned());
            break;
        }

        let units = segmenter.segment(&run.text, budget);
        budget -= units.len();
        let covered: usize = units.iter().map(|u| u.text.len()).sum();

        for unit in units {
            tokens.push(
                Token::new(unit.text)
                    .with_mark(run.is_mark)
                    .with_cursor_text(!unit.is_delimiter),
            );
        }

        // Budget ran out mid-run: the uncovered suffix and every later run
        // go through the chunked fallback.
        if covered < run.text.len() {
            fallback.push(Run {
                text: run.text[covered..].to_string(),
                is_mark: run.is_mark,
            });
            fallback.extend(runs[index + 1..].iter().cloned());
            break;
        }
    }

    for run in fallback {
        if run.is_mark {
            tokens.push(Token::new(run.text).with_mark(true));
        } else {
            for chunk in char_chunks(&run.text, config.chunk_size) {
                tokens.push(Token::new(chunk).with_blob_word(true));
            }
        }
    }

    tokens
}
