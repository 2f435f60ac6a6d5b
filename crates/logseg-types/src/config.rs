use serde::{Deserialize, Serialize};

/// Structural bounds for the tokenization pipeline.
///
/// Exposed as configuration so the bounding behavior stays testable at
/// small scale; the defaults are sized for interactive table rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Word tokens emitted per value before falling back to blob chunking.
    #[serde(default = "default_max_word_tokens")]
    pub max_word_tokens: usize,
    /// Char length of a single blob token in the chunked fallback.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Fragments emitted by the JSON virtualizer before remaining values are
    /// rendered as opaque compact JSON.
    #[serde(default = "default_max_json_nodes")]
    pub max_json_nodes: usize,
}

fn default_max_word_tokens() -> usize {
    500
}

fn default_chunk_size() -> usize {
    200
}

fn default_max_json_nodes() -> usize {
    1000
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            max_word_tokens: default_max_word_tokens(),
            chunk_size: default_chunk_size(),
            max_json_nodes: default_max_json_nodes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: SegmentConfig = serde_json::from_str(r#"{"chunk_size": 16}"#).unwrap();
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.max_word_tokens, 500);
        assert_eq!(config.max_json_nodes, 1000);
    }
}
