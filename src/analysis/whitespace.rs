//! Whitespace tokenizer implementation.

use super::Tokenizer;

/// A tokenizer that splits text on runs of whitespace, with no lowercasing.
///
/// Useful when the default split pattern is too aggressive — for example,
/// emoji and many symbols fall into `\p{S}` and would be treated as token
/// boundaries by [`RegexTokenizer`](super::RegexTokenizer).
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
