//! Tokenizer implementations for splitting inputs into tokens.
//!
//! The distance engine never re-examines raw input after tokenization: a
//! tokenizer turns a string into an ordered sequence of tokens, and the
//! engine joins those with the configured separator to build its canonical
//! form. Any function from `&str` to `Vec<String>` can serve as a tokenizer.

use crate::error::Result;

/// Trait for tokenizers that convert text into a sequence of tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered list of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Any `Fn(&str) -> Vec<String>` closure is a tokenizer.
impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

// Individual tokenizer modules
pub mod regex;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use regex::RegexTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Build the default tokenizer for the given locale and split pattern.
pub fn default_tokenizer(locale: Option<String>, token_split: &str) -> Result<RegexTokenizer> {
    RegexTokenizer::new(locale, token_split)
}
