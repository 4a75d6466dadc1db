//! Regex-based tokenizer implementation.
//!
//! This is the default tokenizer. It optionally lowercases the input, strips
//! any leading and trailing match of the split pattern, and splits on that
//! pattern. It is meant for scripts with separated words (English, Russian,
//! Hindi, Hebrew, ...), not for CJK or Thai.

use std::borrow::Cow;

use regex::Regex;

use super::Tokenizer;
use crate::error::{Result, TokdistError};

/// A tokenizer that splits text on a configurable regular expression.
///
/// The default split pattern `[\p{Z}\p{P}\p{S}]+` treats every run of
/// separators, punctuation, and symbols as a token boundary, which may be too
/// aggressive in some cases; callers can supply their own pattern.
///
/// Lowercasing uses the Unicode default case mapping and is controlled by the
/// `locale` option: `Some(tag)` enables it, `None` disables it. Locale-specific
/// tailorings (such as the Turkish dotted/dotless I) are not applied; callers
/// who need them should inject their own tokenizer.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The pattern tokens are split on
    split: Regex,
    /// Matches a leading or trailing run of the split pattern
    trim: Regex,
    /// Language tag enabling lowercasing; `None` preserves case
    locale: Option<String>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer from a locale and a split pattern.
    pub fn new(locale: Option<String>, token_split: &str) -> Result<Self> {
        let split = Regex::new(token_split)
            .map_err(|e| TokdistError::analysis(format!("invalid token split pattern: {e}")))?;
        let trim = Regex::new(&format!("^(?:{token_split})|(?:{token_split})$"))
            .map_err(|e| TokdistError::analysis(format!("invalid token split pattern: {e}")))?;

        Ok(RegexTokenizer {
            split,
            trim,
            locale,
        })
    }

    /// Get the split pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.split.as_str()
    }

    /// Get the locale tag, if lowercasing is enabled.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.locale.is_some() {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };
        let trimmed = self.trim.replace_all(&text, "");

        self.split.split(&trimmed).map(str::to_owned).collect()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
