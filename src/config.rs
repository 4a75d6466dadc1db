//! Configuration for the token-aware edit distance.
//!
//! An [`EditConfig`] bundles every cost, penalty, and limit the engine
//! consults, together with the tokenizer used to canonicalize inputs. It is
//! built once through [`EditConfigBuilder`] and shared read-only afterwards.

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::{default_tokenizer, Tokenizer};
use crate::error::Result;

/// Default regex for splitting tokens: all separators, punctuation, and
/// symbols. This may be too aggressive in some cases (emoji are `\p{S}`).
pub const DEFAULT_TOKEN_SPLIT: &str = r"[\p{Z}\p{P}\p{S}]+";

/// Edit distance length normalization method.
///
/// Selects which string's normalized length a percentage limit is scaled by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NormType {
    /// Normalize against the longer string (default)
    #[default]
    Max,
    /// Normalize against the shorter string
    Min,
    /// Normalize against the first string
    First,
}

/// Immutable configuration for [`TokenAwareEditDistance`](crate::TokenAwareEditDistance).
///
/// All costs and penalties are non-negative; a limit of 0 means "no limit".
#[derive(Clone)]
pub struct EditConfig {
    // Edit distance cost params
    pub(crate) default_limit: f32,
    pub(crate) default_norm_limit: f32,
    pub(crate) ins_del_cost: f32,
    pub(crate) subst_cost: f32,
    pub(crate) swap_cost: f32,
    pub(crate) duplicate_cost: f32,
    pub(crate) digit_change_penalty: f32,
    pub(crate) norm_type: NormType,

    // Token processing params
    pub(crate) token_sep: char,
    pub(crate) token_initial_penalty: f32,
    pub(crate) token_sep_subst_penalty: f32,
    pub(crate) token_delta_penalty: f32,
    pub(crate) space_only_cost: f32,
    pub(crate) per_token_limit: bool,

    // Tokenization params
    pub(crate) locale: Option<String>,
    pub(crate) token_split: String,
    pub(crate) tokenizer: Arc<dyn Tokenizer>,
}

impl EditConfig {
    /// Start building a configuration.
    pub fn builder() -> EditConfigBuilder {
        EditConfigBuilder::new()
    }

    /// Default edit distance limit for early termination.
    pub fn default_limit(&self) -> f32 {
        self.default_limit
    }

    /// Default normalized (percentage) edit distance limit.
    pub fn default_norm_limit(&self) -> f32 {
        self.default_norm_limit
    }

    /// Cost for an insertion or deletion (abc / ac).
    pub fn ins_del_cost(&self) -> f32 {
        self.ins_del_cost
    }

    /// Cost for a substitution (abc / adc).
    pub fn subst_cost(&self) -> f32 {
        self.subst_cost
    }

    /// Cost for transposing two adjacent characters (abc / bac).
    pub fn swap_cost(&self) -> f32 {
        self.swap_cost
    }

    /// Reduced cost for inserting or deleting a duplicated character (abc / abbc).
    pub fn duplicate_cost(&self) -> f32 {
        self.duplicate_cost
    }

    /// Additional cost when both endpoints of an edit are digits.
    ///
    /// Note: if this exceeds `ins_del_cost`, deleting one digit and inserting
    /// the other is cheaper, so the effective penalty caps at `ins_del_cost`.
    pub fn digit_change_penalty(&self) -> f32 {
        self.digit_change_penalty
    }

    /// The normalization method for percentage limits.
    pub fn norm_type(&self) -> NormType {
        self.norm_type
    }

    /// The character separating tokens in canonical form.
    pub fn token_sep(&self) -> char {
        self.token_sep
    }

    /// Additional cost for changing the first character of a token.
    pub fn token_initial_penalty(&self) -> f32 {
        self.token_initial_penalty
    }

    /// Additional cost for substituting a token separator.
    pub fn token_sep_subst_penalty(&self) -> f32 {
        self.token_sep_subst_penalty
    }

    /// Cost per token for changing the number of tokens.
    pub fn token_delta_penalty(&self) -> f32 {
        self.token_delta_penalty
    }

    /// Insert/delete cost for separators when the inputs are spacelessly equal.
    pub fn space_only_cost(&self) -> f32 {
        self.space_only_cost
    }

    /// Whether limits are also enforced inside each token.
    pub fn per_token_limit(&self) -> bool {
        self.per_token_limit
    }

    /// The locale tag used for lowercasing, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// The token split pattern the default tokenizer is built from.
    pub fn token_split(&self) -> &str {
        &self.token_split
    }

    /// The tokenizer used to canonicalize inputs.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }
}

impl Default for EditConfig {
    fn default() -> Self {
        EditConfig::builder()
            .build()
            .expect("Default token split pattern should be valid")
    }
}

impl fmt::Debug for EditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditConfig")
            .field("default_limit", &self.default_limit)
            .field("default_norm_limit", &self.default_norm_limit)
            .field("ins_del_cost", &self.ins_del_cost)
            .field("subst_cost", &self.subst_cost)
            .field("swap_cost", &self.swap_cost)
            .field("duplicate_cost", &self.duplicate_cost)
            .field("digit_change_penalty", &self.digit_change_penalty)
            .field("norm_type", &self.norm_type)
            .field("token_sep", &self.token_sep)
            .field("token_initial_penalty", &self.token_initial_penalty)
            .field("token_sep_subst_penalty", &self.token_sep_subst_penalty)
            .field("token_delta_penalty", &self.token_delta_penalty)
            .field("space_only_cost", &self.space_only_cost)
            .field("per_token_limit", &self.per_token_limit)
            .field("locale", &self.locale)
            .field("token_split", &self.token_split)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

/// Staged builder for [`EditConfig`].
///
/// Every option has an independent setter; [`build`](Self::build) finalizes
/// the configuration and, if no tokenizer was injected, synthesizes the
/// default regex tokenizer from `locale` and `token_split`.
pub struct EditConfigBuilder {
    default_limit: f32,
    default_norm_limit: f32,
    ins_del_cost: f32,
    subst_cost: f32,
    swap_cost: f32,
    duplicate_cost: f32,
    digit_change_penalty: f32,
    norm_type: NormType,
    token_sep: char,
    token_initial_penalty: f32,
    token_sep_subst_penalty: f32,
    token_delta_penalty: f32,
    space_only_cost: f32,
    per_token_limit: bool,
    locale: Option<String>,
    token_split: String,
    tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl EditConfigBuilder {
    /// Create a builder populated with the default configuration.
    pub fn new() -> Self {
        EditConfigBuilder {
            default_limit: 2.0,
            default_norm_limit: 0.0,
            ins_del_cost: 1.0,
            subst_cost: 1.0,
            swap_cost: 1.25,
            duplicate_cost: 0.05,
            digit_change_penalty: 0.33,
            norm_type: NormType::Max,
            token_sep: ' ',
            token_initial_penalty: 0.25,
            token_sep_subst_penalty: 0.50,
            token_delta_penalty: 0.25,
            space_only_cost: 0.1,
            per_token_limit: true,
            locale: Some("en".to_string()),
            token_split: DEFAULT_TOKEN_SPLIT.to_string(),
            tokenizer: None,
        }
    }

    /// Set the default edit distance limit (0 = no limit).
    pub fn default_limit(mut self, default_limit: f32) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Set the default normalized edit distance limit (0 = no limit).
    pub fn default_norm_limit(mut self, default_norm_limit: f32) -> Self {
        self.default_norm_limit = default_norm_limit;
        self
    }

    /// Set the insertion/deletion cost.
    pub fn ins_del_cost(mut self, ins_del_cost: f32) -> Self {
        self.ins_del_cost = ins_del_cost;
        self
    }

    /// Set the substitution cost.
    pub fn subst_cost(mut self, subst_cost: f32) -> Self {
        self.subst_cost = subst_cost;
        self
    }

    /// Set the transposition cost.
    pub fn swap_cost(mut self, swap_cost: f32) -> Self {
        self.swap_cost = swap_cost;
        self
    }

    /// Set the duplicated-character insert/delete cost.
    pub fn duplicate_cost(mut self, duplicate_cost: f32) -> Self {
        self.duplicate_cost = duplicate_cost;
        self
    }

    /// Set the digit change penalty.
    pub fn digit_change_penalty(mut self, digit_change_penalty: f32) -> Self {
        self.digit_change_penalty = digit_change_penalty;
        self
    }

    /// Set the normalization method.
    pub fn norm_type(mut self, norm_type: NormType) -> Self {
        self.norm_type = norm_type;
        self
    }

    /// Set the token separator character.
    pub fn token_sep(mut self, token_sep: char) -> Self {
        self.token_sep = token_sep;
        self
    }

    /// Set the token-initial penalty.
    pub fn token_initial_penalty(mut self, token_initial_penalty: f32) -> Self {
        self.token_initial_penalty = token_initial_penalty;
        self
    }

    /// Set the token-separator substitution penalty.
    pub fn token_sep_subst_penalty(mut self, token_sep_subst_penalty: f32) -> Self {
        self.token_sep_subst_penalty = token_sep_subst_penalty;
        self
    }

    /// Set the token-count delta penalty.
    pub fn token_delta_penalty(mut self, token_delta_penalty: f32) -> Self {
        self.token_delta_penalty = token_delta_penalty;
        self
    }

    /// Set the space-only insert/delete cost.
    pub fn space_only_cost(mut self, space_only_cost: f32) -> Self {
        self.space_only_cost = space_only_cost;
        self
    }

    /// Enable or disable per-token limit enforcement.
    pub fn per_token_limit(mut self, per_token_limit: bool) -> Self {
        self.per_token_limit = per_token_limit;
        self
    }

    /// Set the locale tag for lowercasing; `None` disables lowercasing.
    pub fn locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    /// Set the token split pattern for the default tokenizer.
    pub fn token_split<S: Into<String>>(mut self, token_split: S) -> Self {
        self.token_split = token_split.into();
        self
    }

    /// Inject a custom tokenizer, replacing the default one.
    pub fn tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Finalize the configuration.
    ///
    /// Fails only when the default tokenizer must be synthesized and the
    /// token split pattern is not a valid regex.
    pub fn build(self) -> Result<EditConfig> {
        let tokenizer = match self.tokenizer {
            Some(tokenizer) => tokenizer,
            None => Arc::new(default_tokenizer(self.locale.clone(), &self.token_split)?),
        };

        Ok(EditConfig {
            default_limit: self.default_limit,
            default_norm_limit: self.default_norm_limit,
            ins_del_cost: self.ins_del_cost,
            subst_cost: self.subst_cost,
            swap_cost: self.swap_cost,
            duplicate_cost: self.duplicate_cost,
            digit_change_penalty: self.digit_change_penalty,
            norm_type: self.norm_type,
            token_sep: self.token_sep,
            token_initial_penalty: self.token_initial_penalty,
            token_sep_subst_penalty: self.token_sep_subst_penalty,
            token_delta_penalty: self.token_delta_penalty,
            space_only_cost: self.space_only_cost,
            per_token_limit: self.per_token_limit,
            locale: self.locale,
            token_split: self.token_split,
            tokenizer,
        })
    }
}

impl Default for EditConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditConfig::default();

        assert_eq!(config.default_limit(), 2.0);
        assert_eq!(config.default_norm_limit(), 0.0);
        assert_eq!(config.ins_del_cost(), 1.0);
        assert_eq!(config.subst_cost(), 1.0);
        assert_eq!(config.swap_cost(), 1.25);
        assert_eq!(config.duplicate_cost(), 0.05);
        assert_eq!(config.digit_change_penalty(), 0.33);
        assert_eq!(config.norm_type(), NormType::Max);
        assert_eq!(config.token_sep(), ' ');
        assert_eq!(config.token_initial_penalty(), 0.25);
        assert_eq!(config.token_sep_subst_penalty(), 0.50);
        assert_eq!(config.token_delta_penalty(), 0.25);
        assert_eq!(config.space_only_cost(), 0.1);
        assert!(config.per_token_limit());
        assert_eq!(config.locale(), Some("en"));
        assert_eq!(config.token_split(), DEFAULT_TOKEN_SPLIT);
        assert_eq!(config.tokenizer().name(), "regex");
    }

    #[test]
    fn test_builder_setters() {
        let config = EditConfig::builder()
            .ins_del_cost(1.1)
            .swap_cost(0.75)
            .norm_type(NormType::Min)
            .token_sep('|')
            .per_token_limit(false)
            .locale(None)
            .build()
            .unwrap();

        assert_eq!(config.ins_del_cost(), 1.1);
        assert_eq!(config.swap_cost(), 0.75);
        assert_eq!(config.norm_type(), NormType::Min);
        assert_eq!(config.token_sep(), '|');
        assert!(!config.per_token_limit());
        assert_eq!(config.locale(), None);
    }

    #[test]
    fn test_invalid_token_split() {
        let result = EditConfig::builder().token_split("[broken").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_injected_tokenizer() {
        let config = EditConfig::builder()
            .tokenizer(Arc::new(|s: &str| {
                s.split(',').map(str::to_owned).collect::<Vec<String>>()
            }))
            .build()
            .unwrap();

        assert_eq!(config.tokenizer().name(), "custom");
        assert_eq!(config.tokenizer().tokenize("a,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_config_debug_omits_tokenizer_internals() {
        let config = EditConfig::default();
        let debug = format!("{config:?}");
        assert!(debug.contains("\"regex\""));
        assert!(debug.contains("default_limit"));
    }
}
