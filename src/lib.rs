//! # Tokdist
//!
//! A token-aware weighted edit distance for Rust.
//!
//! Tokdist computes a generalized Damerau–Levenshtein distance between two
//! strings with separately configurable costs for insertions/deletions,
//! substitutions, adjacent transpositions, and duplicated characters, plus
//! penalties tied to token structure: token-initial edits, token-separator
//! substitutions, token-count changes, and a steep discount for strings that
//! differ only in where their token separators sit.
//!
//! ## Features
//!
//! - Pure Rust implementation operating on Unicode scalar values
//! - Configurable costs and penalties via a builder
//! - Absolute and length-normalized edit limits with early termination,
//!   optionally enforced per token
//! - Pluggable tokenization (regex-based default, or any custom function)
//!
//! ## Example
//!
//! ```
//! use tokdist::{EditConfig, TokenAwareEditDistance};
//!
//! let ed = TokenAwareEditDistance::new(EditConfig::default());
//! assert_eq!(ed.distance("dog", "dog"), 0.0);
//! assert!((ed.distance("abcde", "abdce") - 1.25).abs() < 1e-5); // one swap
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod distance;
pub mod error;

pub use config::{EditConfig, EditConfigBuilder, NormType};
pub use distance::{TokenAwareEditDistance, OVER_LIMIT};
pub use error::{Result, TokdistError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
