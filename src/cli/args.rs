//! Command line argument parsing for the tokdist CLI using clap.

use clap::Parser;

use crate::config::{EditConfig, NormType, DEFAULT_TOKEN_SPLIT};
use crate::error::Result;

/// tokdist - token-aware weighted edit distance between strings
///
/// Compares two strings given on the command line, or every tab-separated
/// pair in a file. Each comparison prints `<dist>\t<input1>\t<input2>`, with
/// `9999` standing in for an over-limit result.
#[derive(Parser, Debug, Clone)]
#[command(name = "tokdist")]
#[command(about = "Token-aware weighted edit distance between strings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TokdistArgs {
    /// Verbosity level (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Raw edit distance limit; 0 indicates no limit
    #[arg(short = 'l', long = "edit-limit", default_value_t = 2.0)]
    pub edit_limit: f32,

    /// Percentage edit distance limit; 0 indicates no limit
    #[arg(short = 'p', long = "norm-edit-limit", default_value_t = 0.0)]
    pub norm_edit_limit: f32,

    /// Disable applying limits per token
    #[arg(long = "disable-per-token-limit", alias = "dp")]
    pub disable_per_token_limit: bool,

    /// Normalization based on longer string (max), shorter string (min), or
    /// first string (first)
    #[arg(short = 'n', long = "norm-type", value_enum, default_value = "max")]
    pub norm_type: NormType,

    /// Reduced cost for inserting or deleting duplicate letters [abc / abbc]
    #[arg(short = 'd', long = "dupe-cost", default_value_t = 0.05)]
    pub dupe_cost: f32,

    /// Cost for insertions or deletions [abc / ab]
    #[arg(short = 'i', long = "ins-del-cost", default_value_t = 1.0)]
    pub ins_del_cost: f32,

    /// Cost for substitutions [abc / axc]
    #[arg(short = 's', long = "subst-cost", default_value_t = 1.0)]
    pub subst_cost: f32,

    /// Cost for swaps/transpositions [abc / acb]
    #[arg(short = 'w', long = "swap-cost", default_value_t = 1.25)]
    pub swap_cost: f32,

    /// Additional penalty for changing digits [a7c / a8c]
    #[arg(short = 'c', long = "digit-change-penalty", default_value_t = 0.33)]
    pub digit_change_penalty: f32,

    /// Additional penalty for changing the first letter of a token [abc / xbc]
    #[arg(short = 't', long = "token-initial-penalty", default_value_t = 0.25)]
    pub token_initial_penalty: f32,

    /// Additional penalty for changing the number of tokens
    #[arg(short = 'T', long = "token-delta-penalty", default_value_t = 0.25)]
    pub token_delta_penalty: f32,

    /// Additional penalty for changing a token separator (space by default)
    #[arg(short = 'S', long = "token-sep-subst-penalty", default_value_t = 0.50)]
    pub token_sep_subst_penalty: f32,

    /// Reduced cost for edits that only involve spaces [abcd / ab cd]
    #[arg(short = 'P', long = "space-only-cost", default_value_t = 0.1)]
    pub space_only_cost: f32,

    /// Token separator character
    #[arg(long = "token-sep", alias = "sep", default_value_t = ' ')]
    pub token_sep: char,

    /// Regex for splitting tokens
    #[arg(long = "token-split", alias = "spl", default_value = DEFAULT_TOKEN_SPLIT)]
    pub token_split: String,

    /// Two strings to compare, or one tab-separated file of pairs
    #[arg(value_name = "INPUT", required = true, num_args = 1..=2)]
    pub inputs: Vec<String>,
}

impl TokdistArgs {
    /// Build an [`EditConfig`] from the parsed arguments.
    pub fn to_config(&self) -> Result<EditConfig> {
        EditConfig::builder()
            .default_limit(self.edit_limit)
            .default_norm_limit(self.norm_edit_limit)
            .per_token_limit(!self.disable_per_token_limit)
            .norm_type(self.norm_type)
            .ins_del_cost(self.ins_del_cost)
            .subst_cost(self.subst_cost)
            .swap_cost(self.swap_cost)
            .duplicate_cost(self.dupe_cost)
            .digit_change_penalty(self.digit_change_penalty)
            .token_initial_penalty(self.token_initial_penalty)
            .token_sep_subst_penalty(self.token_sep_subst_penalty)
            .token_delta_penalty(self.token_delta_penalty)
            .space_only_cost(self.space_only_cost)
            .token_sep(self.token_sep)
            .token_split(self.token_split.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_two_string_comparison() {
        let args = TokdistArgs::try_parse_from(["tokdist", "abc", "abd"]).unwrap();

        assert_eq!(args.inputs, vec!["abc", "abd"]);
        assert_eq!(args.edit_limit, 2.0);
        assert_eq!(args.norm_edit_limit, 0.0);
        assert!(!args.disable_per_token_limit);
        assert!(matches!(args.norm_type, NormType::Max));
    }

    #[test]
    fn test_single_file_argument() {
        let args = TokdistArgs::try_parse_from(["tokdist", "pairs.tab"]).unwrap();
        assert_eq!(args.inputs, vec!["pairs.tab"]);
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(TokdistArgs::try_parse_from(["tokdist"]).is_err());
        assert!(TokdistArgs::try_parse_from(["tokdist", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_cost_flags() {
        let args = TokdistArgs::try_parse_from([
            "tokdist", "-l", "10", "-p", "0.25", "-w", "0.75", "-i", "1.1", "-d", "0.5", "a", "b",
        ])
        .unwrap();

        assert_eq!(args.edit_limit, 10.0);
        assert_eq!(args.norm_edit_limit, 0.25);
        assert_eq!(args.swap_cost, 0.75);
        assert_eq!(args.ins_del_cost, 1.1);
        assert_eq!(args.dupe_cost, 0.5);
    }

    #[test]
    fn test_norm_type_values() {
        let args =
            TokdistArgs::try_parse_from(["tokdist", "--norm-type", "min", "a", "b"]).unwrap();
        assert!(matches!(args.norm_type, NormType::Min));

        let args = TokdistArgs::try_parse_from(["tokdist", "-n", "first", "a", "b"]).unwrap();
        assert!(matches!(args.norm_type, NormType::First));

        assert!(TokdistArgs::try_parse_from(["tokdist", "-n", "median", "a", "b"]).is_err());
    }

    #[test]
    fn test_aliases() {
        let args = TokdistArgs::try_parse_from([
            "tokdist", "--sep", "|", "--spl", "[aeiouy]+", "--dp", "a", "b",
        ])
        .unwrap();

        assert_eq!(args.token_sep, '|');
        assert_eq!(args.token_split, "[aeiouy]+");
        assert!(args.disable_per_token_limit);
    }

    #[test]
    fn test_to_config() {
        let args = TokdistArgs::try_parse_from([
            "tokdist", "--norm-type", "min", "--dp", "-w", "0.9", "a", "b",
        ])
        .unwrap();
        let config = args.to_config().unwrap();

        assert_eq!(config.norm_type(), NormType::Min);
        assert!(!config.per_token_limit());
        assert_eq!(config.swap_cost(), 0.9);
    }

    #[test]
    fn test_invalid_split_pattern_fails_config() {
        let args = TokdistArgs::try_parse_from(["tokdist", "--spl", "[oops", "a", "b"]).unwrap();
        assert!(args.to_config().is_err());
    }
}
