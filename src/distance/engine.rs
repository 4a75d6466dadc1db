//! Top-level distance computation.

use log::trace;

use super::cell::EditCell;
use super::item::EditItem;
use super::row::EditRow;
use super::{ComparisonInfo, OVER_LIMIT};
use crate::config::{EditConfig, NormType};

/// Token-aware weighted edit distance calculator.
///
/// Computes a modified Damerau–Levenshtein distance (insertions, deletions,
/// substitutions, transpositions) that also accounts for duplicated
/// characters, multi-token strings, token-initial character changes,
/// per-string and per-token edit limits, length-proportional edit limits,
/// token-count differences, and strings that differ only by tokenization.
///
/// Each instance wraps an immutable [`EditConfig`]; a single instance can be
/// shared freely across threads, and every call is a pure function of its
/// inputs and that configuration.
pub struct TokenAwareEditDistance {
    config: EditConfig,
}

impl TokenAwareEditDistance {
    /// Create a calculator from a finalized configuration.
    pub fn new(config: EditConfig) -> Self {
        TokenAwareEditDistance { config }
    }

    /// The configuration this calculator was built with.
    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    /// Compute the cost of weighted edits required to transform `str1` into
    /// `str2`, using the configuration's default edit limits.
    ///
    /// Rust has no null strings; the empty string plays that role and is
    /// accepted symmetrically on either side.
    ///
    /// Returns [`OVER_LIMIT`] for early termination or when the distance is
    /// over either limit.
    pub fn distance(&self, str1: &str, str2: &str) -> f32 {
        self.distance_with_limits(
            str1,
            str2,
            self.config.default_limit,
            self.config.default_norm_limit,
        )
    }

    /// Compute the cost of weighted edits required to transform `str1` into
    /// `str2`.
    ///
    /// Allowed edits include inserting, deleting, substituting, transposing,
    /// or (de-)duplicating characters. Additional penalties are applied for
    /// changing the first character of a token, changing the number of
    /// tokens, or modifying digits. Strings that are equal modulo the token
    /// separator get special discounted processing.
    ///
    /// `edit_limit` caps the total cost and `edit_norm_limit` caps it as a
    /// proportion of the normalized length (0 = no limit, for both). When
    /// per-token limits are enabled in the configuration, the same caps are
    /// enforced within each token. Over-limit comparisons terminate early
    /// and return [`OVER_LIMIT`].
    pub fn distance_with_limits(
        &self,
        str1: &str,
        str2: &str,
        edit_limit: f32,
        edit_norm_limit: f32,
    ) -> f32 {
        let item1 = EditItem::new(str1, &self.config);
        let item2 = EditItem::new(str2, &self.config);

        // check for simple equality (after tokenization, not of the
        // original strings)
        if item1.text == item2.text {
            return 0.0;
        }

        let info = ComparisonInfo::new(
            edit_limit,
            edit_norm_limit,
            item1.spaceless_text == item2.spaceless_text,
        );

        if item1.is_empty() || item2.is_empty() {
            // max is the non-zero normalized length
            return self.empty_input_result(
                item1.norm_length.max(item2.norm_length),
                item1.len(),
                &info,
            );
        }

        let token_diff_penalty = item1.token_diff_penalty(&item2, &info);

        let limits_exist = edit_limit > 0.0 || edit_norm_limit > 0.0;
        let mut adjusted_edit_limit = 0.0;

        if limits_exist {
            adjusted_edit_limit =
                self.adjusted_edit_limit(item1.norm_length, item2.norm_length, &info)
                    - token_diff_penalty;

            // early termination based on unique characters, or on token
            // diffs when the penalty already ate the whole limit (the
            // minimum cost below is always >= 0)
            if adjusted_edit_limit < item1.unique_char_min_cost(&item2) {
                trace!("early termination: unique-character lower bound over limit");
                return OVER_LIMIT;
            }
        }

        // Since we aren't recovering the edit path, just the total cost,
        // three working rows suffice: swaps look back two rows, so we keep
        // the row before the current one around.
        let per_token_limit = self.config.per_token_limit;

        let mut row_prev = EditRow::new(&item2);
        let mut row_curr = EditRow::new(&item2);
        let mut row_next = EditRow::new(&item2);

        row_curr.init_first_row(&item2, &info);

        // for each scalar of item1, fill row_next from row_curr (row_prev
        // stays available for swap checks)
        for i in 0..item1.len() {
            let mut row_min = row_next.init_first_cell(&row_curr, &item1, i, &info);

            for j in 0..item2.len() {
                // is either string at a token separator?
                let at_token_edge = item1.is_token_sep(i) || item2.is_token_sep(j);

                // substitution vs equality: start from the diagonal; the
                // substitution cost is 0 when the scalars are equal
                let mut min_cost = EditCell::default();
                min_cost.set_costs_and_check_token_edge(
                    &row_curr.cells[j],
                    at_token_edge,
                    per_token_limit,
                    &info,
                );
                min_cost.increment_costs(item1.subst_cost(i, &item2, j));

                // swap: costs from two rows back, diagonally
                if item1.is_swapped(i, &item2, j) {
                    let mut next_cost = EditCell::default();
                    next_cost.set_costs_and_check_token_edge(
                        &row_prev.cells[j - 1],
                        at_token_edge,
                        per_token_limit,
                        &info,
                    );
                    next_cost.increment_costs(item1.swap_cost(i, &item2, j));
                    min_cost.set_if_costs_less(&next_cost);
                }

                // insertion: from the previous column of this row
                let mut next_cost = EditCell::default();
                next_cost.set_costs_and_check_token_edge(
                    &row_next.cells[j],
                    at_token_edge,
                    per_token_limit,
                    &info,
                );
                next_cost.increment_costs(item2.ins_del_cost(j, &info));
                min_cost.set_if_costs_less(&next_cost);

                // deletion: from the row above
                let mut next_cost = EditCell::default();
                next_cost.set_costs_and_check_token_edge(
                    &row_curr.cells[j + 1],
                    at_token_edge,
                    per_token_limit,
                    &info,
                );
                next_cost.increment_costs(item1.ins_del_cost(i, &info));
                min_cost.set_if_costs_less(&next_cost);

                // the normalized length of the current token so far builds
                // on the cell to the left and the cell above
                let token_norm_length = self.token_norm_length(
                    &item1,
                    &item2,
                    i,
                    j,
                    row_next.cells[j].token_norm_length,
                    row_curr.cells[j + 1].token_norm_length,
                );

                let target = &mut row_next.cells[j + 1];
                target.set_costs(&min_cost);
                target.set_token_norm_length(token_norm_length);

                // at a token boundary, start a new token
                if at_token_edge {
                    target.start_new_token();
                }

                row_min = row_min.min(target.cost);
            }

            // rotate rows: curr becomes the most up-to-date
            std::mem::swap(&mut row_curr, &mut row_next);
            std::mem::swap(&mut row_next, &mut row_prev);

            if limits_exist && row_min > adjusted_edit_limit {
                trace!("early termination: row minimum over adjusted limit");
                return OVER_LIMIT;
            }
        }

        let end = &row_curr.cells[item2.len()];

        // the final token may have too many edits
        if end.is_over_token_edit_limit(per_token_limit, &info) {
            return OVER_LIMIT;
        }

        // the whole string may have too many edits
        if limits_exist && end.cost > adjusted_edit_limit {
            return OVER_LIMIT;
        }

        end.cost + token_diff_penalty
    }

    /// The maximum normalized edit limit, scaled by the normalized lengths
    /// according to the configured normalization method.
    fn edit_norm_limit_by_type(&self, len1: f32, len2: f32, info: &ComparisonInfo) -> f32 {
        if info.curr_edit_norm_limit <= 0.0 {
            // no normalized limit
            return 0.0;
        }

        match self.config.norm_type {
            NormType::Min => info.curr_edit_norm_limit * len1.min(len2),
            NormType::First => info.curr_edit_norm_limit * len1,
            NormType::Max => info.curr_edit_norm_limit * len1.max(len2),
        }
    }

    /// The "adjusted" edit limit actually used for early termination.
    ///
    /// When both limits are in effect the lower one wins; when either is
    /// inactive the other applies (and 0 means no limit at all). If swaps
    /// are cheaper than insertions, cost can go *down* from one row to the
    /// next, so the limit is widened by the difference to keep per-row
    /// pruning sound.
    fn adjusted_edit_limit(&self, len1: f32, len2: f32, info: &ComparisonInfo) -> f32 {
        let norm_edit_max = self.edit_norm_limit_by_type(len1, len2, info);

        let mut adj_limit = if info.curr_edit_limit > 0.0 && norm_edit_max > 0.0 {
            info.curr_edit_limit.min(norm_edit_max)
        } else {
            info.curr_edit_limit.max(norm_edit_max)
        };

        if self.config.swap_cost < self.config.ins_del_cost {
            adj_limit += self.config.ins_del_cost - self.config.swap_cost;
        }

        adj_limit
    }

    /// The normalized length of the token so far, built from the cell to the
    /// left and the cell above according to the normalization method.
    fn token_norm_length(
        &self,
        item1: &EditItem<'_>,
        item2: &EditItem<'_>,
        idx1: usize,
        idx2: usize,
        tnl_left: f32,
        tnl_above: f32,
    ) -> f32 {
        // increments come with the duplicate discount
        let incr_left = if item2.is_duplicate(idx2) {
            self.config.duplicate_cost
        } else {
            self.config.ins_del_cost
        };
        let incr_above = if item1.is_duplicate(idx1) {
            self.config.duplicate_cost
        } else {
            self.config.ins_del_cost
        };

        match self.config.norm_type {
            NormType::Min => (tnl_left + incr_left).min(tnl_above + incr_above),

            NormType::First => {
                if item2.is_token_start(idx2) {
                    // at the start of a token in item2, build on the cell
                    // above
                    tnl_above + incr_above
                } else {
                    // otherwise just carry the value from the left
                    tnl_left
                }
            }

            NormType::Max => {
                let incr_left = if item1.is_token_start(idx1) {
                    incr_left
                } else {
                    0.0
                };
                let incr_above = if idx1 == 0 || item2.is_token_start(idx2) {
                    incr_above
                } else {
                    0.0
                };
                (tnl_left + incr_left).max(tnl_above + incr_above)
            }
        }
    }

    /// The return value (finite or infinite) when one of the inputs is
    /// empty, based on the proposed value and the limits in effect.
    ///
    /// `ret_val` is the normalized length of the non-empty input and
    /// `first_len` the scalar count of the first one. With a normalized
    /// limit in effect the distance against an empty string is 100% of the
    /// longer input, so only a limit of at least 1 can pass — and under MIN
    /// (or FIRST with an empty first input) the scaled limit is 0, which
    /// nothing can pass.
    fn empty_input_result(&self, ret_val: f32, first_len: usize, info: &ComparisonInfo) -> f32 {
        // zero only when both inputs are empty, which the equality fast
        // path already handled; play it safe
        if ret_val == 0.0 {
            return ret_val;
        }

        if info.curr_edit_limit > 0.0 && ret_val > info.curr_edit_limit {
            return OVER_LIMIT;
        }

        if info.curr_edit_norm_limit > 0.0
            && (self.config.norm_type == NormType::Min
                || (self.config.norm_type == NormType::First && first_len == 0)
                || info.curr_edit_norm_limit < 1.0)
        {
            return OVER_LIMIT;
        }

        ret_val
    }
}
