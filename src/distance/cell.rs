//! One cell of the edit distance table.

use super::{ComparisonInfo, OVER_LIMIT};

/// A single cell of the dynamic-programming table.
///
/// Plain Levenshtein needs one integer per cell. Here every cell also tracks
/// how much of its cost accrued inside the current token and how long that
/// token is so far (duplicate-discounted), so per-token limits can be checked
/// the moment a path crosses a token boundary.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct EditCell {
    /// Cost of the cheapest path to this cell
    pub(crate) cost: f32,
    /// Cost accrued since this path entered the current token
    pub(crate) token_cost: f32,
    /// Normalized length of the current token so far
    pub(crate) token_norm_length: f32,
}

impl EditCell {
    /// Copy `cost` and `token_cost` from another cell; `token_norm_length`
    /// is left alone (it is recomputed separately).
    pub(crate) fn set_costs(&mut self, other: &EditCell) {
        self.cost = other.cost;
        self.token_cost = other.token_cost;
    }

    /// Copy costs from a source cell and, when stepping across a token edge,
    /// poison the transition if the source already blew its token budget.
    ///
    /// This is the only place the per-token limit becomes a hard gate: a
    /// poisoned transition carries infinite cost, so any path through it is
    /// dominated by cheaper alternatives.
    pub(crate) fn set_costs_and_check_token_edge(
        &mut self,
        other: &EditCell,
        at_token_edge: bool,
        per_token_limit: bool,
        info: &ComparisonInfo,
    ) {
        self.cost = other.cost;
        self.token_cost = other.token_cost;
        if at_token_edge
            && per_token_limit
            && !info.spaceless_equals
            && other.is_over_token_edit_limit(per_token_limit, info)
        {
            self.cost = OVER_LIMIT;
        }
    }

    /// New token, same old string; reset per-token values to 0.
    pub(crate) fn start_new_token(&mut self) {
        self.token_cost = 0.0;
        self.token_norm_length = 0.0;
    }

    /// Update both costs by the same amount (cost and token cost tend to
    /// increment together).
    pub(crate) fn increment_costs(&mut self, incr: f32) {
        self.cost += incr;
        self.token_cost += incr;
    }

    pub(crate) fn set_token_norm_length(&mut self, token_norm_length: f32) {
        self.token_norm_length = token_norm_length;
    }

    /// Replace this cell's costs with the other's when the other path is
    /// strictly cheaper; ties keep the current candidate.
    pub(crate) fn set_if_costs_less(&mut self, other: &EditCell) {
        if other.cost < self.cost {
            self.set_costs(other);
        }
    }

    /// Does the current token have too many edits?
    ///
    /// Never true when per-token limits are off or the strings have spaceless
    /// equality.
    pub(crate) fn is_over_token_edit_limit(
        &self,
        per_token_limit: bool,
        info: &ComparisonInfo,
    ) -> bool {
        if !per_token_limit || info.spaceless_equals {
            return false;
        }

        if info.curr_edit_limit > 0.0 && self.token_cost > info.curr_edit_limit {
            // too many edits by the raw numbers
            return true;
        }
        if info.curr_edit_norm_limit > 0.0
            && self.token_cost > self.token_norm_length * info.curr_edit_norm_limit
        {
            // too many edits as a percentage of this token's length
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(cost: f32, token_cost: f32, token_norm_length: f32) -> EditCell {
        EditCell {
            cost,
            token_cost,
            token_norm_length,
        }
    }

    #[test]
    fn test_set_costs_keeps_token_norm_length() {
        let mut target = cell(0.0, 0.0, 7.0);
        target.set_costs(&cell(2.0, 1.0, 3.0));

        assert_eq!(target.cost, 2.0);
        assert_eq!(target.token_cost, 1.0);
        assert_eq!(target.token_norm_length, 7.0);
    }

    #[test]
    fn test_increment_and_reset() {
        let mut c = cell(1.0, 0.5, 2.0);
        c.increment_costs(0.25);
        assert_eq!(c.cost, 1.25);
        assert_eq!(c.token_cost, 0.75);

        c.start_new_token();
        assert_eq!(c.cost, 1.25);
        assert_eq!(c.token_cost, 0.0);
        assert_eq!(c.token_norm_length, 0.0);
    }

    #[test]
    fn test_set_if_costs_less_keeps_ties() {
        let mut c = cell(1.0, 0.1, 0.0);
        c.set_if_costs_less(&cell(1.0, 0.9, 0.0));
        assert_eq!(c.token_cost, 0.1);

        c.set_if_costs_less(&cell(0.5, 0.4, 0.0));
        assert_eq!(c.cost, 0.5);
        assert_eq!(c.token_cost, 0.4);
    }

    #[test]
    fn test_over_token_edit_limit() {
        let info = ComparisonInfo::new(2.0, 0.5, false);

        // raw token limit
        assert!(cell(9.0, 2.5, 10.0).is_over_token_edit_limit(true, &info));
        // normalized token limit: 1.2 > 2.0 * 0.5
        assert!(cell(9.0, 1.2, 2.0).is_over_token_edit_limit(true, &info));
        // under both
        assert!(!cell(9.0, 0.9, 2.0).is_over_token_edit_limit(true, &info));
        // disabled per-token limits
        assert!(!cell(9.0, 2.5, 10.0).is_over_token_edit_limit(false, &info));

        // spaceless equality turns the check off entirely
        let spaceless = ComparisonInfo::new(2.0, 0.5, true);
        assert!(!cell(9.0, 2.5, 10.0).is_over_token_edit_limit(true, &spaceless));
    }

    #[test]
    fn test_token_edge_poisoning() {
        let info = ComparisonInfo::new(2.0, 0.0, false);
        let over = cell(3.0, 2.5, 1.0);

        let mut target = EditCell::default();
        target.set_costs_and_check_token_edge(&over, true, true, &info);
        assert!(target.cost.is_infinite());

        // not at a token edge: costs carry through untouched
        let mut target = EditCell::default();
        target.set_costs_and_check_token_edge(&over, false, true, &info);
        assert_eq!(target.cost, 3.0);

        // infinity stays infinite through arithmetic
        target.set_costs_and_check_token_edge(&over, true, true, &info);
        target.increment_costs(1.0);
        assert!(target.cost.is_infinite());
    }
}
