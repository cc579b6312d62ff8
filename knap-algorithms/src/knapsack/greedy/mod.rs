//! Ratio-based greedy selection.
//!
//! # Description
//! Items are visited by descending value density and taken whenever they
//! still fit. There is no backtracking and no exchange step, so the result is
//! feasible but not necessarily optimal. O(n log n).

use super::ranking::rank_by_ratio;
use crate::SolveError;
use knap_challenges::knapsack::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution, SolveError> {
    let items = challenge.items();
    let capacity = challenge.capacity() as u64;
    let mut solution = Solution::empty(items.len());

    for i in rank_by_ratio(items) {
        let weight = items[i].weight() as u64;
        if solution.total_weight + weight <= capacity {
            solution.selection.set(i, true);
            solution.total_weight += weight;
            solution.value += items[i].value();
        }
    }

    Ok(solution)
}
