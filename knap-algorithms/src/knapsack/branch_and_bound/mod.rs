//! Backtracking with fractional-relaxation pruning.
//!
//! # Description
//! Items are ranked by value density once, before the search starts. The
//! search is the plain include/exclude traversal, except that the exclude
//! branch is skipped when its fractional bound cannot beat the incumbent.
//! Pruning never changes the optimum, only the number of nodes expanded.
//! The selection is mapped back to caller order before it is returned.

use super::{backtrack::search, backtrack::SearchStats, ranking::OrderedItems};
use crate::SolveError;
use knap_challenges::knapsack::{Challenge, Solution};
use log::debug;

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution, SolveError> {
    solve_with_stats(challenge).map(|(solution, _)| solution)
}

pub fn solve_with_stats(challenge: &Challenge) -> Result<(Solution, SearchStats), SolveError> {
    let ranked = OrderedItems::ranked(challenge.items());
    let outcome = search(&ranked, challenge.capacity() as u64, true);
    let stats = outcome.stats;
    debug!(
        "branch_and_bound: n={} capacity={} nodes={} pruned={}",
        ranked.len(),
        challenge.capacity(),
        stats.nodes,
        stats.pruned
    );
    Ok((outcome.into_solution(&ranked), stats))
}
