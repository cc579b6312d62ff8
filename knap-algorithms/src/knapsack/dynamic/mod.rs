//! Bottom-up dynamic programming over weight budgets.
//!
//! # Description
//! `dp[w]` is the best value reachable with total weight at most `w` using
//! the items processed so far. Items are processed in caller order and each
//! one sweeps `w` from the capacity down to its own weight, which keeps every
//! item to a single use. A cell is only replaced on a strictly greater value.
//!
//! `solve_challenge` also records a keep bit per (item, weight) and walks it
//! backwards to recover the selection, in O(n * capacity) bits.
//! `solve_value_only` runs the identical recurrence in O(capacity) space.

mod table;
pub use table::{KeepTable, ValueTable};

use crate::SolveError;
use knap_challenges::knapsack::{Challenge, Item, Selection, Solution};
use log::debug;

/// Runs the recurrence, calling `on_improve(item, weight)` for every cell an
/// item improves.
fn fill<F>(items: &[Item], dp: &mut ValueTable, mut on_improve: F)
where
    F: FnMut(usize, usize),
{
    let capacity = dp.capacity();
    for (i, item) in items.iter().enumerate() {
        let weight = item.weight() as usize;
        if weight > capacity {
            continue;
        }
        for w in (weight..=capacity).rev() {
            let candidate = dp.get(w - weight) + item.value();
            if candidate > dp.get(w) {
                dp.set(w, candidate);
                on_improve(i, w);
            }
        }
    }
}

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution, SolveError> {
    let items = challenge.items();
    if items.is_empty() {
        return Ok(Solution::empty(0));
    }
    let capacity = challenge.capacity() as usize;
    let mut dp = ValueTable::new(challenge.capacity())?;
    let mut keep = KeepTable::new(items.len(), capacity + 1)?;
    debug!(
        "dynamic: n={} capacity={} keep cells={}",
        items.len(),
        capacity,
        keep.rows() as u128 * keep.cols() as u128
    );

    fill(items, &mut dp, |i, w| keep.set(i, w));

    let mut selection = Selection::empty(items.len());
    let mut total_weight = 0u64;
    let mut w = capacity;
    for i in (0..items.len()).rev() {
        if keep.get(i, w) {
            selection.set(i, true);
            w -= items[i].weight() as usize;
            total_weight += items[i].weight() as u64;
        }
    }

    Ok(Solution {
        value: dp.get(capacity),
        total_weight,
        selection,
    })
}

pub fn solve_value_only(challenge: &Challenge) -> Result<f64, SolveError> {
    let items = challenge.items();
    if items.is_empty() {
        return Ok(0.0);
    }
    let mut dp = ValueTable::new(challenge.capacity())?;
    fill(items, &mut dp, |_, _| {});
    Ok(dp.get(dp.capacity()))
}
