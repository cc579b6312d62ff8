//! Exhaustive subset enumeration.
//!
//! # Description
//! Every subset is encoded as a mask where bit `j` includes item `j`. Masks
//! are visited in increasing order and a subset only replaces the incumbent
//! when its value is strictly greater, so among equal-valued subsets the
//! first mask wins. O(2^n * n); meant as the reference answer for small n.

use crate::SolveError;
use knap_challenges::knapsack::{Challenge, Selection, Solution};

/// Widest item set a 64 bit mask can enumerate.
pub const MAX_ITEMS: usize = 63;

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution, SolveError> {
    let items = challenge.items();
    let num_items = items.len();
    if num_items > MAX_ITEMS {
        return Err(SolveError::EnumerationTooLarge {
            num_items,
            max: MAX_ITEMS,
        });
    }
    let capacity = challenge.capacity() as u64;

    let mut best_value = 0.0;
    let mut best_weight = 0u64;
    let mut best_mask = 0u64;

    for mask in 0..(1u64 << num_items) {
        let mut weight = 0u64;
        let mut value = 0.0;
        for (j, item) in items.iter().enumerate() {
            if mask & (1u64 << j) != 0 {
                weight += item.weight() as u64;
                value += item.value();
            }
        }
        if weight <= capacity && value > best_value {
            best_value = value;
            best_weight = weight;
            best_mask = mask;
        }
    }

    let selection = Selection::from(
        (0..num_items)
            .map(|j| best_mask & (1u64 << j) != 0)
            .collect::<Vec<_>>(),
    );
    Ok(Solution {
        value: best_value,
        total_weight: best_weight,
        selection,
    })
}
