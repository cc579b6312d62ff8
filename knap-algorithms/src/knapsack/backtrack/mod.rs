//! Depth-first include/exclude search.
//!
//! # Description
//! Binary decision tree over the items: at every level the item is first
//! included (when it fits), then excluded. Leaves replace the incumbent only
//! on a strictly greater value. The plain variant walks the items in caller
//! order and expands every node; `branch_and_bound` reuses the same engine
//! over ranked items with bound pruning on the exclude branch.
//!
//! The traversal keeps its own stack of frames, so the depth of the tree is
//! not limited by the thread's call stack.

use super::{bound::upper_bound, ranking::OrderedItems};
use crate::SolveError;
use knap_challenges::knapsack::{Challenge, Selection, Solution};
use log::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Branch frames expanded, leaves included.
    pub nodes: u64,
    pub leaves: u64,
    /// Exclude branches cut by the bound.
    pub pruned: u64,
}

enum Frame {
    Branch { level: usize, weight: u64, value: f64 },
    // Evaluated only after the include subtree of `level` is exhausted.
    Exclude { level: usize, weight: u64, value: f64 },
}

pub(crate) struct SearchOutcome {
    pub value: f64,
    pub weight: u64,
    /// Indexed by working order, not caller order.
    pub selected: Vec<bool>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn into_solution(self, order: &OrderedItems) -> Solution {
        let mut selection = Selection::empty(order.len());
        for (level, &position) in order.positions.iter().enumerate() {
            if self.selected[level] {
                selection.set(position, true);
            }
        }
        Solution {
            value: self.value,
            total_weight: self.weight,
            selection,
        }
    }
}

pub(crate) fn search(order: &OrderedItems, capacity: u64, prune: bool) -> SearchOutcome {
    let num_items = order.len();
    let mut current = vec![false; num_items];
    let mut best = SearchOutcome {
        value: 0.0,
        weight: 0,
        selected: vec![false; num_items],
        stats: SearchStats::default(),
    };

    let mut stack = Vec::with_capacity(num_items + 1);
    stack.push(Frame::Branch {
        level: 0,
        weight: 0,
        value: 0.0,
    });

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Branch {
                level,
                weight,
                value,
            } => {
                best.stats.nodes += 1;
                if level == num_items {
                    best.stats.leaves += 1;
                    if weight <= capacity && value > best.value {
                        best.value = value;
                        best.weight = weight;
                        best.selected.copy_from_slice(&current);
                    }
                    continue;
                }
                // Pushed first so the include branch is popped first
                stack.push(Frame::Exclude {
                    level,
                    weight,
                    value,
                });
                let item_weight = order.weights[level] as u64;
                if weight + item_weight <= capacity {
                    current[level] = true;
                    stack.push(Frame::Branch {
                        level: level + 1,
                        weight: weight + item_weight,
                        value: value + order.values[level],
                    });
                }
            }
            Frame::Exclude {
                level,
                weight,
                value,
            } => {
                current[level] = false;
                if prune && upper_bound(order, level + 1, weight, value, capacity) <= best.value {
                    best.stats.pruned += 1;
                    continue;
                }
                stack.push(Frame::Branch {
                    level: level + 1,
                    weight,
                    value,
                });
            }
        }
    }

    best
}

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution, SolveError> {
    solve_with_stats(challenge).map(|(solution, _)| solution)
}

pub fn solve_with_stats(challenge: &Challenge) -> Result<(Solution, SearchStats), SolveError> {
    let order = OrderedItems::original(challenge.items());
    let outcome = search(&order, challenge.capacity() as u64, false);
    let stats = outcome.stats;
    debug!(
        "backtrack: n={} capacity={} nodes={} leaves={}",
        order.len(),
        challenge.capacity(),
        stats.nodes,
        stats.leaves
    );
    Ok((outcome.into_solution(&order), stats))
}
