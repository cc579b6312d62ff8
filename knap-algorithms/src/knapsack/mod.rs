pub mod backtrack;
pub mod bound;
pub mod branch_and_bound;
pub mod brute_force;
pub mod dynamic;
pub mod greedy;
pub mod ranking;

use crate::SolveError;
use knap_challenges::knapsack::{Challenge, Solution};

pub type SolveFn = fn(&Challenge) -> Result<Solution, SolveError>;
pub type ValueOnlyFn = fn(&Challenge) -> Result<f64, SolveError>;

#[derive(Clone, Copy)]
pub enum Algorithm {
    /// Returns a full solution.
    Solve(SolveFn),
    /// Returns only the optimal value.
    ValueOnly(ValueOnlyFn),
}

pub const ALGORITHM_NAMES: [&str; 6] = [
    "greedy",
    "brute_force",
    "backtrack",
    "branch_and_bound",
    "dynamic",
    "dynamic_value_only",
];

pub fn get_algorithm(name: &str) -> Option<Algorithm> {
    match name {
        "greedy" => Some(Algorithm::Solve(greedy::solve_challenge)),
        "brute_force" => Some(Algorithm::Solve(brute_force::solve_challenge)),
        "backtrack" => Some(Algorithm::Solve(backtrack::solve_challenge)),
        "branch_and_bound" => Some(Algorithm::Solve(branch_and_bound::solve_challenge)),
        "dynamic" => Some(Algorithm::Solve(dynamic::solve_challenge)),
        "dynamic_value_only" => Some(Algorithm::ValueOnly(dynamic::solve_value_only)),
        _ => None,
    }
}
