mod error;
pub use error::SolveError;

pub mod knapsack;
