use anyhow::Result;
use knap_challenges::knapsack::{Difficulty, Solution};
use knap_utils::{jsonify, seed_from_parts};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BenchmarkSettings {
    pub algorithm_id: String,
    pub difficulty: Difficulty,
}

impl BenchmarkSettings {
    /// Generator seed for one nonce. Depends on the whole settings object, so
    /// changing the algorithm or the difficulty changes the instance too.
    pub fn calc_seed(&self, rand_hash: &str, nonce: u64) -> Result<[u8; 32]> {
        let settings = jsonify(self)?;
        Ok(seed_from_parts(&[&settings, rand_hash, &nonce.to_string()]))
    }
}

/// Result of one solver run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Solved { solution: Solution },
    /// The solver only reports the optimal value.
    ValueOnly { value: f64 },
    /// Refused by the size policy before the solver was called.
    Skipped { reason: String },
}

impl Outcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Solved { solution } => Some(solution.value),
            Outcome::ValueOnly { value } => Some(*value),
            Outcome::Skipped { .. } => None,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved { solution } => Some(solution),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutputData {
    pub nonce: u64,
    pub algorithm_id: String,
    pub elapsed_ms: f64,
    pub outcome: Outcome,
}
