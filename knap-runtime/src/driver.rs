use crate::report;
use anyhow::{anyhow, Result};
use knap_algorithms::knapsack::{dynamic, get_algorithm, Algorithm};
use knap_challenges::knapsack::{Challenge, Difficulty};
use knap_structs::{
    config::{BenchmarkConfig, LimitsConfig, SuiteConfig},
    core::Outcome,
};
use knap_utils::{seed_fingerprint, seed_from_parts};
use serde::{Deserialize, Serialize};
use std::{io::Write, time::Instant};

/// What the size policy decided for one run.
#[derive(Clone, Copy)]
pub enum Plan {
    Run(Algorithm),
    Skip(&'static str),
}

/// Decides whether and how `algorithm_id` runs on an instance of the given
/// shape. Exponential solvers are refused above their item limit, and the
/// traceback table falls back to the value only recurrence when it would be
/// too large.
pub fn plan(
    algorithm_id: &str,
    num_items: usize,
    capacity: u32,
    limits: &LimitsConfig,
) -> Result<Plan> {
    let algorithm = get_algorithm(algorithm_id)
        .ok_or_else(|| anyhow!("Unsupported algorithm '{}'", algorithm_id))?;
    let plan = match algorithm_id {
        "brute_force" if num_items > limits.brute_force_max_items => {
            Plan::Skip("item count above brute force limit")
        }
        "backtrack" | "branch_and_bound" if num_items > limits.backtrack_max_items => {
            Plan::Skip("item count above backtracking limit")
        }
        "dynamic"
            if num_items as u128 * (capacity as u128 + 1) > limits.traceback_max_cells as u128 =>
        {
            Plan::Run(Algorithm::ValueOnly(dynamic::solve_value_only))
        }
        _ => Plan::Run(algorithm),
    };
    Ok(plan)
}

pub fn execute(algorithm: Algorithm, challenge: &Challenge) -> Result<Outcome> {
    Ok(match algorithm {
        Algorithm::Solve(solve) => Outcome::Solved {
            solution: solve(challenge)?,
        },
        Algorithm::ValueOnly(solve) => Outcome::ValueOnly {
            value: solve(challenge)?,
        },
    })
}

/// Runs a planned algorithm `iterations` times and returns the last outcome
/// together with the mean wall clock time in milliseconds.
pub fn timed_run(plan: Plan, challenge: &Challenge, iterations: u32) -> Result<(Outcome, f64)> {
    let algorithm = match plan {
        Plan::Run(algorithm) => algorithm,
        Plan::Skip(reason) => {
            return Ok((
                Outcome::Skipped {
                    reason: reason.to_string(),
                },
                0.0,
            ))
        }
    };
    let iterations = iterations.max(1);
    let mut total_ms = 0.0;
    let mut outcome = None;
    for _ in 0..iterations {
        let start = Instant::now();
        let result = execute(algorithm, challenge)?;
        total_ms += start.elapsed().as_secs_f64() * 1000.0;
        outcome = Some(result);
    }
    let outcome = outcome.ok_or_else(|| anyhow!("No iterations were run"))?;
    Ok((outcome, total_ms / iterations as f64))
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RunRecord {
    pub suite: String,
    pub algorithm_id: String,
    pub num_items: usize,
    pub capacity: u32,
    pub elapsed_ms: f64,
    pub outcome: Outcome,
}

/// Seed for the item set of one suite and size. Every capacity of a size
/// shares the same items.
pub fn suite_seed(rand_hash: &str, suite: &SuiteConfig, num_items: usize) -> [u8; 32] {
    seed_from_parts(&[rand_hash, &suite.name, &num_items.to_string()])
}

/// Runs every suite of `config`, writing the text report to `out` as runs
/// complete.
pub fn run_benchmark<W: Write>(config: &BenchmarkConfig, out: &mut W) -> Result<Vec<RunRecord>> {
    for suite in &config.suites {
        if get_algorithm(&suite.algorithm_id).is_none() {
            return Err(anyhow!(
                "Suite '{}' uses unsupported algorithm '{}'",
                suite.name,
                suite.algorithm_id
            ));
        }
    }

    let mut records = Vec::new();
    for suite in &config.suites {
        log::info!(
            "suite '{}': {} sizes x {} capacities",
            suite.name,
            suite.sizes.len(),
            suite.capacities.len()
        );
        report::write_suite_header(out, suite)?;
        for &num_items in &suite.sizes {
            let seed = suite_seed(&config.rand_hash, suite, num_items);
            let difficulty = Difficulty {
                num_items,
                capacity: 0,
            };
            let items = Challenge::generate_instance(&seed, &difficulty)?;
            log::debug!(
                "generated {} items with seed {:016x}",
                num_items,
                seed_fingerprint(&seed)
            );
            for &capacity in &suite.capacities {
                let challenge = items.with_capacity(capacity);
                let plan = plan(&suite.algorithm_id, num_items, capacity, &config.limits)?;
                let (outcome, elapsed_ms) = timed_run(plan, &challenge, suite.iterations)?;
                let record = RunRecord {
                    suite: suite.name.clone(),
                    algorithm_id: suite.algorithm_id.clone(),
                    num_items,
                    capacity,
                    elapsed_ms,
                    outcome,
                };
                match &record.outcome {
                    Outcome::Skipped { reason } => log::warn!(
                        "{} skipped n={} capacity={}: {}",
                        record.algorithm_id,
                        num_items,
                        capacity,
                        reason
                    ),
                    outcome => log::info!(
                        "{} n={} capacity={} value={:.2} in {:.2} ms",
                        record.algorithm_id,
                        num_items,
                        capacity,
                        outcome.value().unwrap_or_default(),
                        elapsed_ms
                    ),
                }
                report::write_run(out, &record, &challenge)?;
                if suite.detail_size == Some(num_items) {
                    if let Some(solution) = record.outcome.solution() {
                        report::write_detail(out, &record, &challenge, solution)?;
                    }
                }
                records.push(record);
            }
        }
    }
    out.flush()?;
    Ok(records)
}
