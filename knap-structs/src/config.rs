use crate::serializable_struct_with_defaults;
use serde::{Deserialize, Serialize};

const LARGE_SIZES: [usize; 15] = [
    1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000, 10000, 20000, 40000, 80000, 160000,
    320000,
];
const SMALL_SIZES: [usize; 6] = [5, 10, 15, 20, 25, 30];
const LARGE_CAPACITIES: [u32; 3] = [10000, 100000, 1000000];
const SMALL_CAPACITIES: [u32; 3] = [500, 1000, 2000];

serializable_struct_with_defaults! {
    BenchmarkConfig {
        rand_hash: String = "knapsack".to_string(),
        limits: LimitsConfig = LimitsConfig::default(),
        suites: Vec<SuiteConfig> = default_suites(),
    }
}

serializable_struct_with_defaults! {
    LimitsConfig {
        /// Larger item sets are skipped by `brute_force`.
        brute_force_max_items: usize = 30,
        /// Larger item sets are skipped by `backtrack` and `branch_and_bound`.
        backtrack_max_items: usize = 40000,
        /// Above this many keep cells `dynamic` falls back to value only.
        traceback_max_cells: u64 = 1000 * 100001,
    }
}

serializable_struct_with_defaults! {
    SuiteConfig {
        name: String = String::new(),
        algorithm_id: String = String::new(),
        sizes: Vec<usize> = Vec::new(),
        capacities: Vec<u32> = Vec::new(),
        /// Timed repetitions per run, averaged.
        iterations: u32 = 1,
        /// Runs of this size also get a per-item table in the report.
        detail_size: Option<usize> = None,
    }
}

impl SuiteConfig {
    pub fn new(algorithm_id: &str, sizes: &[usize], capacities: &[u32]) -> Self {
        Self {
            name: algorithm_id.to_string(),
            algorithm_id: algorithm_id.to_string(),
            sizes: sizes.to_vec(),
            capacities: capacities.to_vec(),
            ..Self::default()
        }
    }
}

/// One suite per algorithm, with the sizes and capacities each one is
/// practical for.
pub fn default_suites() -> Vec<SuiteConfig> {
    vec![
        SuiteConfig {
            iterations: 10,
            ..SuiteConfig::new("greedy", &LARGE_SIZES, &LARGE_CAPACITIES)
        },
        SuiteConfig {
            detail_size: Some(30),
            ..SuiteConfig::new("brute_force", &SMALL_SIZES, &SMALL_CAPACITIES)
        },
        SuiteConfig {
            detail_size: Some(30),
            ..SuiteConfig::new("backtrack", &SMALL_SIZES, &SMALL_CAPACITIES)
        },
        SuiteConfig {
            detail_size: Some(1000),
            ..SuiteConfig::new("branch_and_bound", &LARGE_SIZES, &LARGE_CAPACITIES)
        },
        SuiteConfig {
            detail_size: Some(1000),
            ..SuiteConfig::new("dynamic", &LARGE_SIZES, &LARGE_CAPACITIES)
        },
    ]
}
