use knap_algorithms::knapsack::{
    backtrack, branch_and_bound, brute_force, dynamic, greedy, SolveFn,
};
use knap_challenges::knapsack::{Challenge, Difficulty};

const TOLERANCE: f64 = 1e-9;

fn instances() -> Vec<Challenge> {
    let mut challenges = Vec::new();
    for (i, num_items) in [1usize, 2, 5, 8, 12, 16].into_iter().enumerate() {
        for capacity in [0u32, 1, 50, 150, 400, 2000] {
            let seed = [(i * 31 + capacity as usize % 251) as u8; 32];
            let difficulty = Difficulty {
                num_items,
                capacity,
            };
            challenges.push(Challenge::generate_instance(&seed, &difficulty).unwrap());
        }
    }
    challenges
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

fn solvers() -> [(&'static str, SolveFn); 5] {
    [
        ("greedy", greedy::solve_challenge),
        ("brute_force", brute_force::solve_challenge),
        ("backtrack", backtrack::solve_challenge),
        ("branch_and_bound", branch_and_bound::solve_challenge),
        ("dynamic", dynamic::solve_challenge),
    ]
}

#[test]
fn test_every_solution_is_feasible_and_consistent() {
    for challenge in instances() {
        for (name, solve) in solvers() {
            let solution = solve(&challenge).unwrap();
            assert!(
                solution.total_weight <= challenge.capacity() as u64,
                "{} overfilled n={} capacity={}",
                name,
                challenge.num_items(),
                challenge.capacity()
            );
            challenge
                .verify_solution(&solution)
                .unwrap_or_else(|e| panic!("{}: {}", name, e));
        }
    }
}

#[test]
fn test_exact_solvers_agree() {
    for challenge in instances() {
        let oracle = brute_force::solve_challenge(&challenge).unwrap();
        for (name, solve) in solvers().into_iter().skip(1) {
            let solution = solve(&challenge).unwrap();
            assert!(
                close(solution.value, oracle.value),
                "{} found {} but brute force found {} (n={}, capacity={})",
                name,
                solution.value,
                oracle.value,
                challenge.num_items(),
                challenge.capacity()
            );
        }
        let greedy = greedy::solve_challenge(&challenge).unwrap();
        assert!(greedy.value <= oracle.value * (1.0 + TOLERANCE));
    }
}

#[test]
fn test_backtracking_variants_agree() {
    for challenge in instances() {
        let plain = backtrack::solve_challenge(&challenge).unwrap();
        let pruned = branch_and_bound::solve_challenge(&challenge).unwrap();
        assert!(close(plain.value, pruned.value));
    }
}

#[test]
fn test_pruning_cuts_the_tree() {
    let difficulty = Difficulty {
        num_items: 16,
        capacity: 300,
    };
    let challenge = Challenge::generate_instance(&[42; 32], &difficulty).unwrap();
    let (_, plain) = backtrack::solve_with_stats(&challenge).unwrap();
    let (_, pruned) = branch_and_bound::solve_with_stats(&challenge).unwrap();
    assert_eq!(plain.pruned, 0);
    assert!(pruned.pruned > 0);
    assert!(pruned.nodes < plain.nodes);
}

#[test]
fn test_dynamic_variants_agree_bit_for_bit() {
    for challenge in instances() {
        let traceback = dynamic::solve_challenge(&challenge).unwrap();
        let value_only = dynamic::solve_value_only(&challenge).unwrap();
        assert_eq!(traceback.value.to_bits(), value_only.to_bits());
    }
}

#[test]
fn test_dynamic_traceback_round_trip() {
    for challenge in instances() {
        let solution = dynamic::solve_challenge(&challenge).unwrap();
        let items = challenge.items();
        let mut value = 0.0;
        let mut weight = 0u64;
        for i in solution.selection.positions() {
            value += items[i].value();
            weight += items[i].weight() as u64;
        }
        assert_eq!(weight, solution.total_weight);
        assert_eq!(value.to_bits(), solution.value.to_bits());
    }
}

#[test]
fn test_solvers_are_deterministic() {
    for challenge in instances() {
        for (name, solve) in solvers() {
            let first = solve(&challenge).unwrap();
            let second = solve(&challenge).unwrap();
            assert_eq!(first, second, "{}", name);
        }
    }
}

#[test]
fn test_larger_instances_dynamic_matches_branch_and_bound() {
    for (seed, num_items) in [(3u8, 40usize), (4, 60)] {
        let difficulty = Difficulty {
            num_items,
            capacity: 500,
        };
        let challenge = Challenge::generate_instance(&[seed; 32], &difficulty).unwrap();
        let dp = dynamic::solve_challenge(&challenge).unwrap();
        let bnb = branch_and_bound::solve_challenge(&challenge).unwrap();
        assert!(close(dp.value, bnb.value));
    }
}
