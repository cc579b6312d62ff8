use knap_challenges::knapsack::*;

fn seed(byte: u8) -> [u8; 32] {
    [byte; 32]
}

#[test]
fn test_item_ratio_is_derived() {
    let item = Item::new(3, 4, 10.0).unwrap();
    assert_eq!(item.id(), 3);
    assert_eq!(item.weight(), 4);
    assert_eq!(item.ratio(), 2.5);
}

#[test]
fn test_item_rejects_invalid_fields() {
    assert!(Item::new(0, 1, 1.0).is_err());
    assert!(Item::new(1, 0, 1.0).is_err());
    assert!(Item::new(1, 1, 0.0).is_err());
    assert!(Item::new(1, 1, -2.0).is_err());
    assert!(Item::new(1, 1, f64::NAN).is_err());
}

#[test]
fn test_challenge_rejects_duplicate_ids() {
    let items = vec![Item::new(1, 1, 1.0).unwrap(), Item::new(1, 2, 2.0).unwrap()];
    assert!(Challenge::new(items, 10).is_err());
}

#[test]
fn test_from_pairs_numbers_items() {
    let challenge = Challenge::from_pairs(&[(2, 3.0), (3, 4.0)], 5).unwrap();
    let ids: Vec<u32> = challenge.items().iter().map(|item| item.id()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(challenge.capacity(), 5);
    assert_eq!(challenge.num_items(), 2);
}

#[test]
fn test_generate_instance_is_deterministic() {
    let difficulty = Difficulty {
        num_items: 50,
        capacity: 1000,
    };
    let a = Challenge::generate_instance(&seed(7), &difficulty).unwrap();
    let b = Challenge::generate_instance(&seed(7), &difficulty).unwrap();
    let c = Challenge::generate_instance(&seed(8), &difficulty).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_generate_instance_ranges() {
    let difficulty = Difficulty {
        num_items: 500,
        capacity: 10000,
    };
    let challenge = Challenge::generate_instance(&seed(1), &difficulty).unwrap();
    assert_eq!(challenge.num_items(), 500);
    assert_eq!(challenge.capacity(), 10000);
    for (i, item) in challenge.items().iter().enumerate() {
        assert_eq!(item.id(), i as u32 + 1);
        assert!((MIN_ITEM_WEIGHT..=MAX_ITEM_WEIGHT).contains(&item.weight()));
        assert!(item.value() >= MIN_ITEM_VALUE as f64);
        assert!(item.value() < MAX_ITEM_VALUE as f64 + 1.0);
    }
}

#[test]
fn test_generate_empty_instance() {
    let difficulty = Difficulty {
        num_items: 0,
        capacity: 10,
    };
    let challenge = Challenge::generate_instance(&seed(0), &difficulty).unwrap();
    assert_eq!(challenge.num_items(), 0);
}

#[test]
fn test_selection_ids() {
    let challenge = Challenge::from_pairs(&[(1, 1.0), (1, 2.0), (1, 3.0)], 3).unwrap();
    let selection = Selection::from(vec![true, false, true]);
    assert_eq!(selection.ids(challenge.items()), vec![1, 3]);
    assert_eq!(selection.positions().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(selection.num_selected(), 2);
    assert!(!selection.is_selected(7));
}

#[test]
fn test_verify_solution() {
    let challenge = Challenge::from_pairs(&[(2, 3.0), (3, 4.0), (4, 5.0)], 5).unwrap();
    let solution = Solution {
        value: 7.0,
        total_weight: 5,
        selection: Selection::from(vec![true, true, false]),
    };
    assert!(challenge.verify_solution(&solution).is_ok());
    assert!(challenge.verify_solution(&Solution::empty(3)).is_ok());
}

#[test]
fn test_verify_solution_rejects_overweight() {
    let challenge = Challenge::from_pairs(&[(2, 3.0), (3, 4.0), (4, 5.0)], 5).unwrap();
    let solution = Solution {
        value: 9.0,
        total_weight: 6,
        selection: Selection::from(vec![true, false, true]),
    };
    assert!(challenge.verify_solution(&solution).is_err());
}

#[test]
fn test_verify_solution_rejects_mismatches() {
    let challenge = Challenge::from_pairs(&[(2, 3.0), (3, 4.0)], 5).unwrap();
    let wrong_value = Solution {
        value: 8.0,
        total_weight: 5,
        selection: Selection::from(vec![true, true]),
    };
    assert!(challenge.verify_solution(&wrong_value).is_err());
    let wrong_weight = Solution {
        value: 7.0,
        total_weight: 4,
        selection: Selection::from(vec![true, true]),
    };
    assert!(challenge.verify_solution(&wrong_weight).is_err());
    let wrong_length = Solution::empty(3);
    assert!(challenge.verify_solution(&wrong_length).is_err());
}

#[test]
fn test_deserialize_validates() {
    let challenge: Challenge = serde_json::from_str(
        r#"{"items":[{"id":1,"weight":2,"value":3.0}],"capacity":4}"#,
    )
    .unwrap();
    assert_eq!(challenge.items()[0].ratio(), 1.5);
    assert!(serde_json::from_str::<Challenge>(
        r#"{"items":[{"id":1,"weight":0,"value":3.0}],"capacity":4}"#
    )
    .is_err());
    assert!(serde_json::from_str::<Challenge>(
        r#"{"items":[{"id":1,"weight":1,"value":3.0},{"id":1,"weight":1,"value":3.0}],"capacity":4}"#
    )
    .is_err());
}

#[test]
fn test_solution_serde() {
    let solution = Solution {
        value: 7.5,
        total_weight: 5,
        selection: Selection::from(vec![true, false]),
    };
    let text = serde_json::to_string(&solution).unwrap();
    assert_eq!(text, r#"{"value":7.5,"total_weight":5,"selection":[true,false]}"#);
    let restored: Solution = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, solution);
}
