use knapsack_dp::{solve, KnapsackError, KnapsackSolver};

#[test]
fn textbook_three_items() {
    assert_eq!(solve(50, &[10, 20, 30], &[60, 100, 120]).unwrap(), 220);
}

#[test]
fn four_items_capacity_ten() {
    let sel = KnapsackSolver::solve_with_items(10, &[5, 4, 6, 3], &[10, 40, 30, 50]).unwrap();
    assert_eq!(sel.value, 90);
    assert_eq!(sel.items, vec![1, 3]);
    assert_eq!(sel.weight, 7);
}

#[test]
fn single_item_too_heavy() {
    let sel = KnapsackSolver::solve_with_items(10, &[20], &[10]).unwrap();
    assert_eq!(sel.value, 0);
    assert!(sel.items.is_empty());
    assert_eq!(sel.weight, 0);
}

#[test]
fn identical_items_pick_any_two() {
    let sel = KnapsackSolver::solve_with_items(2, &[1, 1, 1], &[5, 5, 5]).unwrap();
    assert_eq!(sel.value, 10);
    assert_eq!(sel.items.len(), 2);
    assert_eq!(sel.weight, 2);
}

#[test]
fn degenerate_inputs_yield_zero() {
    assert_eq!(solve(0, &[1, 2, 3], &[10, 20, 30]).unwrap(), 0);
    assert_eq!(solve(100, &[], &[]).unwrap(), 0);
    assert_eq!(solve(0, &[], &[]).unwrap(), 0);
}

#[test]
fn shape_violation_fails_fast() {
    let err = solve(10, &[1, 2, 3], &[1, 2]).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(
        err,
        KnapsackError::LengthMismatch {
            weights: 3,
            values: 2
        }
    );
}

#[test]
fn domain_violations_fail_fast() {
    assert_eq!(
        solve(-5, &[1], &[1]).unwrap_err(),
        KnapsackError::NegativeCapacity(-5)
    );
    assert_eq!(
        solve(5, &[1, 2, -3], &[1, 2, 3]).unwrap_err(),
        KnapsackError::NegativeWeight {
            index: 2,
            weight: -3
        }
    );
    assert_eq!(
        solve(5, &[1, 2], &[-1, 2]).unwrap_err(),
        KnapsackError::NegativeValue {
            index: 0,
            value: -1
        }
    );
}

#[test]
fn table_shape_matches_input() {
    let table = KnapsackSolver::table(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
    assert_eq!(table.rows(), 4);
    assert_eq!(table.cols(), 51);
    assert_eq!(table.get(1, 10), 60);
    assert_eq!(table.get(2, 30), 160);
    assert_eq!(table.get(3, 50), 220);
}

#[test]
fn zero_weight_items_depend_on_order_at_exact_fit() {
    // All items fit exactly, but the zero-weight one is only counted when it
    // does not precede the item that fills the capacity.
    assert_eq!(solve(1, &[0, 1], &[5, 3]).unwrap(), 5);
    assert_eq!(solve(1, &[1, 0], &[3, 5]).unwrap(), 8);
    assert_eq!(solve(2, &[0, 1], &[5, 3]).unwrap(), 8);
}

#[test]
fn capacity_beyond_memory_is_rejected() {
    let err = solve(1i64 << 46, &[10, 20, 30], &[60, 100, 120]).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, KnapsackError::TableTooLarge { rows: 4, .. }));
}
