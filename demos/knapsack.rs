//! Example: 0/1 knapsack via the table engine.
//!
//! Run with:
//! `cargo run --example knapsack`

use knapsack_dp::{Item, KnapsackProblem, TableEngine};

fn main() {
    let items = vec![
        Item::new(5, 10),
        Item::new(4, 40),
        Item::new(6, 30),
        Item::new(3, 50),
    ];
    let capacity = 10;

    let problem = KnapsackProblem::from_items(capacity, items).expect("table fits in memory");
    let engine = TableEngine::new(problem);

    let table = engine.fill();
    println!("DP table ({} x {}):", table.rows(), table.cols());
    for i in 0..table.rows() {
        let row: Vec<String> = table.row(i).iter().map(|c| format!("{c:>3}")).collect();
        println!("  {i}: {}", row.join(" "));
    }

    let (best, chosen) = engine.run();
    println!("Maximum value in knapsack: {best}");
    for &i in &chosen {
        let item = engine.problem().items()[i];
        println!("  take item {i} (weight {}, value {})", item.weight, item.value);
    }
}
