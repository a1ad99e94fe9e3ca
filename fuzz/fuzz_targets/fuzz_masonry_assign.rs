#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vibe_layout::{assign_columns, assign_columns_weighted};

#[derive(Debug, Arbitrary)]
struct Input {
    columns: u8,
    weights: Vec<u16>,
}

fuzz_target!(|input: Input| {
    let cols = usize::from(input.columns);
    let weights: Vec<u64> = input.weights.iter().map(|&w| u64::from(w)).collect();
    let n = weights.len();

    for set in [assign_columns(&weights, cols), assign_columns_weighted(&weights, cols)] {
        // Post-conditions that must always hold:
        assert_eq!(set.column_count(), cols.max(1), "column count not clamped");
        assert_eq!(set.len(), n, "item lost or duplicated");

        let mut seen = vec![false; n];
        for col in set.iter() {
            for pair in col.windows(2) {
                assert!(
                    pair[0].source_index() < pair[1].source_index(),
                    "column out of input order"
                );
            }
            for item in col {
                assert!(!seen[item.source_index()], "duplicate item");
                seen[item.source_index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "missing item");
    }

    assert!(assign_columns(&weights, cols).spread() <= 1, "count balance violated");
});
