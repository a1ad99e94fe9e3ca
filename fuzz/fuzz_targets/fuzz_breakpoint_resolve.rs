#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vibe_layout::{Breakpoint, BreakpointTable, resolve_column_count};

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<(u32, u8)>,
    default: u8,
    widths: Vec<i64>,
}

fuzz_target!(|input: Input| {
    // Arbitrary order, duplicates and zero columns are all allowed here.
    let table = BreakpointTable::new(
        input
            .entries
            .iter()
            .map(|&(w, c)| Breakpoint::new(w, usize::from(c))),
    );
    let default = usize::from(input.default);

    let mut widths = input.widths.clone();
    widths.sort_unstable();

    let mut last_index = None;
    for &width in &widths {
        let resolved = resolve_column_count(width, &table, default);
        let index = table.matching_index(width);
        assert!(index >= last_index, "matched threshold moved backwards");
        last_index = index;

        match table.matching(width) {
            Some(bp) => assert_eq!(resolved, bp.columns),
            None => assert_eq!(resolved, default),
        }
    }
});
