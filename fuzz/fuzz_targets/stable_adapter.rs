#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_adapters::{stable_adapter, unstable, Sorter};

// Interprets the input as (key, payload) pairs and compares the stabilized heapsort with the
// stdlib stable sort, ordering by key only.
fuzz_target!(|data: &[u8]| {
    let v: Vec<(u8, u8)> = data
        .chunks_exact(2)
        .map(|pair| (pair[0] % 8, pair[1]))
        .collect();

    let mut expected = v.clone();
    expected.sort_by_key(|pair| pair.0);

    let mut got = v;
    stable_adapter(unstable::heapsort::SortImpl)
        .sort_by_key(&mut got, |pair: &(u8, u8)| pair.0)
        .unwrap();

    assert_eq!(got, expected);
});
