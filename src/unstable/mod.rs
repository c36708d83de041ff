pub mod heapsort;
pub mod rust_std;

// Drop-merge sort, adaptive to nearly sorted input.
#[cfg(feature = "rust_dmsort")]
pub mod rust_dmsort;
