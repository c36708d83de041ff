use std::cmp::Ordering;

/// Static entry points of the sort implementation under test.
pub trait Sort {
    /// Whether the stability tests apply.
    const IS_STABLE: bool;

    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort_by_key<T, K, F>(arr: &mut [T], key: F)
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        Self::sort_by(arr, |a, b| key(a).cmp(&key(b)));
    }
}

pub mod patterns;
