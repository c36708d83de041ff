use std::cmp::Ordering;

use crate::sorter::NeedsStabilization;

sort_impl!("rust_std_unstable", NeedsStabilization);

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // The stdlib only ever checks for `Ordering::Less`.
    v.sort_unstable_by(|a, b| {
        if is_less(a, b) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });
}
