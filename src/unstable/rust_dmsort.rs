use std::cmp::Ordering;

use crate::sorter::NeedsStabilization;

sort_impl!("rust_dmsort_unstable", NeedsStabilization);

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    dmsort::sort_by(v, |a, b| {
        if is_less(a, b) {
            Ordering::Less
        } else if is_less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}
