use std::cmp::Ordering;

use crate::adapters::make_stable::stabilize;
use crate::compare::{is_less_projected, ByOrdering, Compare, Identity, Less, Projection};
use crate::error::SortError;

/// A callable that rearranges a slice into the order given by a comparison and a projection.
///
/// Implementors only provide [`Sorter::sort_by`], every other entry point normalizes its
/// arguments into an `is_less` closure and forwards to it. Adapters override
/// [`Sorter::sort_with`] to see the comparison and projection separately.
pub trait Sorter {
    /// Whether this sorter preserves the order of equivalent elements for every input.
    type Stability: Stability;

    const IS_ALWAYS_STABLE: bool = <Self::Stability as Stability>::IS_ALWAYS_STABLE;

    fn name(&self) -> String;

    /// Sorts `v` so that no element is `is_less` than the one before it.
    fn sort_by<T, F>(&self, v: &mut [T], is_less: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool;

    #[inline]
    fn sort<T>(&self, v: &mut [T]) -> Result<(), SortError>
    where
        T: Ord,
    {
        self.sort_with(v, Less, Identity)
    }

    #[inline]
    fn sort_with<T, C, P>(
        &self,
        v: &mut [T],
        mut compare: C,
        projection: P,
    ) -> Result<(), SortError>
    where
        P: Projection<T>,
        C: Compare<P::Key>,
    {
        self.sort_by(v, |a, b| is_less_projected(&mut compare, &projection, a, b))
    }

    #[inline]
    fn sort_by_key<T, K, F>(&self, v: &mut [T], key: F) -> Result<(), SortError>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.sort_with(v, Less, key)
    }

    #[inline]
    fn sort_by_ordering<T, F>(&self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with(v, ByOrdering(compare), Identity)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::NativelyStable {}
    impl Sealed for super::NeedsStabilization {}
}

/// Static capability of a [`Sorter`], one of [`NativelyStable`] or [`NeedsStabilization`].
///
/// Each variant knows how to produce a stable result from a sorter of its kind, which lets the
/// composition layer pick the path by monomorphization alone.
pub trait Stability: sealed::Sealed {
    const IS_ALWAYS_STABLE: bool;

    fn sort_stable<S, T, C, P>(
        sorter: &S,
        v: &mut [T],
        compare: C,
        projection: P,
    ) -> Result<(), SortError>
    where
        S: Sorter,
        P: Projection<T>,
        C: Compare<P::Key>;
}

/// Marker for sorters that keep equivalent elements in input order.
#[derive(Debug)]
pub enum NativelyStable {}

/// Marker for sorters that may reorder equivalent elements.
#[derive(Debug)]
pub enum NeedsStabilization {}

impl Stability for NativelyStable {
    const IS_ALWAYS_STABLE: bool = true;

    #[inline]
    fn sort_stable<S, T, C, P>(
        sorter: &S,
        v: &mut [T],
        compare: C,
        projection: P,
    ) -> Result<(), SortError>
    where
        S: Sorter,
        P: Projection<T>,
        C: Compare<P::Key>,
    {
        tracing::trace!(sorter = %sorter.name(), len = v.len(), "natively stable, forwarding");
        sorter.sort_with(v, compare, projection)
    }
}

impl Stability for NeedsStabilization {
    const IS_ALWAYS_STABLE: bool = false;

    #[inline]
    fn sort_stable<S, T, C, P>(
        sorter: &S,
        v: &mut [T],
        compare: C,
        projection: P,
    ) -> Result<(), SortError>
    where
        S: Sorter,
        P: Projection<T>,
        C: Compare<P::Key>,
    {
        stabilize(sorter, v, compare, projection)
    }
}
