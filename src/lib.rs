//! Stabilizing adapters over pluggable sort implementations.
//!
//! Any type implementing [`Sorter`] can be wrapped in a [`StableAdapter`], which preserves the
//! relative order of elements that compare equivalent. If the wrapped sorter already declares
//! itself stable via [`Sorter::Stability`] the adapter forwards the call unchanged, otherwise the
//! elements are tagged with their original position and sorted with a tie-breaking comparison.

macro_rules! sort_impl {
    ($name:expr, $stability:ty) => {
        #[derive(Copy, Clone, Debug, Default)]
        pub struct SortImpl;

        impl crate::Sorter for SortImpl {
            type Stability = $stability;

            fn name(&self) -> String {
                $name.into()
            }

            #[inline]
            fn sort_by<T, F>(&self, v: &mut [T], is_less: F) -> Result<(), crate::SortError>
            where
                F: FnMut(&T, &T) -> bool,
            {
                sort_by(v, is_less);
                Ok(())
            }
        }
    };
}

pub mod adapters;
pub mod compare;
pub mod error;
pub mod sorter;

// Wrapped sorters, thin shells around existing algorithms.
pub mod stable;
pub mod unstable;

pub use adapters::{
    make_stable, stable_adapter, Association, MakeStable, StableAdapter, StableCompare,
};
pub use compare::{ByOrdering, Compare, Greater, Identity, Less, Projection};
pub use error::{CachedKeyError, SortError};
pub use sorter::{NativelyStable, NeedsStabilization, Sorter, Stability};
