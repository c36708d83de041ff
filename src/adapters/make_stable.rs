use crate::adapters::association::{apply_permutation, associate, build_scratch, into_positions};
use crate::adapters::{Association, StableCompare};
use crate::compare::{Compare, Identity, Less, Projection};
use crate::error::{CachedKeyError, SortError};
use crate::sorter::{NativelyStable, Sorter};

/// Wraps a sorter so that its output is stable, whether or not the sorter itself is.
///
/// Every call tags the elements with their position and lets the wrapped sorter order the tags
/// with a [`StableCompare`]. Prefer [`StableAdapter`](crate::StableAdapter), which skips the
/// tagging for sorters that are stable already.
#[derive(Copy, Clone, Debug, Default)]
pub struct MakeStable<S> {
    sorter: S,
}

pub fn make_stable<S: Sorter>(sorter: S) -> MakeStable<S> {
    MakeStable::new(sorter)
}

impl<S> MakeStable<S> {
    pub const fn new(sorter: S) -> Self {
        Self { sorter }
    }

    pub fn get(&self) -> &S {
        &self.sorter
    }

    pub fn into_inner(self) -> S {
        self.sorter
    }
}

impl<S: Sorter> MakeStable<S> {
    /// Sorts `v` by a key that is computed exactly once per element.
    pub fn sort_by_cached_key<T, K, F>(&self, v: &mut [T], mut key: F) -> Result<(), SortError>
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        stabilize_cached_key(&self.sorter, v, |elem| {
            Ok::<_, std::convert::Infallible>(key(elem))
        })
        .map_err(|err| match err {
            CachedKeyError::Sort(err) => err,
            CachedKeyError::Key { source, .. } => match source {},
        })
    }

    /// Like [`MakeStable::sort_by_cached_key`], but the key function may fail. On failure the
    /// slice is left untouched.
    pub fn try_sort_by_cached_key<T, K, E, F>(
        &self,
        v: &mut [T],
        key: F,
    ) -> Result<(), CachedKeyError<E>>
    where
        F: FnMut(&T) -> Result<K, E>,
        K: Ord,
    {
        stabilize_cached_key(&self.sorter, v, key)
    }
}

impl<S: Sorter> Sorter for MakeStable<S> {
    type Stability = NativelyStable;

    fn name(&self) -> String {
        format!("make_stable<{}>", self.sorter.name())
    }

    #[inline]
    fn sort_by<T, F>(&self, v: &mut [T], is_less: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        stabilize(&self.sorter, v, is_less, Identity)
    }

    #[inline]
    fn sort_with<T, C, P>(&self, v: &mut [T], compare: C, projection: P) -> Result<(), SortError>
    where
        P: Projection<T>,
        C: Compare<P::Key>,
    {
        stabilize(&self.sorter, v, compare, projection)
    }
}

/// Sorts `v` stably with `sorter`, regardless of the sorter's own guarantees.
///
/// The slice is only rearranged after the wrapped sorter returned successfully. If reserving
/// scratch space fails, or the wrapped sorter fails or panics, `v` is left as it was.
pub(crate) fn stabilize<S, T, C, P>(
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
    if v.len() < 2 {
        return Ok(());
    }

    tracing::trace!(sorter = %sorter.name(), len = v.len(), "stabilizing");

    let mut order = {
        let mut associations = associate(v)?;
        let mut stable_compare = StableCompare::new(compare, projection);

        sorter.sort_by(&mut associations, |a, b| stable_compare.is_less(a, b))?;

        into_positions(associations)
    };

    apply_permutation(v, &mut order);

    Ok(())
}

/// Computes every key once, sorts the keys stably with `sorter` and rearranges `v` accordingly.
pub(crate) fn stabilize_cached_key<S, T, K, E, F>(
    sorter: &S,
    v: &mut [T],
    mut key: F,
) -> Result<(), CachedKeyError<E>>
where
    S: Sorter,
    F: FnMut(&T) -> Result<K, E>,
    K: Ord,
{
    if v.len() < 2 {
        return Ok(());
    }

    tracing::trace!(sorter = %sorter.name(), len = v.len(), "stabilizing by cached key");

    let mut order = {
        let keys = build_scratch(v, |position, elem| {
            key(elem).map_err(|source| CachedKeyError::Key { position, source })
        })?;
        let mut associations = build_scratch(&keys, |position, k| {
            Ok::<_, SortError>(Association::new(k, position))
        })?;
        let mut stable_compare = StableCompare::with_compare(Less);

        sorter.sort_by(&mut associations, |a, b| stable_compare.is_less(a, b))?;

        into_positions(associations)
    };

    apply_permutation(v, &mut order);

    Ok(())
}
