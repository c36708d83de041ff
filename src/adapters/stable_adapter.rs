use crate::adapters::make_stable::stabilize_cached_key;
use crate::compare::{Compare, Identity, Projection};
use crate::error::{CachedKeyError, SortError};
use crate::sorter::{NativelyStable, Sorter, Stability};

/// Stable sorting with any sorter, paying for stabilization only where needed.
///
/// If `S::Stability` is [`NativelyStable`] calls are forwarded to `S` unchanged. Otherwise the
/// elements are tagged with their position and sorted the way [`MakeStable`](crate::MakeStable)
/// does. The choice is made at compile time.
///
/// ```ignore
/// let sorter = stable_adapter(unstable::heapsort::SortImpl);
/// let mut v = [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
/// sorter.sort_by_key(&mut v, |pair| pair.0)?;
/// assert_eq!(v, [(1, 'a'), (1, 'c'), (2, 'b'), (2, 'd')]);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct StableAdapter<S> {
    sorter: S,
}

pub fn stable_adapter<S: Sorter>(sorter: S) -> StableAdapter<S> {
    StableAdapter::new(sorter)
}

impl<S> StableAdapter<S> {
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

impl<S: Sorter> StableAdapter<S> {
    /// `true` if calls are forwarded to the wrapped sorter without tagging.
    pub const FORWARDS_UNCHANGED: bool = S::IS_ALWAYS_STABLE;

    /// Sorts `v` by a key that is computed exactly once per element.
    ///
    /// Computed keys need a buffer of their own, so this always goes through tagging, even for
    /// natively stable sorters.
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

    /// Like [`StableAdapter::sort_by_cached_key`], but the key function may fail. On failure the
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

impl<S: Sorter> Sorter for StableAdapter<S> {
    type Stability = NativelyStable;

    fn name(&self) -> String {
        format!("stable_adapter<{}>", self.sorter.name())
    }

    #[inline]
    fn sort_by<T, F>(&self, v: &mut [T], is_less: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sort_with(v, is_less, Identity)
    }

    #[inline]
    fn sort_with<T, C, P>(&self, v: &mut [T], compare: C, projection: P) -> Result<(), SortError>
    where
        P: Projection<T>,
        C: Compare<P::Key>,
    {
        <S::Stability as Stability>::sort_stable(&self.sorter, v, compare, projection)
    }
}
