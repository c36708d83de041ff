//! Comparison relations and projections understood by every [`Sorter`](crate::Sorter).
//!
//! A comparison is a strict weak ordering expressed as `is_less`. A projection maps an element to
//! the value actually compared. Closures work for both, the unit structs cover the defaults.

use std::cmp::Ordering;

/// Strict weak ordering over `K`.
pub trait Compare<K: ?Sized> {
    /// Returns `true` iff `a` must be ordered strictly before `b`.
    fn is_less(&mut self, a: &K, b: &K) -> bool;
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: FnMut(&K, &K) -> bool,
{
    #[inline]
    fn is_less(&mut self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// The built-in less-than, ascending order via [`Ord`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Less;

impl<K: ?Sized + Ord> Compare<K> for Less {
    #[inline]
    fn is_less(&mut self, a: &K, b: &K) -> bool {
        a.lt(b)
    }
}

/// Descending order via [`Ord`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Greater;

impl<K: ?Sized + Ord> Compare<K> for Greater {
    #[inline]
    fn is_less(&mut self, a: &K, b: &K) -> bool {
        b.lt(a)
    }
}

/// Adapts a three-way comparator, as taken by `slice::sort_by`, into a [`Compare`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ByOrdering<F>(pub F);

impl<K: ?Sized, F> Compare<K> for ByOrdering<F>
where
    F: FnMut(&K, &K) -> Ordering,
{
    #[inline]
    fn is_less(&mut self, a: &K, b: &K) -> bool {
        (self.0)(a, b) == Ordering::Less
    }
}

/// Maps an element to the key it is compared by.
///
/// The key is handed to a continuation instead of being returned, so the same interface serves
/// borrowing projections like [`Identity`] and closures computing an owned key.
pub trait Projection<T: ?Sized> {
    type Key: ?Sized;

    fn with_key<R, F>(&self, value: &T, f: F) -> R
    where
        F: FnOnce(&Self::Key) -> R;
}

/// The default projection, compares elements as they are.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: ?Sized> Projection<T> for Identity {
    type Key = T;

    #[inline]
    fn with_key<R, F>(&self, value: &T, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(value)
    }
}

impl<T: ?Sized, K, P> Projection<T> for P
where
    P: Fn(&T) -> K,
{
    type Key = K;

    #[inline]
    fn with_key<R, F>(&self, value: &T, f: F) -> R
    where
        F: FnOnce(&K) -> R,
    {
        f(&self(value))
    }
}

/// `compare(projection(a), projection(b))`.
#[inline]
pub fn is_less_projected<T, C, P>(compare: &mut C, projection: &P, a: &T, b: &T) -> bool
where
    T: ?Sized,
    P: Projection<T>,
    C: Compare<P::Key>,
{
    projection.with_key(a, |key_a| {
        projection.with_key(b, |key_b| compare.is_less(key_a, key_b))
    })
}
