use crate::adapters::Association;
use crate::compare::{is_less_projected, Compare, Identity, Projection};

/// Comparison over [`Association`]s that breaks ties by original position.
///
/// Refines the strict weak ordering given by `compare` and `projection` into a strict total order:
/// elements the user relation deems equivalent are ordered by where they stood before sorting.
/// Any sorter given this comparison therefore produces a stable result.
#[derive(Copy, Clone, Debug, Default)]
pub struct StableCompare<C, P = Identity> {
    compare: C,
    projection: P,
}

impl<C> StableCompare<C> {
    pub fn with_compare(compare: C) -> Self {
        Self::new(compare, Identity)
    }
}

impl<C, P> StableCompare<C, P> {
    pub fn new(compare: C, projection: P) -> Self {
        Self {
            compare,
            projection,
        }
    }

    pub fn compare(&self) -> &C {
        &self.compare
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn into_parts(self) -> (C, P) {
        (self.compare, self.projection)
    }

    /// Returns `true` iff `lhs` must be ordered strictly before `rhs`.
    #[inline]
    pub fn is_less<T>(&mut self, lhs: &Association<'_, T>, rhs: &Association<'_, T>) -> bool
    where
        T: ?Sized,
        P: Projection<T>,
        C: Compare<P::Key>,
    {
        let Self {
            compare,
            projection,
        } = self;

        if is_less_projected(compare, projection, lhs.get(), rhs.get()) {
            return true;
        }

        if is_less_projected(compare, projection, rhs.get(), lhs.get()) {
            return false;
        }

        lhs.position() < rhs.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Greater, Less};

    #[test]
    fn distinguishable_keys_ignore_position() {
        let (low, high) = (1, 2);
        let mut cmp = StableCompare::with_compare(Less);

        // Position says high first, the key says otherwise.
        assert!(cmp.is_less(&Association::new(&low, 7), &Association::new(&high, 0)));
        assert!(!cmp.is_less(&Association::new(&high, 0), &Association::new(&low, 7)));
    }

    #[test]
    fn equivalent_keys_fall_back_to_position() {
        let a = (5, 'a');
        let b = (5, 'b');
        let mut cmp = StableCompare::new(Less, |pair: &(i32, char)| pair.0);

        assert!(cmp.is_less(&Association::new(&b, 1), &Association::new(&a, 2)));
        assert!(!cmp.is_less(&Association::new(&a, 2), &Association::new(&b, 1)));
        // Irreflexive.
        assert!(!cmp.is_less(&Association::new(&a, 2), &Association::new(&a, 2)));
    }

    #[test]
    fn accessors_return_parts() {
        let cmp = StableCompare::new(Greater, Identity);

        assert_eq!(*cmp.compare(), Greater);
        assert_eq!(*cmp.projection(), Identity);
        assert_eq!(cmp.into_parts(), (Greater, Identity));
    }
}
