use std::fmt;
use std::mem;

use crate::error::SortError;

/// An element of the slice being sorted, tagged with its position before sorting started.
///
/// Wrapped sorters reorder these surrogates instead of the elements themselves. The element is
/// only borrowed, so building associations never requires `T: Clone`.
pub struct Association<'a, T: ?Sized> {
    element: &'a T,
    position: usize,
}

impl<'a, T: ?Sized> Association<'a, T> {
    #[inline]
    pub fn new(element: &'a T, position: usize) -> Self {
        Self { element, position }
    }

    #[inline]
    pub fn get(&self) -> &'a T {
        self.element
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T: ?Sized> Clone for Association<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Association<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Association<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Association")
            .field("element", &self.element)
            .field("position", &self.position)
            .finish()
    }
}

/// Reserves room for exactly `len` values, reporting failure instead of aborting.
pub(crate) fn scratch_buffer<A>(len: usize) -> Result<Vec<A>, SortError> {
    let mut buf = Vec::new();
    if let Err(err) = buf.try_reserve_exact(len) {
        tracing::debug!(len, elem_size = mem::size_of::<A>(), %err, "scratch reservation failed");
        return Err(SortError::ScratchAlloc {
            len,
            elem_size: mem::size_of::<A>(),
        });
    }

    Ok(buf)
}

/// Builds one scratch value per element of `v`, in input order, passing each constructor the
/// element's position.
///
/// The buffer owns exactly the values constructed so far. If `construct` fails for position `k`,
/// the `k` values before it are dropped, the buffer is released and the error is returned.
pub(crate) fn build_scratch<'a, T, A, E, F>(v: &'a [T], mut construct: F) -> Result<Vec<A>, E>
where
    F: FnMut(usize, &'a T) -> Result<A, E>,
    E: From<SortError>,
{
    let mut buf = scratch_buffer(v.len())?;

    for (position, element) in v.iter().enumerate() {
        // Within capacity, push never reallocates.
        buf.push(construct(position, element)?);
    }

    Ok(buf)
}

/// Tags every element of `v` with its position.
#[inline]
pub(crate) fn associate<T>(v: &[T]) -> Result<Vec<Association<'_, T>>, SortError> {
    build_scratch(v, |position, element| {
        Ok::<_, SortError>(Association::new(element, position))
    })
}

/// Reads the original positions of sorted associations, in their new order.
///
/// Consumes the buffer, which ends the borrow of the elements. An association is at least as
/// large as a position with the same alignment, so the positions are collected in place into the
/// association buffer's allocation.
pub(crate) fn into_positions<T: ?Sized>(associations: Vec<Association<'_, T>>) -> Vec<usize> {
    associations.into_iter().map(|assoc| assoc.position()).collect()
}

/// Moves the element originally at `order[i]` to `i`, for every `i`.
///
/// `order` must be a permutation of `0..v.len()`. It is used as bookkeeping and left in an
/// unspecified state. Every step is a swap, so `v` holds the same set of elements at all times.
pub(crate) fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    debug_assert_eq!(v.len(), order.len());

    for i in 0..v.len() {
        // Elements before `i` are final. If the wanted element was swapped away by an earlier
        // step, `order` at its old slot says where it went.
        let mut source = order[i];
        while source < i {
            source = order[source];
        }
        order[i] = source;
        v.swap(i, source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_input_order() {
        let v = ["x", "y", "z"];
        let associations = associate(&v).unwrap();

        assert_eq!(associations.len(), 3);
        for (i, assoc) in associations.iter().enumerate() {
            assert_eq!(assoc.position(), i);
            assert!(std::ptr::eq(assoc.get(), &v[i]));
        }
    }

    #[test]
    fn positions_read_back_in_sorted_order() {
        let v = [30, 10, 20, 10];
        let mut associations = associate(&v).unwrap();
        associations.sort_by_key(|assoc| (*assoc.get(), assoc.position()));

        assert_eq!(into_positions(associations), [1, 3, 2, 0]);
    }

    #[test]
    fn scratch_is_sized_exactly() {
        let v = [1, 2, 3, 4, 5];
        let associations = associate(&v).unwrap();

        assert_eq!(associations.capacity(), v.len());
    }

    #[test]
    fn failing_construction_drops_prefix() {
        use std::cell::Cell;

        struct Tracked<'a>(&'a Cell<usize>);

        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Cell::new(0);
        let mut built = 0;
        let v = [10, 20, 30, 40, 50];

        let res = build_scratch(&v, |position, _| {
            if position == 3 {
                return Err(SortError::ScratchAlloc { len: 0, elem_size: 0 });
            }
            built += 1;
            Ok(Tracked(&drops))
        });

        assert!(res.is_err());
        assert_eq!(built, 3);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn impossible_reservation_is_reported() {
        let res = scratch_buffer::<u64>(usize::MAX);

        assert_eq!(
            res.unwrap_err(),
            SortError::ScratchAlloc {
                len: usize::MAX,
                elem_size: 8
            }
        );
    }

    #[test]
    fn permutation_identity_and_reverse() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        apply_permutation(&mut v, &mut [0, 1, 2, 3]);
        assert_eq!(v, ['a', 'b', 'c', 'd']);

        apply_permutation(&mut v, &mut [3, 2, 1, 0]);
        assert_eq!(v, ['d', 'c', 'b', 'a']);
    }

    #[test]
    fn permutation_cycles() {
        // Every permutation of 5 elements, checked against the out-of-place rearrangement.
        fn permutations(items: Vec<usize>) -> Vec<Vec<usize>> {
            if items.len() <= 1 {
                return vec![items];
            }

            let mut out = Vec::new();
            for i in 0..items.len() {
                let mut rest = items.clone();
                let head = rest.remove(i);
                for mut tail in permutations(rest) {
                    tail.insert(0, head);
                    out.push(tail);
                }
            }
            out
        }

        let original: Vec<String> = (0..5).map(|i| format!("e{i}")).collect();

        for order in permutations((0..5).collect()) {
            let expected: Vec<String> = order.iter().map(|&i| original[i].clone()).collect();

            let mut v = original.clone();
            let mut bookkeeping = order.clone();
            apply_permutation(&mut v, &mut bookkeeping);

            assert_eq!(v, expected, "order: {order:?}");
        }
    }
}
