//! Error types surfaced by sorters and adapters.
//!
//! Only conditions the adapter can observe without unwinding are represented here. Panics raised
//! by user comparisons, projections or a wrapped sort unwind through the adapter as they are.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Error returned by every [`Sorter`](crate::Sorter) entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The scratch buffer used to tag elements with their position could not be reserved.
    ScratchAlloc {
        /// Number of elements the buffer was sized for.
        len: usize,
        /// Size in bytes of one buffer element.
        elem_size: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortError::ScratchAlloc { len, elem_size } => write!(
                f,
                "failed to reserve scratch buffer for {len} elements of {elem_size} bytes"
            ),
        }
    }
}

impl Error for SortError {}

/// Error returned by the cached-key sorts, which build keys with a fallible key function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedKeyError<E> {
    /// Reserving a scratch buffer or running the wrapped sort failed.
    Sort(SortError),

    /// The key function failed. Keys built before it were dropped and the slice is untouched.
    Key {
        /// Position of the element whose key could not be built.
        position: usize,
        /// Error returned by the key function.
        source: E,
    },
}

impl<E> From<SortError> for CachedKeyError<E> {
    fn from(err: SortError) -> Self {
        CachedKeyError::Sort(err)
    }
}

impl<E: Display> Display for CachedKeyError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CachedKeyError::Sort(err) => Display::fmt(err, f),
            CachedKeyError::Key { position, source } => {
                write!(f, "key function failed for element {position}: {source}")
            }
        }
    }
}

impl<E> Error for CachedKeyError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CachedKeyError::Sort(err) => Some(err),
            CachedKeyError::Key { source, .. } => Some(source),
        }
    }
}
