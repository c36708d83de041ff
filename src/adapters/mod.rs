//! Adapters turning any [`Sorter`](crate::Sorter) into a stable one.
//!
//! [`MakeStable`] always tags elements with their position and sorts the tagged surrogates with
//! [`StableCompare`]. [`StableAdapter`] only does so when the wrapped sorter is not statically
//! known to be stable, otherwise it forwards the call.

mod association;
pub(crate) mod make_stable;
mod stable_adapter;
mod stable_compare;

pub use association::Association;
pub use make_stable::{make_stable, MakeStable};
pub use stable_adapter::{stable_adapter, StableAdapter};
pub use stable_compare::StableCompare;
