//! Shallow helpers for sequences and maps, plus conversions between zero-based and ordinal
//! indices.
//!
//! # Relative Indices
//! A relative index is an ordinal: the first item is `1` and the last is `size`. Negative ordinals
//! count backwards from the end, so `-1` is the last item and `-size` is the first. Zero is never
//! a valid ordinal.
//!
//! ```text
//! [value 1] . [value 2] . [value 3] ... [value N]
//!     1           2           3             N
//!    -N        -(N-1)      -(N-2)          -1
//! ```

mod array;
mod index;
mod map;

pub use array::*;
pub use index::*;
pub use map::*;
