use derive_more::{Display, Error, IsVariant};

use crate::util::panic::Panic;

/// An error produced when converting between relative and cardinal indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum IndexError {
    #[display("the specified size cannot be less than one")]
    EmptySequence,
    #[display("relative indices must be positive or negative ordinals, not zero")]
    ZeroOrdinal,
    #[display("relative index {relative} is outside the allowed ranges [-{size}..-1] and [1..{size}]")]
    OrdinalOutOfRange { relative: isize, size: usize },
    #[display("cardinal index {cardinal} is outside the allowed range [0..{size})")]
    CardinalOutOfRange { cardinal: usize, size: usize },
}

impl Panic for IndexError {}

/// Converts a relative (ordinal) index into the corresponding zero-based index, mapping
/// `[-size..-1]` and `[1..size]` onto `[0..size)`.
///
/// # Panics
/// Panics if `size` is zero, `relative` is zero or `relative` is outside both ordinal ranges.
///
/// # Examples
/// ```
/// # use missing_utilities::composite::relative_to_cardinal;
/// assert_eq!(relative_to_cardinal(1, 5), 0);
/// assert_eq!(relative_to_cardinal(-2, 5), 3);
/// assert_eq!(relative_to_cardinal(-5, 5), 0);
/// ```
pub fn relative_to_cardinal(relative: isize, size: usize) -> usize {
    try_relative_to_cardinal(relative, size).unwrap_or_else(|error| error.panic())
}

/// A fallible version of [`relative_to_cardinal`].
pub fn try_relative_to_cardinal(relative: isize, size: usize) -> Result<usize, IndexError> {
    if size == 0 {
        Err(IndexError::EmptySequence)?
    }
    let magnitude = relative.unsigned_abs();
    match relative {
        0 => Err(IndexError::ZeroOrdinal),
        _ if magnitude > size => Err(IndexError::OrdinalOutOfRange { relative, size }),
        _ if relative < 0 => Ok(size - magnitude),
        _ => Ok(magnitude - 1),
    }
}

/// Converts a zero-based index into the corresponding positive ordinal, mapping `[0..size)` onto
/// `[1..size]`.
///
/// # Panics
/// Panics if `size` is zero or `cardinal` is not less than `size`.
///
/// # Examples
/// ```
/// # use missing_utilities::composite::cardinal_to_relative;
/// assert_eq!(cardinal_to_relative(0, 5), 1);
/// assert_eq!(cardinal_to_relative(3, 5), 4);
/// ```
pub fn cardinal_to_relative(cardinal: usize, size: usize) -> isize {
    try_cardinal_to_relative(cardinal, size).unwrap_or_else(|error| error.panic())
}

/// A fallible version of [`cardinal_to_relative`].
pub fn try_cardinal_to_relative(cardinal: usize, size: usize) -> Result<isize, IndexError> {
    if size == 0 {
        Err(IndexError::EmptySequence)?
    }
    if cardinal >= size {
        Err(IndexError::CardinalOutOfRange { cardinal, size })?
    }
    isize::try_from(cardinal + 1).map_err(|_| IndexError::CardinalOutOfRange { cardinal, size })
}
