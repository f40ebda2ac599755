//! Deterministic ordering of map keys.
//!
//! Hash-based maps iterate in an order that changes from run to run (and from map to map), so the
//! keys of every rendered map are sorted first. Keys are ordered by kind, using the fixed table in
//! [`KeyRank`], and then by value within a kind:
//! - booleans: `false` before `true`
//! - integers and floats: numerically (floats by IEEE total order)
//! - complex numbers: by magnitude, then by their real and imaginary parts
//! - characters: by code point
//! - text: lexicographically by code point
//!
//! Sorting is stable, so keys that compare equal keep the order they were provided in.

use std::cmp::Ordering;

use tracing::error;

use crate::format::{UnsupportedKeyPanic, Value, format_value};
use crate::util::panic::Panic;

/// The priority of a key's kind when ordering keys of different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyRank {
    Bool = 0,
    U8 = 1,
    U16 = 2,
    U32 = 3,
    U64 = 4,
    Usize = 5,
    I8 = 6,
    I16 = 7,
    I32 = 8,
    I64 = 9,
    Isize = 10,
    F32 = 11,
    F64 = 12,
    Complex32 = 13,
    Complex64 = 14,
    Char = 15,
    Text = 16,
}

impl KeyRank {
    /// Returns the rank of the provided key, looking through one polymorphic wrapper. Keys that
    /// aren't scalars have no rank.
    pub fn of(key: &Value<'_>) -> Option<KeyRank> {
        let rank = match unwrap_any(key) {
            Value::Bool(_) => KeyRank::Bool,
            Value::U8(_) => KeyRank::U8,
            Value::U16(_) => KeyRank::U16,
            Value::U32(_) => KeyRank::U32,
            Value::U64(_) => KeyRank::U64,
            Value::Usize(_) => KeyRank::Usize,
            Value::I8(_) => KeyRank::I8,
            Value::I16(_) => KeyRank::I16,
            Value::I32(_) => KeyRank::I32,
            Value::I64(_) => KeyRank::I64,
            Value::Isize(_) => KeyRank::Isize,
            Value::F32(_) => KeyRank::F32,
            Value::F64(_) => KeyRank::F64,
            Value::Complex32(_) => KeyRank::Complex32,
            Value::Complex64(_) => KeyRank::Complex64,
            Value::Char(_) => KeyRank::Char,
            Value::Text(_) => KeyRank::Text,
            _ => return None,
        };
        Some(rank)
    }
}

fn unwrap_any<'v, 'a>(key: &'v Value<'a>) -> &'v Value<'a> {
    match key {
        Value::Any(inner) => inner,
        other => other,
    }
}

/// Compares two map keys, first by [`KeyRank`] and then by value.
///
/// # Panics
/// Panics with an [`UnsupportedKeyPanic`] if either key has no [`KeyRank`].
pub fn compare_keys(first: &Value<'_>, second: &Value<'_>) -> Ordering {
    let first_rank = KeyRank::of(first).unwrap_or_else(|| unsupported(first));
    let second_rank = KeyRank::of(second).unwrap_or_else(|| unsupported(second));
    if first_rank != second_rank {
        return first_rank.cmp(&second_rank);
    }

    match (unwrap_any(first), unwrap_any(second)) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::U8(a), Value::U8(b)) => a.cmp(b),
        (Value::U16(a), Value::U16(b)) => a.cmp(b),
        (Value::U32(a), Value::U32(b)) => a.cmp(b),
        (Value::U64(a), Value::U64(b)) => a.cmp(b),
        (Value::Usize(a), Value::Usize(b)) => a.cmp(b),
        (Value::I8(a), Value::I8(b)) => a.cmp(b),
        (Value::I16(a), Value::I16(b)) => a.cmp(b),
        (Value::I32(a), Value::I32(b)) => a.cmp(b),
        (Value::I64(a), Value::I64(b)) => a.cmp(b),
        (Value::Isize(a), Value::Isize(b)) => a.cmp(b),
        (Value::F32(a), Value::F32(b)) => a.total_cmp(b),
        (Value::F64(a), Value::F64(b)) => a.total_cmp(b),
        (Value::Complex32(a), Value::Complex32(b)) => {
            a.norm()
                .total_cmp(&b.norm())
                .then_with(|| a.re.total_cmp(&b.re))
                .then_with(|| a.im.total_cmp(&b.im))
        },
        (Value::Complex64(a), Value::Complex64(b)) => {
            a.norm()
                .total_cmp(&b.norm())
                .then_with(|| a.re.total_cmp(&b.re))
                .then_with(|| a.im.total_cmp(&b.im))
        },
        (Value::Char(a), Value::Char(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        // Equal ranks always share a variant.
        _ => Ordering::Equal,
    }
}

/// Sorts the provided keys in place, using [`compare_keys`].
///
/// # Panics
/// Panics if two keys without a [`KeyRank`] are compared.
///
/// # Examples
/// ```
/// # use missing_utilities::format::{sort_keys, Value};
/// let (a, b, one, yes) = (Value::text("b"), Value::text("a"), Value::I64(1), Value::Bool(true));
/// let mut keys = vec![&a, &b, &one, &yes];
/// sort_keys(&mut keys);
/// assert!(matches!(keys[0], Value::Bool(true)));
/// assert!(matches!(keys[1], Value::I64(1)));
/// assert!(matches!(keys[2], Value::Text(text) if text == "a"));
/// ```
pub fn sort_keys(keys: &mut [&Value<'_>]) {
    keys.sort_by(|first, second| compare_keys(first, second));
}

/// Sorts map entries by key, using [`compare_keys`].
pub(crate) fn sort_entries<'v, 'a>(entries: &mut [&'v (Value<'a>, Value<'a>)]) {
    entries.sort_by(|(first, _), (second, _)| compare_keys(first, second));
}

fn unsupported(key: &Value<'_>) -> ! {
    let panic = UnsupportedKeyPanic {
        value: format_value(key),
        type_name: key.type_of().to_string(),
    };
    error!(category = %key.category(), "{}", panic);
    panic.panic()
}
