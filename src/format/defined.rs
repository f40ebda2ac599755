use crate::format::{Reflect, Value};

/// Checks whether or not the provided value is defined in a meaningful way. Empty text and
/// references to nothing (e.g. [`None`]) are considered undefined, as is [`Value::Nil`].
///
/// # Examples
/// ```
/// # use missing_utilities::format::is_defined;
/// assert!(is_defined(&0));
/// assert!(is_defined("FooBar"));
/// assert!(!is_defined(""));
/// assert!(!is_defined(&None::<i32>));
/// assert!(is_defined(&Some(5)));
/// ```
pub fn is_defined<T: Reflect + ?Sized>(value: &T) -> bool {
    defined(&value.reflect())
}

/// The negation of [`is_defined`].
pub fn is_undefined<T: Reflect + ?Sized>(value: &T) -> bool {
    !is_defined(value)
}

fn defined(value: &Value<'_>) -> bool {
    match value {
        Value::Nil => false,
        Value::Text(text) => !text.is_empty(),
        Value::Reference(reference) => reference.target.is_some(),
        Value::Any(inner) => defined(inner),
        _ => true,
    }
}
