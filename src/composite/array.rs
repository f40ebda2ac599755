/// Returns the number of items in the provided slice.
pub const fn array_size<T>(array: &[T]) -> usize {
    array.len()
}

/// Returns a shallow copy of the provided slice. Each item is cloned, but nothing they point to
/// is.
pub fn copy_array<T: Clone>(array: &[T]) -> Vec<T> {
    array.to_vec()
}

/// Checks whether two slices hold equal items in the same order.
pub fn arrays_are_equal<T: PartialEq>(first: &[T], second: &[T]) -> bool {
    first == second
}

/// Returns a new sequence holding the items of `first` followed by the items of `second`.
///
/// # Examples
/// ```
/// # use missing_utilities::composite::combine_arrays;
/// assert_eq!(combine_arrays(&[1, 2], &[3]), vec![1, 2, 3]);
/// ```
pub fn combine_arrays<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut combined = Vec::with_capacity(first.len() + second.len());
    combined.extend_from_slice(first);
    combined.extend_from_slice(second);
    combined
}
