use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns the number of entries in the provided map.
pub fn map_size<K, V, S>(map: &HashMap<K, V, S>) -> usize {
    map.len()
}

/// Returns a shallow copy of the provided map, using the same hasher.
pub fn copy_map<K: Clone, V: Clone, S: Clone>(map: &HashMap<K, V, S>) -> HashMap<K, V, S> {
    map.clone()
}

/// Checks whether two maps hold the same keys, each associated with equal values.
pub fn maps_are_equal<K, V, S>(first: &HashMap<K, V, S>, second: &HashMap<K, V, S>) -> bool
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    first == second
}

/// Returns a new map holding the entries of both maps. When both maps share a key, the value from
/// `second` is kept.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use missing_utilities::composite::combine_maps;
/// let first = HashMap::from([("a", 1), ("b", 2)]);
/// let second = HashMap::from([("b", 3)]);
/// assert_eq!(combine_maps(&first, &second), HashMap::from([("a", 1), ("b", 3)]));
/// ```
pub fn combine_maps<K, V, S>(
    first: &HashMap<K, V, S>,
    second: &HashMap<K, V, S>,
) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    let mut combined = first.clone();
    combined.extend(second.iter().map(|(key, value)| (key.clone(), value.clone())));
    combined
}
