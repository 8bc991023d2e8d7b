//! Utility functions and traits built on top of [`ChainedHashMap`].

use crate::ChainedHashMap;

/// Convenience accessors for a map's keys and values as owned vectors.
pub trait HashMapExtensions<V> {
    /// Returns every key in the map, in bucket-layout order.
    fn keys(&self) -> Vec<String>;

    /// Returns every value in the map, in bucket-layout order.
    fn values(&self) -> Vec<V>;
}

impl<V: Clone> HashMapExtensions<V> for ChainedHashMap<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }
}

/// Returns the most frequent value(s) of a sequence together with how many
/// times they occur.
///
/// Every element is tallied in a [`ChainedHashMap`] keyed by the element
/// itself, then the tallies are scanned twice: once for the highest count
/// and once to collect every element matching it. Ties all make it into the
/// result, ordered by the tally map's bucket layout rather than by first
/// appearance. An empty input yields `(vec![], 0)`.
///
/// ```rust
/// use chained::find_mode;
///
/// let (modes, frequency) = find_mode(&["apple", "grape", "apple"]);
/// assert_eq!(modes, vec!["apple"]);
/// assert_eq!(frequency, 2);
/// ```
#[must_use]
pub fn find_mode<S: AsRef<str>>(values: &[S]) -> (Vec<String>, usize) {
    let mut counts: ChainedHashMap<usize> = ChainedHashMap::new();
    for value in values {
        let key = value.as_ref();
        let count = match counts.get(key) {
            Some(count) => count.saturating_add(1),
            None => 1,
        };
        counts.insert(key.to_owned(), count);
    }

    let pairs = counts.keys_and_values();
    let frequency = pairs.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let modes = pairs
        .into_iter()
        .filter(|&(_, count)| count == frequency)
        .map(|(key, _)| key)
        .collect();

    (modes, frequency)
}

/// Creates a `ChainedHashMap` from an iterator of key/value pairs.
#[allow(dead_code)]
pub fn from_iter<V, I>(iter: I) -> ChainedHashMap<V>
where
    I: IntoIterator<Item = (String, V)>,
{
    let mut map = ChainedHashMap::new();
    for (key, value) in iter {
        map.insert(key, value);
    }
    map
}
