use std::mem;

use crate::chain::{Chain, Entry, Iter as ChainIter};
use crate::hashers::{self, HashFn};

/// Number of buckets a map starts with when none is requested.
const DEFAULT_CAPACITY: usize = 11;

/// A hash map that resolves collisions by separate chaining.
///
/// Keys hash to one of a prime number of buckets and each bucket owns an
/// independent linked chain of entries, so colliding keys simply share a
/// chain. Once the load factor (entries per bucket) reaches 1.0 the table
/// doubles its bucket count, rounds it up to a prime and rehashes every
/// entry, keeping chains short without any probing scheme.
///
/// The hash function is supplied at construction as a plain function
/// pointer and stays fixed for the map's lifetime; see [`crate::hashers`]
/// for the provided ones.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// Bucket array; its length is the table capacity and is always prime.
    buckets: Vec<Chain<V>>,
    /// Number of distinct keys currently stored across all chains.
    size: usize,
    /// Hash function mapping a key to a bucket, fixed at construction.
    hash_function: HashFn,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(String, V)> for ChainedHashMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> ChainedHashMap<V> {
    /// Creates an empty map with the default capacity and the
    /// [`hashers::char_sum`] hash function.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with at least `capacity` buckets.
    ///
    /// The requested capacity is rounded up to a prime; asking for zero or
    /// one bucket yields the smallest table the search produces, three.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, hashers::char_sum)
    }

    /// Creates an empty map with at least `capacity` buckets and the given
    /// hash function.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_function: HashFn) -> Self {
        let capacity = next_prime(capacity);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::new);
        Self { buckets, size: 0, hash_function }
    }

    /// Computes the bucket index for `key` with the configured hash function.
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index(&self, key: &str) -> usize {
        let hash = (self.hash_function)(key);
        (hash as usize).checked_rem(self.buckets.len()).unwrap_or(0)
    }

    /// Inserts a key/value pair, returning the previous value if the key
    /// was already present.
    ///
    /// A present key has its value overwritten in place and the size does
    /// not change. Before a genuinely new key is placed, a table whose load
    /// factor has reached 1.0 is resized to twice its current bucket count.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        if self.load_factor() >= 1.0 {
            let doubled = self.buckets.len().saturating_mul(2);
            self.resize(doubled);
        }

        let index = self.bucket_index(&key);
        let bucket = self.buckets.get_mut(index)?;

        if let Some(entry) = bucket.find_mut(&key) {
            return Some(mem::replace(entry.value_mut(), value));
        }

        bucket.insert(key, value);
        self.size = self.size.saturating_add(1);
        None
    }

    /// Returns a reference to the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets.get(index)?.find(key).map(Entry::value)
    }

    /// Returns a mutable reference to the value stored under `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)?.find_mut(key).map(Entry::value_mut)
    }

    /// Returns true if `key` is present in the map.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` from the map and returns its value, or `None` if the
    /// key was not present. Removing an absent key changes nothing.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let removed = self.buckets.get_mut(index)?.remove(key);
        if removed.is_some() {
            self.size = self.size.saturating_sub(1);
        }
        removed
    }

    /// Returns the number of key/value pairs in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the current number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the table's load factor, the mean number of entries per
    /// bucket. The bucket count is never zero, so the division is safe.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the number of buckets whose chain holds no entries.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Returns every key/value pair as an owned vector, in bucket order and
    /// front to back within each chain. The order is a layout artifact, not
    /// insertion order.
    #[must_use]
    pub fn keys_and_values(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }

    /// Returns an iterator over the map's key/value pairs, in the same
    /// order as [`Self::keys_and_values`].
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, index: 0, inner: None }
    }

    /// Removes every entry while keeping the current capacity and hash
    /// function.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = Chain::new();
        }
        self.size = 0;
    }

    /// Rebuilds the table with at least `new_capacity` buckets, rehashing
    /// every entry into the new layout.
    ///
    /// The requested capacity is rounded up to a prime before the rebuild.
    /// A request of zero is ignored. Entries are carried over through
    /// [`Self::insert`], so a target smaller than the current entry count
    /// grows again while rehashing until everything fits below full load.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity == 0 {
            return;
        }

        let mut rebuilt = Self::with_capacity_and_hasher(new_capacity, self.hash_function);
        for chain in mem::take(&mut self.buckets) {
            for (key, value) in chain {
                rebuilt.insert(key, value);
            }
        }

        *self = rebuilt;
    }
}

/// Reports whether `candidate` is prime, by trial division against odd
/// factors up to its square root.
#[allow(clippy::arithmetic_side_effects)]
fn is_prime(candidate: usize) -> bool {
    if candidate == 2 || candidate == 3 {
        return true;
    }
    if candidate < 2 || candidate % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    while factor.saturating_mul(factor) <= candidate {
        if candidate % factor == 0 {
            return false;
        }
        factor = factor.saturating_add(2);
    }
    true
}

/// Finds the prime the table should use for a requested capacity: an even
/// request is bumped by one, then odd candidates are tried in order.
fn next_prime(candidate: usize) -> usize {
    let mut candidate = if candidate % 2 == 0 {
        candidate.saturating_add(1)
    } else {
        candidate
    };
    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }
    candidate
}

/// Iterator over the key/value pairs of a [`ChainedHashMap`].
///
/// Buckets are visited in index order and each chain front to back.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// The map's bucket array.
    buckets: &'a [Chain<V>],
    /// Index of the next chain to start walking.
    index: usize,
    /// Walker over the current chain.
    inner: Option<ChainIter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.inner.as_mut().and_then(|inner| inner.next()) {
                return Some((entry.key(), entry.value()));
            }
            let chain = self.buckets.get(self.index)?;
            self.index = self.index.saturating_add(1);
            self.inner = Some(chain.iter());
        }
    }
}
