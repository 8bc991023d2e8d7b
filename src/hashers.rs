//! Pluggable hash functions for [`ChainedHashMap`](crate::ChainedHashMap).
//!
//! A map stores one of these as a plain function pointer, chosen at
//! construction and fixed for the map's lifetime. All of them are
//! deterministic across runs, so bucket layouts are reproducible.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Signature shared by every hash function a map can be built with.
pub type HashFn = fn(&str) -> u64;

/// Sums the Unicode code points of the key's characters.
///
/// Simple and fast, but anagrams collide: `"ab"` and `"ba"` hash alike.
#[must_use]
pub fn char_sum(key: &str) -> u64 {
    key.chars().fold(0_u64, |hash, ch| hash.wrapping_add(u64::from(ch)))
}

/// Sums the key's Unicode code points scaled by their one-based position.
///
/// The position weight breaks the anagram collisions of [`char_sum`].
#[must_use]
pub fn weighted_sum(key: &str) -> u64 {
    let mut hash = 0_u64;
    let mut weight = 1_u64;
    for ch in key.chars() {
        hash = hash.wrapping_add(weight.wrapping_mul(u64::from(ch)));
        weight = weight.wrapping_add(1);
    }
    hash
}

/// Hashes the key with the standard library's SipHash implementation.
///
/// `DefaultHasher::new()` always uses the same fixed keys, so unlike a
/// `RandomState`-seeded hasher this stays deterministic across processes.
#[must_use]
pub fn sip(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}
