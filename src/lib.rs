//! # Chained Hash Map
//!
//! A Rust implementation of a hash table with separate chaining.
//!
//! This crate provides:
//!
//! - `ChainedHashMap`: a single-threaded map that keeps colliding entries in
//!   per-bucket linked chains
//! - `find_mode`: a frequency analysis helper built on top of the map
//!
//! The table always holds a prime number of buckets and doubles (then rounds
//! up to the next prime) whenever its load factor reaches 1.0, so chains stay
//! short. The hash function is pluggable per map: pick one of the functions
//! in [`hashers`] or pass your own `fn(&str) -> u64`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chained::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Prime Capacities and Growth
//!
//! ```rust
//! use chained::ChainedHashMap;
//!
//! // Requested capacities are rounded up to a prime
//! let map: ChainedHashMap<i32> = ChainedHashMap::with_capacity(20);
//! assert_eq!(map.capacity(), 23);
//!
//! // Filling the table doubles it: 23 buckets become 47
//! let mut map = ChainedHashMap::with_capacity(23);
//! for i in 0..24 {
//!     map.insert(format!("key-{}", i), i);
//! }
//! assert_eq!(map.capacity(), 47);
//! assert!(map.load_factor() < 1.0);
//! ```
//!
//! ## Choosing a Hash Function
//!
//! ```rust
//! use chained::{hashers, ChainedHashMap};
//!
//! // The position-weighted hasher keeps anagram keys apart
//! let mut map = ChainedHashMap::with_capacity_and_hasher(11, hashers::weighted_sum);
//! map.insert("stop".to_string(), 1);
//! map.insert("pots".to_string(), 2);
//! assert_eq!(map.get("stop"), Some(&1));
//! assert_eq!(map.get("pots"), Some(&2));
//! ```
//!
//! ## Finding Modal Values
//!
//! ```rust
//! use chained::find_mode;
//!
//! let words = ["apple", "apple", "grape", "melon", "peach"];
//! let (modes, frequency) = find_mode(&words);
//! assert_eq!(modes, vec!["apple"]);
//! assert_eq!(frequency, 2);
//! ```

/// Module implementing the per-bucket linked chains
mod chain;
/// Module implementing the separate-chaining hash map
mod chained_hashmap;
/// Hash functions a map can be constructed with
pub mod hashers;
/// Utility functions and traits for the hash map
mod utils;

pub use chained_hashmap::{ChainedHashMap, Iter};
pub use hashers::HashFn;
pub use utils::{find_mode, HashMapExtensions};
