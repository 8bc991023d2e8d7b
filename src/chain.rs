//! Singly linked chain of key/value entries backing one bucket.
//!
//! Each bucket of the map owns one `Chain`. Nodes are linked through plain
//! `Option<Box<_>>` ownership: no shared references, no cycles, so a node is
//! freed exactly when its chain unlinks it.
//!
//! `Clone`, `Debug` and the drop glue are all written as loops. The derived
//! forms would recurse once per node and a single bucket can hold every
//! entry in the map, so chain depth is bounded only by the entry count.

use std::fmt;

/// One key/value node in a bucket chain.
pub(crate) struct Entry<V> {
    /// Key owned by this entry; unique within the whole map.
    key: String,
    /// Value payload stored alongside the key.
    value: V,
    /// Next node toward the back of the chain.
    next: Option<Box<Entry<V>>>,
}

impl<V> Entry<V> {
    /// Returns the entry's key.
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// Returns a shared reference to the entry's value.
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the entry's value, so callers can
    /// overwrite it in place without relinking or reallocating the node.
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The link to the next node is elided; formatting it would walk the
        // rest of the chain, one stack frame per node.
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// An owned, index-free singly linked chain of entries.
///
/// New entries are linked at the front, so traversal yields most recently
/// inserted entries first. The length is cached so empty-bucket scans do not
/// walk the nodes.
pub(crate) struct Chain<V> {
    /// First node of the chain, if any.
    head: Option<Box<Entry<V>>>,
    /// Cached number of nodes in the chain.
    len: usize,
}

impl<V> Chain<V> {
    /// Creates an empty chain.
    pub(crate) fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of entries in the chain.
    #[allow(dead_code)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the chain holds no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Links a new entry at the front of the chain.
    ///
    /// Callers are expected to have checked for a duplicate key first; the
    /// chain itself does not enforce uniqueness.
    pub(crate) fn insert(&mut self, key: String, value: V) {
        let next = self.head.take();
        self.head = Some(Box::new(Entry { key, value, next }));
        self.len = self.len.saturating_add(1);
    }

    /// Returns the entry holding `key`, if the chain contains one.
    pub(crate) fn find(&self, key: &str) -> Option<&Entry<V>> {
        self.iter().find(|entry| entry.key == key)
    }

    /// Returns the entry holding `key` mutably, if the chain contains one.
    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Entry<V>> {
        let mut current = self.head.as_deref_mut();
        while let Some(entry) = current {
            if entry.key == key {
                return Some(entry);
            }
            current = entry.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the entry holding `key` and returns its value, or `None` if
    /// the chain does not contain the key.
    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        if self.head.as_ref().is_some_and(|entry| entry.key == key) {
            if let Some(entry) = self.head.take() {
                let Entry { value, next, .. } = *entry;
                self.head = next;
                self.len = self.len.saturating_sub(1);
                return Some(value);
            }
        }

        let mut current = self.head.as_deref_mut();
        while let Some(entry) = current {
            if entry.next.as_ref().is_some_and(|next| next.key == key) {
                if let Some(removed) = entry.next.take() {
                    let Entry { value, next, .. } = *removed;
                    entry.next = next;
                    self.len = self.len.saturating_sub(1);
                    return Some(value);
                }
            }
            current = entry.next.as_deref_mut();
        }
        None
    }

    /// Returns a borrowing iterator over the chain's entries, front to back.
    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter { next: self.head.as_deref() }
    }
}

impl<V: Clone> Clone for Chain<V> {
    fn clone(&self) -> Self {
        // Rebuild front to back through a trailing cursor; cloning node by
        // node recursively would overflow the stack on a long chain.
        let mut head = None;
        let mut tail = &mut head;
        let mut source = self.head.as_deref();
        while let Some(entry) = source {
            let node = tail.insert(Box::new(Entry {
                key: entry.key.clone(),
                value: entry.value.clone(),
                next: None,
            }));
            tail = &mut node.next;
            source = entry.next.as_deref();
        }
        Self { head, len: self.len }
    }
}

impl<V: fmt::Debug> fmt::Debug for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|entry| (entry.key(), entry.value())))
            .finish()
    }
}

impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        // Unlink nodes one at a time; the default recursive drop would
        // overflow the stack on a degenerate single-bucket layout.
        let mut node = self.head.take();
        while let Some(mut entry) = node {
            node = entry.next.take();
        }
    }
}

impl<V> IntoIterator for Chain<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter { next: self.head.take() }
    }
}

/// Borrowing iterator over the entries of a chain, front to back.
#[derive(Debug, Clone)]
pub(crate) struct Iter<'a, V> {
    /// Next entry to yield.
    next: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}

/// Owning iterator that detaches entries from the front of a chain.
#[derive(Debug)]
pub(crate) struct IntoIter<V> {
    /// Next node to detach and yield.
    next: Option<Box<Entry<V>>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next.take()?;
        let Entry { key, value, next } = *entry;
        self.next = next;
        Some((key, value))
    }
}

impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) {
        // An unconsumed tail is unlinked node by node, like `Chain::drop`.
        let mut node = self.next.take();
        while let Some(mut entry) = node {
            node = entry.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_find() {
        let mut chain = Chain::new();
        assert!(chain.is_empty());

        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.find("a").map(Entry::value), Some(&1));
        assert_eq!(chain.find("b").map(Entry::value), Some(&2));
        assert!(chain.find("c").is_none());
    }

    #[test]
    fn test_front_insert_order() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);
        chain.insert("c".to_string(), 3);

        let keys: Vec<&str> = chain.iter().map(Entry::key).collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);

        if let Some(entry) = chain.find_mut("a") {
            *entry.value_mut() = 10;
        }

        assert_eq!(chain.find("a").map(Entry::value), Some(&10));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_remove_head() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);

        assert_eq!(chain.remove("b"), Some(2));
        assert_eq!(chain.len(), 1);
        assert!(chain.find("b").is_none());
        assert_eq!(chain.find("a").map(Entry::value), Some(&1));
    }

    #[test]
    fn test_remove_interior() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);
        chain.insert("c".to_string(), 3);

        assert_eq!(chain.remove("b"), Some(2));
        let keys: Vec<&str> = chain.iter().map(Entry::key).collect();
        assert_eq!(keys, vec!["c", "a"]);
    }

    #[test]
    fn test_remove_tail() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);
        chain.insert("c".to_string(), 3);

        assert_eq!(chain.remove("a"), Some(1));
        assert_eq!(chain.len(), 2);
        assert!(chain.find("a").is_none());
    }

    #[test]
    fn test_remove_absent() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);

        assert_eq!(chain.remove("missing"), None);
        assert_eq!(chain.len(), 1);

        let mut empty: Chain<i32> = Chain::new();
        assert_eq!(empty.remove("anything"), None);
    }

    #[test]
    fn test_into_iter_drains_front_to_back() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);

        let drained: Vec<(String, i32)> = chain.into_iter().collect();
        assert_eq!(drained, vec![("b".to_string(), 2), ("a".to_string(), 1)]);
    }

    #[test]
    fn test_clone_is_deep_and_keeps_order() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);
        chain.insert("c".to_string(), 3);

        let mut cloned = chain.clone();
        if let Some(entry) = cloned.find_mut("b") {
            *entry.value_mut() = 20;
        }

        assert_eq!(cloned.len(), 3);
        assert_eq!(chain.find("b").map(Entry::value), Some(&2));
        assert_eq!(cloned.find("b").map(Entry::value), Some(&20));

        let keys: Vec<&str> = cloned.iter().map(Entry::key).collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_debug_lists_entries_front_to_back() {
        let mut chain = Chain::new();
        chain.insert("a".to_string(), 1);
        chain.insert("b".to_string(), 2);

        assert_eq!(format!("{chain:?}"), r#"[("b", 2), ("a", 1)]"#);
    }

    #[test]
    fn test_long_chain_drops_without_recursion() {
        let mut chain = Chain::new();
        for i in 0..100_000 {
            chain.insert(format!("key{i}"), i);
        }
        assert_eq!(chain.len(), 100_000);
        drop(chain);
    }

    #[test]
    fn test_long_chain_clones_without_recursion() {
        let mut chain = Chain::new();
        for i in 0..200_000 {
            chain.insert(format!("key{i}"), i);
        }

        let cloned = chain.clone();
        assert_eq!(cloned.len(), 200_000);
        assert_eq!(cloned.find("key199999").map(Entry::value), Some(&199_999));
        assert_eq!(cloned.find("key0").map(Entry::value), Some(&0));
    }

    #[test]
    fn test_long_chain_debug_without_recursion() {
        let mut chain = Chain::new();
        for i in 0..200_000 {
            chain.insert(format!("key{i}"), i);
        }

        let rendered = format!("{chain:?}");
        assert!(rendered.starts_with(r#"[("key199999", 199999)"#));
        assert!(rendered.ends_with(r#"("key0", 0)]"#));
    }

    #[test]
    fn test_partially_consumed_into_iter_drops_without_recursion() {
        let mut chain = Chain::new();
        for i in 0..200_000 {
            chain.insert(format!("key{i}"), i);
        }

        let mut entries = chain.into_iter();
        assert_eq!(entries.next(), Some(("key199999".to_string(), 199_999)));
        drop(entries);
    }
}
