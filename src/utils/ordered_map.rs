//! Insertion-ordered map.
//!
//! Entries live in a `Vec` in first-insertion order; a `HashMap` holds each
//! key's slot. Re-inserting a key replaces the value without moving it.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if the key existed.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Mutable access to the value for `key`, inserting `default()` at the end first if absent.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, default()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K: Eq + Hash + Clone, V: PartialEq> PartialEq for OrderedMap<K, V> {
    /// Equal when both hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash + Clone, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedMap;

    #[test]
    fn preserves_first_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        map.insert("c", 3);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn reinsert_overwrites_in_place() {
        let mut map = OrderedMap::new();
        map.insert("x", "first");
        map.insert("y", "other");
        let previous = map.insert("x", "last");

        assert_eq!(previous, Some("first"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&"x", &"last"), (&"y", &"other")]);
    }

    #[test]
    fn get_or_insert_with_appends_once() {
        let mut map: OrderedMap<String, Vec<u8>> = OrderedMap::new();
        map.get_or_insert_with("a".to_string(), Vec::new).push(1);
        map.get_or_insert_with("b".to_string(), Vec::new).push(2);
        map.get_or_insert_with("a".to_string(), Vec::new).push(3);

        assert_eq!(map.get("a"), Some(&vec![1, 3]));
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab: OrderedMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: OrderedMap<_, _> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(ab, ba);
        assert!(ab.contains_key("a"));
    }
}
