// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Lazily built key to position index.
//!
//! The index is a cache over one particular item sequence, identified by its
//! `Rc`. It is built on the first lookup against a sequence and reused until
//! a lookup arrives for a different sequence, at which point it is thrown
//! away and rebuilt from scratch. It is never patched incrementally, so it
//! either matches the sequence it was built for or is not built at all.
//!
//! The cached sequence is held by a strong `Rc`, so its address cannot be
//! reused by a different sequence while the cache is alive.
//!
//! Duplicate keys resolve last-write-wins: the later position shadows the
//! earlier one.

use std::hash::Hash;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::state::Items;

/// A key to position map over one item sequence.
pub struct KeyedIndex<T, K> {
    /// The sequence the map was built from.
    source: Option<Items<T>>,
    /// Map from key to position in `source`.
    positions: FxHashMap<K, usize>,
    /// How many times the map has been (re)built.
    builds: u64,
}

impl<T, K: Eq + Hash> Default for KeyedIndex<T, K> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T, K: Eq + Hash> KeyedIndex<T, K> {
    /// Create an index that has not been built for any sequence.
    pub fn new() -> KeyedIndex<T, K> {
        return KeyedIndex {
            source: None,
            positions: FxHashMap::default(),
            builds: 0,
        };
    }

    /// Is the map currently built for exactly `items`?
    #[inline]
    pub fn is_built_for(&self, items: &Items<T>) -> bool {
        return self.source.as_ref().is_some_and(|source| Rc::ptr_eq(source, items));
    }

    /// Number of full builds so far.
    #[inline]
    pub fn builds(&self) -> u64 {
        return self.builds;
    }

    /// Drop the cached map.
    pub fn invalidate(&mut self) {
        self.source = None;
        self.positions.clear();
    }

    fn ensure(&mut self, items: &Items<T>, get_key: &dyn Fn(&T) -> K) {
        if self.is_built_for(items) {
            return;
        }

        self.positions.clear();
        self.positions.reserve(items.len());
        for (position, item) in items.iter().enumerate() {
            self.positions.insert(get_key(item), position);
        }
        self.source = Some(Rc::clone(items));
        self.builds += 1;

        tracing::debug!(target: "keyed_list::index", items = items.len(), keys = self.positions.len(), "rebuilt keyed index");
    }

    /// Position of the item with `key`, if any.
    pub fn position(&mut self, items: &Items<T>, get_key: &dyn Fn(&T) -> K, key: &K) -> Option<usize> {
        self.ensure(items, get_key);
        return self.positions.get(key).copied();
    }

    /// The item with `key`, if any.
    pub fn item(&mut self, items: &Items<T>, get_key: &dyn Fn(&T) -> K, key: &K) -> Option<Rc<T>> {
        let position = self.position(items, get_key, key)?;
        return items.get(position).cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&'static str]) -> Items<&'static str> {
        return Rc::new(values.iter().map(|v| Rc::new(*v)).collect());
    }

    fn ident(item: &&'static str) -> &'static str {
        return *item;
    }

    #[test]
    fn not_built_until_first_lookup() {
        let seq = items(&["a", "b"]);
        let mut index = KeyedIndex::new();
        assert!(!index.is_built_for(&seq));
        assert_eq!(index.builds(), 0);

        assert_eq!(index.position(&seq, &ident, &"b"), Some(1));
        assert!(index.is_built_for(&seq));
        assert_eq!(index.builds(), 1);
    }

    #[test]
    fn reused_for_same_sequence() {
        let seq = items(&["a", "b", "c"]);
        let mut index = KeyedIndex::new();
        index.position(&seq, &ident, &"a");
        index.position(&seq, &ident, &"c");
        index.item(&seq, &ident, &"b");
        assert_eq!(index.builds(), 1);
    }

    #[test]
    fn rebuilt_for_new_sequence() {
        let first = items(&["a", "b"]);
        let second = items(&["b", "a"]);
        let mut index = KeyedIndex::new();

        assert_eq!(index.position(&first, &ident, &"a"), Some(0));
        assert_eq!(index.position(&second, &ident, &"a"), Some(1));
        assert_eq!(index.builds(), 2);
        assert!(!index.is_built_for(&first));
    }

    #[test]
    fn equal_contents_still_rebuild() {
        let first = items(&["a"]);
        let second = items(&["a"]);
        let mut index = KeyedIndex::new();
        index.position(&first, &ident, &"a");
        index.position(&second, &ident, &"a");
        assert_eq!(index.builds(), 2);
    }

    #[test]
    fn missing_key() {
        let seq = items(&["a"]);
        let mut index = KeyedIndex::new();
        assert_eq!(index.position(&seq, &ident, &"z"), None);
        assert!(index.item(&seq, &ident, &"z").is_none());
    }

    #[test]
    fn item_is_the_stored_rc() {
        let seq = items(&["a", "b"]);
        let mut index = KeyedIndex::new();
        let item = index.item(&seq, &ident, &"b").unwrap();
        assert!(Rc::ptr_eq(&item, &seq[1]));
    }

    #[test]
    fn duplicates_last_write_wins() {
        let seq = items(&["a", "b", "a"]);
        let mut index = KeyedIndex::new();
        assert_eq!(index.position(&seq, &ident, &"a"), Some(2));
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let seq = items(&["a"]);
        let mut index = KeyedIndex::new();
        index.position(&seq, &ident, &"a");
        index.invalidate();
        assert!(!index.is_built_for(&seq));
        index.position(&seq, &ident, &"a");
        assert_eq!(index.builds(), 2);
    }
}
