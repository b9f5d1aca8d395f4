//! Insertion-order-preserving key/value map.
//!
//! Grouping operations (status distribution, per-performer totals) must
//! report buckets in first-seen order. A `HashMap` loses that order, so the
//! accumulators use this map instead. Pages are small (at most a few hundred
//! rows), so lookups scan linearly rather than carrying a side index.

/// A map that iterates entries in the order keys were first inserted.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to the value for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`, inserting the
    /// result of `default` first if the key is new. New keys go to the end,
    /// which is what preserves first-seen iteration order.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        if let Some(pos) = self.entries.iter().position(|(k, _)| k == &key) {
            return &mut self.entries[pos].1;
        }
        self.entries.push((key, default()));
        let last = self.entries.len() - 1;
        &mut self.entries[last].1
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: PartialEq, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
