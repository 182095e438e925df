//! Secondary index implementation
//!
//! HashMap of value -> BTreeSet of ids.

use std::collections::{BTreeSet, HashMap};

/// Maps a field value to the ids of all records sharing it
#[derive(Debug, Default, Clone)]
pub struct SecondaryIndex {
    entries: HashMap<String, BTreeSet<i32>>,
}

impl SecondaryIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `(value, id)` pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut index = Self::new();
        for (value, id) in pairs {
            index.insert(value, id);
        }
        index
    }

    /// Add `id` under `value`. Returns false if it was already present.
    pub fn insert(&mut self, value: &str, id: i32) -> bool {
        self.entries.entry(value.to_string()).or_default().insert(id)
    }

    /// Remove `id` from `value`, dropping the value once no ids remain.
    /// Returns false if the pair was not indexed.
    pub fn remove(&mut self, value: &str, id: i32) -> bool {
        let Some(ids) = self.entries.get_mut(value) else {
            return false;
        };
        let removed = ids.remove(&id);
        if ids.is_empty() {
            self.entries.remove(value);
        }
        removed
    }

    /// Ids stored under `value`, ascending
    pub fn get(&self, value: &str) -> Option<&BTreeSet<i32>> {
        self.entries.get(value)
    }

    /// Whether `id` is indexed under `value`
    pub fn contains(&self, value: &str, id: i32) -> bool {
        self.entries.get(value).is_some_and(|ids| ids.contains(&id))
    }

    /// Number of distinct indexed values
    pub fn value_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of (value, id) pairs
    pub fn id_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(value, ids)` entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<i32>)> {
        self.entries.iter().map(|(value, ids)| (value.as_str(), ids))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
