//! Keyed memo caches with a compute-on-miss contract.

use std::hash::Hash;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// A monotonic memo table: entries never change once set.
///
/// The compute closure runs outside the lock, so a computation may
/// recurse into the same cache (qualified-name computation walks up
/// through ancestors). Racing computations for one key produce equal
/// values; the losing insert is dropped.
#[derive(Debug)]
pub struct MemoCache<K, V> {
    entries: RwLock<FxHashMap<K, V>>,
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or compute and store it once.
    pub fn get_or_update(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.entries.read().get(&key) {
            return hit.clone();
        }
        let value = compute();
        self.entries
            .write()
            .entry(key)
            .or_insert_with(|| value.clone());
        value
    }

    /// Fallible variant of [`get_or_update`](Self::get_or_update).
    /// Only successful computations are stored.
    pub fn try_get_or_update<E>(
        &self,
        key: K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(hit) = self.entries.read().get(&key) {
            return Ok(hit.clone());
        }
        let value = compute()?;
        self.entries
            .write()
            .entry(key)
            .or_insert_with(|| value.clone());
        Ok(value)
    }
}
