//! # Separate Chaining Hash Map
//!
//! This module implements an integer **hash map** using **separate chaining**. Every bucket is an
//! ordered chain of `(key, value)` entries whose keys share the same [`hash`] index.
//! It supports:
//! - **Put**, **remove**, **search**, **contains** and **clear** through the [`HashMap`] trait
//!   (also available as inherent methods).
//! - A **configurable** initial capacity and load factor threshold, validated at construction.
//! - **Automatic growth**: once `size / capacity` exceeds the load factor, the bucket array is
//!   doubled and every entry is rehashed.
//!
//! Keys are unique map-wide and the first value written for a key wins: `put` on a present key
//! returns `false` and leaves the map untouched.
//!
//! The map is **not** thread-safe. Wrap it in a mutex if it has to be shared.
//!
//! ## Example
//! ```rust
//! use chainmap::cs::hashing::separate::ChainingHashMap;
//!
//! let mut map = ChainingHashMap::new(4, 1.0).unwrap();
//! assert!(map.put(-7, 70));
//! assert!(!map.put(-7, 71));
//! assert_eq!(map.search(-7), Some(70));
//! assert_eq!(map.remove(-7), Some(70));
//! assert!(map.is_empty());
//! ```

use log::{debug, trace, warn};

use super::hash_map::HashMap;
use super::modular::hash;
use crate::error::{Error, Result};

/// Factor by which the bucket array grows once the load factor is exceeded.
pub const GROWTH_COEFFICIENT: usize = 2;

/// Load factor used when none is specified.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Initial capacity used by [`ChainingHashMapBuilder`] when none is specified.
pub const DEFAULT_CAPACITY: usize = 16;

/// A single entry in a chain: `(key, value)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: i32,
    value: i32,
}

/// A "bucket" is a vector of entries for separate chaining.
type Bucket = Vec<Entry>;

/// A separate-chaining hash map over `i32` keys and values.
#[derive(Debug, Clone)]
pub struct ChainingHashMap {
    buckets: Vec<Bucket>,
    /// The number of stored key-value pairs.
    num_keys: usize,
    /// The maximum ratio `num_keys / capacity` tolerated before growing.
    load_factor: f64,
}

/// A builder for the `ChainingHashMap`.
/// Typically you'll call `.with_capacity(...)`, `.with_load_factor(...)`, then `.build()`.
#[derive(Debug, Clone)]
pub struct ChainingHashMapBuilder {
    capacity: usize,
    load_factor: f64,
}

impl Default for ChainingHashMapBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl ChainingHashMapBuilder {
    /// Creates a new builder with the default capacity and load factor.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the initial number of buckets.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor. If `size / capacity` exceeds it after a put, the map grows.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Validates the settings and builds the map.
    ///
    /// Fails with [`Error::InvalidCapacity`] for a zero capacity and with
    /// [`Error::InvalidLoadFactor`] for a load factor outside `(0, 1]`.
    pub fn build(self) -> Result<ChainingHashMap> {
        ChainingHashMap::new(self.capacity, self.load_factor)
    }
}

impl ChainingHashMap {
    /// Creates an empty map with `capacity` buckets and the given load factor.
    pub fn new(capacity: usize, load_factor: f64) -> Result<Self> {
        if capacity == 0 {
            warn!("rejected hash map capacity {}", capacity);
            return Err(Error::InvalidCapacity(capacity));
        }

        // written so that NaN is rejected too
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            warn!("rejected hash map load factor {}", load_factor);
            return Err(Error::InvalidLoadFactor(load_factor));
        }

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);

        Ok(Self {
            buckets,
            num_keys: 0,
            load_factor,
        })
    }

    /// Creates an empty map with `capacity` buckets and [`DEFAULT_LOAD_FACTOR`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Returns a builder preloaded with the defaults.
    pub fn builder() -> ChainingHashMapBuilder {
        ChainingHashMapBuilder::new()
    }

    /// Inserts `key -> value` unless `key` is already present.
    ///
    /// Returns `true` if the entry was added. May grow and rehash the whole map.
    pub fn put(&mut self, key: i32, value: i32) -> bool {
        if self.contains(key) {
            trace!("key {} already present, put ignored", key);
            return false;
        }

        let index = hash(key, self.buckets.len());
        self.buckets[index].push(Entry { key, value });
        self.num_keys += 1;

        if self.num_keys as f64 / self.buckets.len() as f64 > self.load_factor {
            let new_capacity = self.buckets.len() * GROWTH_COEFFICIENT;
            self.resize(new_capacity);
        }

        true
    }

    /// Removes and returns the value for `key`, if present.
    /// The remaining entries of the bucket keep their relative order.
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let index = hash(key, self.buckets.len());
        let bucket = &mut self.buckets[index];

        let pos = bucket.iter().position(|entry| entry.key == key)?;
        let removed = bucket.remove(pos);
        self.num_keys -= 1;

        Some(removed.value)
    }

    /// Returns the value bound to `key`, if present.
    ///
    /// Scans a single bucket, so the worst case (every key colliding) is linear.
    pub fn search(&self, key: i32) -> Option<i32> {
        let index = hash(key, self.buckets.len());
        for entry in &self.buckets[index] {
            if entry.key == key {
                return Some(entry.value);
            }
        }
        None
    }

    /// Removes every entry. Capacity and load factor stay as they are.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.num_keys = 0;
    }

    /// Returns `true` if an entry for `key` is stored.
    pub fn contains(&self, key: i32) -> bool {
        let index = hash(key, self.buckets.len());
        self.buckets[index].iter().any(|entry| entry.key == key)
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of key-value pairs in the map.
    pub fn size(&self) -> usize {
        self.num_keys
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Replaces the bucket array with `new_capacity` buckets and rehashes every entry into it.
    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.buckets.len());

        debug!(
            "growing chaining hash map from {} to {} buckets ({} keys)",
            self.buckets.len(),
            new_capacity,
            self.num_keys
        );

        let mut new_buckets = Vec::with_capacity(new_capacity);
        new_buckets.resize_with(new_capacity, Bucket::new);

        for bucket in self.buckets.drain(..) {
            for entry in bucket {
                new_buckets[hash(entry.key, new_capacity)].push(entry);
            }
        }

        self.buckets = new_buckets;
    }
}

impl HashMap for ChainingHashMap {
    fn put(&mut self, key: i32, value: i32) -> bool {
        ChainingHashMap::put(self, key, value)
    }

    fn remove(&mut self, key: i32) -> Option<i32> {
        ChainingHashMap::remove(self, key)
    }

    fn search(&self, key: i32) -> Option<i32> {
        ChainingHashMap::search(self, key)
    }

    fn clear(&mut self) {
        ChainingHashMap::clear(self)
    }

    fn contains(&self, key: i32) -> bool {
        ChainingHashMap::contains(self, key)
    }

    fn is_empty(&self) -> bool {
        ChainingHashMap::is_empty(self)
    }

    fn capacity(&self) -> usize {
        ChainingHashMap::capacity(self)
    }

    fn size(&self) -> usize {
        ChainingHashMap::size(self)
    }

    fn load_factor(&self) -> f64 {
        ChainingHashMap::load_factor(self)
    }
}

/// Inspection hooks for unit tests. Not part of the map's contract.
#[cfg(test)]
impl ChainingHashMap {
    /// Seeds `keys[i] -> values[i]` straight into their buckets with a load factor of 1.0.
    ///
    /// Skips the duplicate check and never grows, so callers must pass distinct keys and
    /// a capacity large enough for what they intend to test.
    pub(crate) fn from_raw(keys: &[i32], values: &[i32], capacity: usize) -> Self {
        assert_eq!(keys.len(), values.len());

        let mut map = Self::new(capacity, 1.0).expect("valid test capacity");
        for (&key, &value) in keys.iter().zip(values) {
            let index = hash(key, capacity);
            map.buckets[index].push(Entry { key, value });
        }
        map.num_keys = keys.len();
        map
    }

    /// Distinct stored keys, ascending.
    pub(crate) fn keys(&self) -> Vec<i32> {
        let keys: std::collections::BTreeSet<i32> = self
            .buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| entry.key))
            .collect();
        keys.into_iter().collect()
    }

    /// Distinct stored values, ascending.
    pub(crate) fn values(&self) -> Vec<i32> {
        let values: std::collections::BTreeSet<i32> = self
            .buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| entry.value))
            .collect();
        values.into_iter().collect()
    }
}
