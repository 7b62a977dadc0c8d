//! # Hash Map Capability
//!
//! The operation set shared by the integer hash maps in this crate. Any storage strategy
//! (separate chaining, open addressing, ...) can stand behind it; callers that only need the
//! key-value operations should take `&dyn HashMap` or `impl HashMap`.

/// An integer-keyed, integer-valued hash map.
///
/// Keys are unique map-wide. Inserting a key that is already present leaves the stored value
/// untouched.
pub trait HashMap {
    /// Adds `key -> value`. Returns `false` if `key` is already present.
    fn put(&mut self, key: i32, value: i32) -> bool;

    /// Removes the entry for `key`, returning its value.
    fn remove(&mut self, key: i32) -> Option<i32>;

    /// Looks up the value bound to `key`.
    fn search(&self, key: i32) -> Option<i32>;

    /// Removes every entry. Capacity is kept.
    fn clear(&mut self);

    /// Returns `true` if an entry for `key` exists.
    fn contains(&self, key: i32) -> bool;

    fn is_empty(&self) -> bool;

    /// Current number of buckets.
    fn capacity(&self) -> usize;

    /// Number of stored key-value pairs.
    fn size(&self) -> usize;

    /// Occupancy threshold (`size / capacity`) past which the map grows.
    fn load_factor(&self) -> f64;
}
