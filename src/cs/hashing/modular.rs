//! # Modular Hashing
//!
//! The bucket-index function used by [`ChainingHashMap`](super::ChainingHashMap): the magnitude
//! of an integer key reduced modulo the table capacity.
//!
//! ```text
//!   hash(k, m) = |k| mod m
//! ```
//!
//! Negative keys hash to the same index as their positive counterparts, so `hash(-5, m)` and
//! `hash(5, m)` always agree. The magnitude is taken as an unsigned value, which keeps
//! `i32::MIN` in range.
//!
//! # Usage
//!
//! ```rust
//! use chainmap::cs::hashing::modular::hash;
//!
//! assert_eq!(hash(17, 5), 2);
//! assert_eq!(hash(-17, 5), 2);
//! ```

/// Maps `key` to a bucket index in `[0, capacity)`.
///
/// # Panics
/// Panics if `capacity` is zero.
pub fn hash(key: i32, capacity: usize) -> usize {
    assert!(capacity > 0, "capacity must be greater than zero");
    key.unsigned_abs() as usize % capacity
}
