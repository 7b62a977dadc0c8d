pub mod cs;
pub mod error;

pub use cs::hashing::{hash, ChainingHashMap, ChainingHashMapBuilder, HashMap};
pub use error::{Error, Result};
