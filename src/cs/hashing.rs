pub mod hash_map;
pub mod modular;
pub mod separate;

#[cfg(test)]
pub(crate) mod testing;

pub use hash_map::HashMap;
pub use modular::hash;
pub use separate::{
    ChainingHashMap, ChainingHashMapBuilder, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR,
    GROWTH_COEFFICIENT,
};
