use thiserror::Error;

/// Errors raised while constructing a hash map.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("capacity must be greater than zero, got {0}")]
    InvalidCapacity(usize),
    #[error("load factor must be in range (0, 1], got {0}")]
    InvalidLoadFactor(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
