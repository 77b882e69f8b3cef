//! Error type for the std-level surfaces
//!
//! Hashing itself cannot fail; only building functors from outside input
//! (descriptors, JSON, OS entropy) can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid functor descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("No predefined functor at index {0}")]
    UnknownPredefined(usize),

    #[error("OS entropy unavailable: {0}")]
    Entropy(String),

    #[error("Descriptor JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex seed: {0}")]
    Hex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, Error>;
