//! OS-seeded functors
//!
//! Each call draws a fresh 64-bit seed from the OS and returns the functor
//! together with the descriptor that rebuilds it.

use crate::algorithm::{Mist, Yolk};
use crate::descriptor::{Family, FunctorDescriptor};
use crate::error::{Error, Result};

/// 64 bits from the OS random source
pub fn random_seed() -> Result<u64> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf).map_err(|e| Error::Entropy(e.to_string()))?;
    Ok(u64::from_le_bytes(buf))
}

/// Fresh [`Yolk`] with an OS-random seed
pub fn random_yolk() -> Result<(Yolk, FunctorDescriptor)> {
    let seed = random_seed()?;
    tracing::debug!(seed, "seeded yolk from OS entropy");
    Ok((Yolk::from_seed(seed), FunctorDescriptor::value(Family::Yolk, seed)))
}

/// Fresh [`Mist`] with an OS-random seed
pub fn random_mist() -> Result<(Mist, FunctorDescriptor)> {
    let seed = random_seed()?;
    tracing::debug!(seed, "seeded mist from OS entropy");
    Ok((Mist::from_seed(seed), FunctorDescriptor::value(Family::Mist, seed)))
}
