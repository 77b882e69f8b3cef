//! Water Hash Library
//!
//! Stable 32-bit and 64-bit fingerprints plus persistable salted functors.
//!
//! # Overview
//!
//! The hashing engine lives in the `water-core` crate and is re-exported as
//! [`algorithm`]. This crate adds what needs `std` and outside input:
//!
//! - **Descriptors**: serializable recipes ([`FunctorDescriptor`]) that
//!   rebuild a [`Yolk`] or [`Mist`] bit-for-bit, as JSON or as a short text
//!   form such as `mist:label=alpha`
//! - **OS-seeded functors**: [`random_mist`] and [`random_yolk`] return a
//!   fresh functor together with the descriptor that reproduces it
//! - **Errors**: one [`Error`] type for malformed descriptors, JSON and
//!   entropy failures
//!
//! # Example
//!
//! ```rust
//! use waterhash::algorithm::Flavor;
//! use waterhash::{hash64, FunctorDescriptor, Mist};
//!
//! let data = [1i64, 2, 3];
//! let _ = hash64(&data);
//!
//! // Persist a salted functor and rebuild it later
//! let descriptor: FunctorDescriptor = "mist:label=orders".parse().unwrap();
//! let json = descriptor.to_json().unwrap();
//!
//! let rebuilt = FunctorDescriptor::from_json(&json).unwrap().build().unwrap();
//! assert_eq!(rebuilt.hash64(&data), Mist::new("orders").hash64(&data));
//! ```

// Re-export the core algorithm
pub use water_core as algorithm;

pub mod descriptor;
pub mod entropy;
pub mod error;

// Convenience re-exports
pub use algorithm::{hash, hash64, hash64_range, hash_range, Mist, Water, Yolk, MISTS, YOLKS};
pub use descriptor::{Family, Functor, FunctorDescriptor, SeedSpec};
pub use entropy::{random_mist, random_yolk};
pub use error::{Error, Result};
