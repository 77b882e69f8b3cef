//! Persistable functor descriptors
//!
//! Salts are never stored. A descriptor records the family and where the
//! seed came from, and rebuilding it yields a functor that hashes exactly
//! like the one it was taken from.
//!
//! Two interchangeable encodings:
//!
//! ```text
//! JSON:  {"family":"mist","seed":{"label":"alpha"}}
//!        {"family":"yolk","seed":{"value":"00000000deadbeef"}}
//!        {"family":"mist","seed":{"predefined":3}}
//! text:  mist:label=alpha
//!        yolk:seed=00000000deadbeef
//!        mist:#3
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::{Element, Flavor, Hashable, Mist, Ranged, Yolk, PREDEFINED_COUNT};
use crate::error::{Error, Result};

/// Functor family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Yolk,
    Mist,
}

impl Family {
    fn as_str(self) -> &'static str {
        match self {
            Family::Yolk => "yolk",
            Family::Mist => "mist",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yolk" => Ok(Family::Yolk),
            "mist" => Ok(Family::Mist),
            other => Err(Error::InvalidDescriptor(format!(
                "unknown family `{other}` (expected yolk or mist)"
            ))),
        }
    }
}

/// Where a functor's seed comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSpec {
    /// Seeded with the unsalted 64-bit hash of a label
    Label(String),
    /// Raw 64-bit seed, stored as 16 big-endian hex digits
    Value(#[serde(with = "hex_seed")] u64),
    /// Index into the predefined table
    Predefined(usize),
}

/// Serializable recipe for a salted functor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctorDescriptor {
    pub family: Family,
    pub seed: SeedSpec,
}

impl FunctorDescriptor {
    pub fn label(family: Family, label: impl Into<String>) -> Self {
        Self {
            family,
            seed: SeedSpec::Label(label.into()),
        }
    }

    pub fn value(family: Family, seed: u64) -> Self {
        Self {
            family,
            seed: SeedSpec::Value(seed),
        }
    }

    pub fn predefined(family: Family, index: usize) -> Self {
        Self {
            family,
            seed: SeedSpec::Predefined(index),
        }
    }

    /// Rebuild the functor this descriptor names
    pub fn build(&self) -> Result<Functor> {
        let functor = match (&self.seed, self.family) {
            (SeedSpec::Predefined(index), Family::Yolk) => {
                Functor::Yolk(Yolk::predefined(*index).ok_or(Error::UnknownPredefined(*index))?)
            }
            (SeedSpec::Predefined(index), Family::Mist) => {
                Functor::Mist(Mist::predefined(*index).ok_or(Error::UnknownPredefined(*index))?)
            }
            (SeedSpec::Label(label), Family::Yolk) => Functor::Yolk(Yolk::new(label.as_str())),
            (SeedSpec::Label(label), Family::Mist) => Functor::Mist(Mist::new(label.as_str())),
            (SeedSpec::Value(seed), Family::Yolk) => Functor::Yolk(Yolk::from_seed(*seed)),
            (SeedSpec::Value(seed), Family::Mist) => Functor::Mist(Mist::from_seed(*seed)),
        };

        tracing::debug!(descriptor = %self, seed = functor.seed(), "built functor");
        Ok(functor)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for FunctorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.seed {
            SeedSpec::Label(label) => write!(f, "{}:label={}", self.family, label),
            SeedSpec::Value(seed) => write!(f, "{}:seed={:016x}", self.family, seed),
            SeedSpec::Predefined(index) => write!(f, "{}:#{}", self.family, index),
        }
    }
}

impl FromStr for FunctorDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (family, rest) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidDescriptor(format!("missing `:` in `{s}`")))?;
        let family: Family = family.parse()?;

        if let Some(index) = rest.strip_prefix('#') {
            let index = index.parse::<usize>().map_err(|e| {
                Error::InvalidDescriptor(format!("bad predefined index `{index}`: {e}"))
            })?;
            if index >= PREDEFINED_COUNT {
                return Err(Error::UnknownPredefined(index));
            }
            return Ok(Self::predefined(family, index));
        }

        match rest.split_once('=') {
            Some(("label", label)) => Ok(Self::label(family, label)),
            Some(("seed", hex)) => Ok(Self::value(family, hex_seed::decode(hex)?)),
            _ => Err(Error::InvalidDescriptor(format!(
                "expected `label=..`, `seed=..` or `#index` after family, got `{rest}`"
            ))),
        }
    }
}

/// A functor rebuilt from a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Functor {
    Yolk(Yolk),
    Mist(Mist),
}

impl Functor {
    pub fn seed(&self) -> u64 {
        match self {
            Functor::Yolk(yolk) => yolk.seed(),
            Functor::Mist(mist) => mist.seed(),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Functor::Yolk(_) => Family::Yolk,
            Functor::Mist(_) => Family::Mist,
        }
    }

    /// Descriptor that rebuilds this functor from its raw seed
    pub fn descriptor(&self) -> FunctorDescriptor {
        FunctorDescriptor::value(self.family(), self.seed())
    }

    pub fn hash<H: Hashable + ?Sized>(&self, data: &H) -> i32 {
        match self {
            Functor::Yolk(yolk) => yolk.hash(data),
            Functor::Mist(mist) => mist.hash(data),
        }
    }

    pub fn hash64<H: Hashable + ?Sized>(&self, data: &H) -> i64 {
        match self {
            Functor::Yolk(yolk) => yolk.hash64(data),
            Functor::Mist(mist) => mist.hash64(data),
        }
    }

    pub fn hash_range<R: Ranged + ?Sized>(&self, data: &R, start: usize, end: usize) -> i32 {
        match self {
            Functor::Yolk(yolk) => yolk.hash_range(data, start, end),
            Functor::Mist(mist) => mist.hash_range(data, start, end),
        }
    }

    pub fn hash64_range<R: Ranged + ?Sized>(&self, data: &R, start: usize, end: usize) -> i64 {
        match self {
            Functor::Yolk(yolk) => yolk.hash64_range(data, start, end),
            Functor::Mist(mist) => mist.hash64_range(data, start, end),
        }
    }

    pub fn hash_strided<R: Ranged + ?Sized>(
        &self,
        data: &R,
        start: usize,
        end: usize,
        step: usize,
    ) -> i32 {
        match self {
            Functor::Yolk(yolk) => yolk.hash_strided(data, start, end, step),
            Functor::Mist(mist) => mist.hash_strided(data, start, end, step),
        }
    }

    pub fn hash64_strided<R: Ranged + ?Sized>(
        &self,
        data: &R,
        start: usize,
        end: usize,
        step: usize,
    ) -> i64 {
        match self {
            Functor::Yolk(yolk) => yolk.hash64_strided(data, start, end, step),
            Functor::Mist(mist) => mist.hash64_strided(data, start, end, step),
        }
    }

    pub fn hash_iter<I>(&self, items: I) -> i32
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Element,
    {
        match self {
            Functor::Yolk(yolk) => yolk.hash_iter(items),
            Functor::Mist(mist) => mist.hash_iter(items),
        }
    }

    pub fn hash64_iter<I>(&self, items: I) -> i64
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Element,
    {
        match self {
            Functor::Yolk(yolk) => yolk.hash64_iter(items),
            Functor::Mist(mist) => mist.hash64_iter(items),
        }
    }
}

impl From<Yolk> for Functor {
    fn from(yolk: Yolk) -> Self {
        Functor::Yolk(yolk)
    }
}

impl From<Mist> for Functor {
    fn from(mist: Mist) -> Self {
        Functor::Mist(mist)
    }
}

/// Raw seeds as 16 big-endian hex digits
mod hex_seed {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::error::{Error, Result};

    pub fn encode(seed: u64) -> String {
        hex::encode(seed.to_be_bytes())
    }

    pub fn decode(s: &str) -> Result<u64> {
        let bytes: [u8; 8] = hex::decode(s)?.try_into().map_err(|bytes: Vec<u8>| {
            Error::InvalidDescriptor(format!("seed must be 8 bytes, got {}", bytes.len()))
        })?;
        Ok(u64::from_be_bytes(bytes))
    }

    pub fn serialize<S>(seed: &u64, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode(*seed))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode(&s).map_err(serde::de::Error::custom)
    }
}
