//! Water Algorithm Parameters
//!
//! These constants are wired into every hash the engine produces.
//! Changing any of them changes every output, so treat an edit here as
//! a format break rather than a fix.

/// Finalizer tag, xored with the element count before the last multiply
pub const B0: u64 = 0xA076_1D64_78BD_642F;

/// First mix constant (also the r=0/r=3 tail operand)
pub const B1: u64 = 0xE703_7ED1_A0B4_28DB;

/// Second mix constant
pub const B2: u64 = 0x8EBC_6AF0_9C88_C6E3;

/// Third mix constant
pub const B3: u64 = 0x5899_65CC_7537_4CC3;

/// Fourth mix constant
pub const B4: u64 = 0x1D8E_4E27_C47D_124F;

/// Fifth mix constant, used only by the lane algorithm and salt derivation
pub const B5: u64 = 0xEB44_ACCA_B455_D165;

/// Initial seed of the unsalted 64-bit path (fractional part of sqrt(5))
pub const SEED_64: u64 = 0x3C6E_F372_FE94_F82B;

/// Initial seed of the unsalted 32-bit path (fractional part of sqrt(3))
///
/// Deliberately unrelated to [`SEED_64`]: the 32-bit result is not a
/// truncation of the 64-bit one, so both can be used as two independent
/// hash functions over the same key.
pub const SEED_32: u64 = 0xBB67_AE85_84CA_A73B;

/// Canonical bit pattern for `true`
pub const TRUE_BITS: u64 = 0xFF51_AFD7_ED55_8CCD;

/// Canonical bit pattern for `false`
pub const FALSE_BITS: u64 = 0xC4CE_B9FE_1A85_EC53;

/// Hash reported for an absent (`None`) top-level input
pub const ABSENT: u64 = 0;

/// Element hash contributed by an absent element inside a composite (-1)
pub const NULL_ELEMENT: u64 = u64::MAX;

/// Number of elements consumed per bulk step
pub const GROUP: usize = 4;

/// Number of entries in each predefined functor table
pub const PREDEFINED_COUNT: usize = 24;

/// Labels the predefined functor tables are seeded from, in table order
pub const PREDEFINED_LABELS: [&str; PREDEFINED_COUNT] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega",
];
