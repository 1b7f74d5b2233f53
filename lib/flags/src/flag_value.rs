//! # flag_value.rs
//!
//! Defines the `FlagValue` newtype and its bit operations.
//!
//! A `FlagValue` packs up to 256 boolean flags into a single `U256`. It is
//! `Copy`, and every write consumes the old value and hands back a new one,
//! so chaining calls is the only way a flag set changes over time. Reads
//! borrow and leave the value as it was.

use bnum::types::U256;
use std::fmt;

use crate::{get_index, set_index, unset_index, FLAG_BITS};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagValue(U256);

impl FlagValue {
    pub const fn new(value: U256) -> FlagValue {
        FlagValue(value)
    }

    pub const fn zero() -> FlagValue {
        FlagValue(U256::ZERO)
    }

    pub const fn value(&self) -> U256 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == U256::ZERO
    }

    /// Width of the backing integer, and so the number of distinct flags.
    pub const fn capacity() -> u32 {
        FLAG_BITS
    }

    #[must_use]
    pub fn set_index(self, index: i64) -> FlagValue {
        FlagValue(set_index(index, self.0))
    }

    pub fn get_index(&self, index: i64) -> bool {
        get_index(index, self.0)
    }

    #[must_use]
    pub fn unset_index(self, index: i64) -> FlagValue {
        FlagValue(unset_index(index, self.0))
    }
}

impl From<U256> for FlagValue {
    fn from(value: U256) -> Self {
        FlagValue(value)
    }
}

impl From<u64> for FlagValue {
    fn from(value: u64) -> Self {
        FlagValue(U256::from(value))
    }
}

impl From<FlagValue> for U256 {
    fn from(value: FlagValue) -> Self {
        value.0
    }
}

impl fmt::LowerHex for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
