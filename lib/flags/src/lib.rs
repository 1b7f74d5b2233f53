//! # lib.rs
//!
//! Bit-indexed flag set over a single 256-bit unsigned integer.
//!
//! This crate exposes three operations over a flag value: setting a bit,
//! testing a bit and clearing a bit. Every index is reduced with the mask
//! `0xFF` before use, so indices outside `0..=255` (negative ones included)
//! alias onto a bit inside that range. The operations never mutate their
//! input and always return a new value, which makes them safe to call from
//! any number of threads on copies of the same value.
//!
//! The free functions take `(index, value)` over a bare `U256`; the
//! [`FlagValue`] newtype offers the same operations as methods.

use bnum::types::U256;

pub mod flag_value;

pub use flag_value::FlagValue;

pub const INDEX_MASK: i64 = 0xFF;
pub const FLAG_BITS: u32 = 256;

/// Reduces any index into the `0..=255` range used to select a bit.
///
/// # Examples
///
/// ```
/// assert_eq!(flags::effective_index(5), 5);
/// assert_eq!(flags::effective_index(261), 5);
/// assert_eq!(flags::effective_index(-1), 255);
/// ```
#[inline(always)]
pub fn effective_index(index: i64) -> u32 {
    (index & INDEX_MASK) as u32
}

#[inline(always)]
fn mask(index: i64) -> U256 {
    U256::ONE << effective_index(index)
}

pub fn set_index(index: i64, value: U256) -> U256 {
    value | mask(index)
}

pub fn get_index(index: i64, value: U256) -> bool {
    value & mask(index) != U256::ZERO
}

/// Clears the bit selected by `index`.
///
/// An already clear bit returns `value` untouched without applying the xor.
pub fn unset_index(index: i64, value: U256) -> U256 {
    if !get_index(index, value) {
        return value;
    }

    value ^ mask(index)
}
