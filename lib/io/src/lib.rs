//! # lib.rs
//!
//! Text rendering and parsing of flag values for callers of the `flags`
//! crate. The flag set itself has no textual form; this crate picks one:
//! `0x` prefixed lowercase hex with an even number of digits on the way out,
//! hex or decimal on the way in.

pub mod error;
pub mod value_io;

pub use error::{ParseError, Result};
pub use value_io::{format_flag, format_value, parse_index, parse_value};
