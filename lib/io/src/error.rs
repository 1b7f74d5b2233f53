//! Errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed input {0:?}, expected hex (0x..) or decimal digits")]
    Malformed(String),

    #[error("value {0:?} does not fit in 256 bits")]
    Overflow(String),
}

pub type Result<T> = ::std::result::Result<T, ParseError>;

impl ParseError {
    pub fn malformed<S: ToString>(arg: S) -> Self {
        Self::Malformed(arg.to_string())
    }

    pub fn overflow<S: ToString>(arg: S) -> Self {
        Self::Overflow(arg.to_string())
    }
}
