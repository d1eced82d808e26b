//! This module contains the error type that pertains to reading user-supplied
//! bytecode.

use hex::FromHexError;
use thiserror::Error;

use crate::constant::COMPONENT_TAG;

/// Errors that occur when turning a textual representation of bytecode into
/// the raw bytes.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("The provided hexadecimal input had an odd length")]
    InvalidHexLength,

    #[error("Encountered invalid hex char {_0:?} at index {_1:?}")]
    InvalidHexCharacter(char, usize),
}

impl Error {
    /// Gets the stable tag of the component that produced the error.
    #[must_use]
    pub fn component(&self) -> &'static str {
        COMPONENT_TAG
    }
}

/// The result type for functions that may return bytecode errors.
pub type Result<T> = std::result::Result<T, Error>;

impl From<FromHexError> for Error {
    fn from(value: FromHexError) -> Self {
        match value {
            FromHexError::InvalidHexCharacter { c, index } => Self::InvalidHexCharacter(c, index),
            FromHexError::OddLength | FromHexError::InvalidStringLength => Self::InvalidHexLength,
        }
    }
}
