//! This module contains the error type for failures of the metadata decoder.
//!
//! Note that the _expected_ outcomes of decoding, where the metadata lacks a
//! version or is missing entirely, are not errors. They are reported as
//! [`crate::metadata::DecodeOutcome`]s instead, and only failures that fall
//! outside of those outcomes end up here.

use thiserror::Error;

use crate::constant::COMPONENT_TAG;

/// Unexpected failures encountered while reading the compiler version out of
/// the bytecode metadata.
///
/// These are never turned into an inference result, and are instead
/// propagated to the caller exactly as produced.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("The `solc` metadata field holds {found} rather than a version")]
    MalformedVersionField { found: String },

    #[error("The `solc` metadata field holds {_0:?} bytes but release versions use 3")]
    InvalidVersionLength(usize),

    #[error("The metadata decoder reported an empty solc version")]
    EmptyVersion,

    /// An unknown error, represented as a string.
    #[error("Unknown Error: {_0:?}")]
    Other(String),
}

impl Error {
    /// Constructs an unknown error with the provided `message`.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Gets the stable tag of the component that produced the error.
    #[must_use]
    pub fn component(&self) -> &'static str {
        COMPONENT_TAG
    }
}

/// The result type for functions that may return decoding errors.
pub type Result<T> = std::result::Result<T, Error>;
