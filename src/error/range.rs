//! This module contains the error type for constructing version ranges that
//! would break their invariants.

use thiserror::Error;

use crate::{constant::COMPONENT_TAG, inference::InferralType};

/// Errors that occur when a [`crate::inference::SolcVersionRange`] is built
/// from parts that do not belong together.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("An exact solc version cannot be empty")]
    EmptyVersion,

    #[error("The range {range:?} cannot be inferred as {inferral_type}")]
    MismatchedRange {
        inferral_type: InferralType,
        range:         String,
    },
}

impl Error {
    /// Gets the stable tag of the component that produced the error.
    #[must_use]
    pub fn component(&self) -> &'static str {
        COMPONENT_TAG
    }
}

/// The result type for functions that may return range errors.
pub type Result<T> = std::result::Result<T, Error>;
