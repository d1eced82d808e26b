//! This module contains the interface to the metadata decoder, which is
//! responsible for reading the compiler version out of the metadata trailer
//! that solc appends to deployed bytecode.
//!
//! # Decoding Outcomes
//!
//! Reading the version has three _recognised_ outcomes, which are modelled by
//! the [`DecodeOutcome`] enum rather than as errors:
//!
//! - The metadata was present and contained a version.
//! - The metadata was present, but had no version field.
//! - No metadata could be located or decoded at all.
//!
//! Anything else that goes wrong is a [`crate::error::decode::Error`], and is
//! never mistaken for one of the above.

pub mod cbor;

use std::{fmt::Debug, rc::Rc, sync::Arc};

pub use cbor::CborMetadataDecoder;

use crate::error::decode;

/// The recognised results of reading the compiler version from bytecode.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DecodeOutcome {
    /// The metadata contained the given compiler version string.
    Version(String),

    /// The metadata was decoded successfully but contains no compiler version.
    VersionNotFound,

    /// No metadata could be found in the bytecode.
    MetadataAbsent,
}

/// The interface to an object that is able to extract the compiler version
/// from the metadata embedded in bytecode.
///
/// Implementations must be deterministic: decoding the same bytecode twice has
/// to produce the same result.
pub trait MetadataDecoder
where
    Self: Debug,
{
    /// Reads the compiler version from the metadata in `bytecode`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if decoding fails in a way that is not one of the
    /// recognised [`DecodeOutcome`]s.
    fn read_solc_version(&self, bytecode: &[u8]) -> decode::Result<DecodeOutcome>;
}

impl<D> MetadataDecoder for &D
where
    D: MetadataDecoder + ?Sized,
{
    fn read_solc_version(&self, bytecode: &[u8]) -> decode::Result<DecodeOutcome> {
        (**self).read_solc_version(bytecode)
    }
}

impl<D> MetadataDecoder for Box<D>
where
    D: MetadataDecoder + ?Sized,
{
    fn read_solc_version(&self, bytecode: &[u8]) -> decode::Result<DecodeOutcome> {
        (**self).read_solc_version(bytecode)
    }
}

impl<D> MetadataDecoder for Rc<D>
where
    D: MetadataDecoder + ?Sized,
{
    fn read_solc_version(&self, bytecode: &[u8]) -> decode::Result<DecodeOutcome> {
        (**self).read_solc_version(bytecode)
    }
}

impl<D> MetadataDecoder for Arc<D>
where
    D: MetadataDecoder + ?Sized,
{
    fn read_solc_version(&self, bytecode: &[u8]) -> decode::Result<DecodeOutcome> {
        (**self).read_solc_version(bytecode)
    }
}
