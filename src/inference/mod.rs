//! This module contains the version inference engine, which turns the outcome
//! of decoding the bytecode metadata into a best-effort range of compiler
//! versions that could have produced the bytecode.
//!
//! # Exactness Tiers
//!
//! Every inference is classified by an [`InferralType`]:
//!
//! - [`InferralType::Exact`] when the metadata names the compiler version.
//! - [`InferralType::MetadataPresentVersionAbsent`] when the metadata exists
//!   but has no version. Only solc v0.4.7 through v0.5.8 emit such metadata.
//! - [`InferralType::MetadataAbsent`] when no metadata exists. Metadata was
//!   introduced in solc v0.4.7, so the bytecode is assumed to predate it.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    constant::{METADATA_ABSENT_RANGE, METADATA_PRESENT_VERSION_ABSENT_RANGE},
    error::{decode, range},
    metadata::{CborMetadataDecoder, DecodeOutcome, MetadataDecoder},
};

/// Infers the range of compiler versions that could have produced `bytecode`
/// using the default [`CborMetadataDecoder`].
///
/// # Errors
///
/// Returns [`Err`] if the decoder fails in an unexpected way.
pub fn infer_solc_version(bytecode: &[u8]) -> decode::Result<SolcVersionRange> {
    Inferrer::new(CborMetadataDecoder).infer(bytecode)
}

/// How precisely the compiler version could be determined from the bytecode.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InferralType {
    /// The exact compiler version was recovered from the metadata.
    Exact,

    /// The metadata was decoded but contained no compiler version.
    MetadataPresentVersionAbsent,

    /// No metadata could be decoded from the bytecode.
    MetadataAbsent,
}

impl Display for InferralType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Exact => "EXACT",
            Self::MetadataPresentVersionAbsent => "METADATA_PRESENT_VERSION_ABSENT",
            Self::MetadataAbsent => "METADATA_ABSENT",
        };
        write!(f, "{name}")
    }
}

/// A range of compiler versions, along with how exactly it was inferred.
///
/// # Invariants
///
/// The `range` is never empty. When the `inferral_type` is
/// [`InferralType::Exact`] it is a single version such as `0.8.4`, and
/// otherwise it is one of the textual ranges `0.4.7 - 0.5.8` and `<0.4.7`.
///
/// These invariants are checked on construction, including when deserializing.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSolcVersionRange")]
pub struct SolcVersionRange {
    inferral_type: InferralType,
    range:         String,
}

impl SolcVersionRange {
    /// Constructs a range holding the single `version`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `version` is empty.
    pub fn exact(version: impl Into<String>) -> range::Result<Self> {
        let version = version.into();
        if version.is_empty() {
            return Err(range::Error::EmptyVersion);
        }

        Ok(Self {
            inferral_type: InferralType::Exact,
            range:         version,
        })
    }

    /// Constructs the range of compilers that emit metadata without a version.
    #[must_use]
    pub fn metadata_present_version_absent() -> Self {
        Self {
            inferral_type: InferralType::MetadataPresentVersionAbsent,
            range:         METADATA_PRESENT_VERSION_ABSENT_RANGE.to_string(),
        }
    }

    /// Constructs the range of compilers that emit no metadata.
    #[must_use]
    pub fn metadata_absent() -> Self {
        Self {
            inferral_type: InferralType::MetadataAbsent,
            range:         METADATA_ABSENT_RANGE.to_string(),
        }
    }

    /// Gets how exactly the range was inferred.
    #[must_use]
    pub fn inferral_type(&self) -> InferralType {
        self.inferral_type
    }

    /// Gets the textual version range.
    #[must_use]
    pub fn range(&self) -> &str {
        &self.range
    }

    /// Checks if the range names a single, exact, version.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.inferral_type == InferralType::Exact
    }
}

/// The unchecked form of a [`SolcVersionRange`] as it appears in JSON.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSolcVersionRange {
    inferral_type: InferralType,
    range:         String,
}

impl TryFrom<RawSolcVersionRange> for SolcVersionRange {
    type Error = range::Error;

    fn try_from(value: RawSolcVersionRange) -> Result<Self, Self::Error> {
        let expected = match value.inferral_type {
            InferralType::Exact => return Self::exact(value.range),
            InferralType::MetadataPresentVersionAbsent => Self::metadata_present_version_absent(),
            InferralType::MetadataAbsent => Self::metadata_absent(),
        };

        if expected.range == value.range {
            Ok(expected)
        } else {
            Err(range::Error::MismatchedRange {
                inferral_type: value.inferral_type,
                range:         value.range,
            })
        }
    }
}

impl Display for SolcVersionRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.range, self.inferral_type)
    }
}

/// The inference engine, wrapping the [`MetadataDecoder`] that it uses to read
/// the bytecode.
///
/// It holds no state beyond the decoder, and hence inferring from the same
/// bytecode always produces the same result.
#[derive(Clone, Debug, Default)]
pub struct Inferrer<D = CborMetadataDecoder> {
    decoder: D,
}

impl<D: MetadataDecoder> Inferrer<D> {
    /// Constructs a new inference engine using the provided `decoder`.
    #[must_use]
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Gets a reference to the decoder used by the engine.
    #[must_use]
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Infers the range of compiler versions that could have produced
    /// `bytecode`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] with the decoder's error, unchanged, if the decoder
    /// fails with anything other than a recognised [`DecodeOutcome`]. A
    /// decoder that reports an empty version is also an error.
    pub fn infer(&self, bytecode: &[u8]) -> decode::Result<SolcVersionRange> {
        let range = match self.decoder.read_solc_version(bytecode)? {
            DecodeOutcome::Version(version) => {
                SolcVersionRange::exact(version).map_err(|_| decode::Error::EmptyVersion)?
            }
            DecodeOutcome::VersionNotFound => SolcVersionRange::metadata_present_version_absent(),
            DecodeOutcome::MetadataAbsent => SolcVersionRange::metadata_absent(),
        };

        tracing::debug!(
            inferral_type = %range.inferral_type(),
            range = range.range(),
            "Inferred solc version"
        );

        Ok(range)
    }
}
