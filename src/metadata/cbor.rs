//! This module contains the default [`MetadataDecoder`], which understands the
//! CBOR-encoded metadata trailer emitted by solc.
//!
//! # Trailer Layout
//!
//! Since v0.4.7 the compiler appends a CBOR map to the deployed bytecode,
//! followed by two bytes holding the big-endian length of that map:
//!
//! ```text
//! <code> <cbor map> <length of cbor map as u16>
//! ```
//!
//! The map contains the hash of the contract metadata (under `bzzr0`, `bzzr1`
//! or `ipfs`), and since v0.5.9 also the compiler version under `solc`. Release
//! builds store the version as three bytes, `[major, minor, patch]`, while
//! prerelease builds store the full version as a string.

use ciborium::value::Value;
use itertools::Itertools;

use crate::{
    constant::{METADATA_LENGTH_FIELD_BYTES, METADATA_SOLC_KEY, METADATA_SOLC_VERSION_BYTES},
    error::decode,
    metadata::{DecodeOutcome, MetadataDecoder},
};

/// A decoder for the CBOR metadata trailer that solc appends to the deployed
/// bytecode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CborMetadataDecoder;

impl CborMetadataDecoder {
    /// Constructs a new decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetadataDecoder for CborMetadataDecoder {
    fn read_solc_version(&self, bytecode: &[u8]) -> decode::Result<DecodeOutcome> {
        let Some(entries) = metadata_map(bytecode) else {
            return Ok(DecodeOutcome::MetadataAbsent);
        };

        let solc = entries
            .into_iter()
            .find(|(key, _)| key.as_text() == Some(METADATA_SOLC_KEY))
            .map(|(_, value)| value);

        match solc {
            None => Ok(DecodeOutcome::VersionNotFound),
            Some(value) => version_from_value(value).map(DecodeOutcome::Version),
        }
    }
}

/// Locates and decodes the CBOR map at the end of `bytecode`, returning its
/// entries.
///
/// Returns [`None`] if there is no trailer or if it is not a CBOR map.
fn metadata_map(bytecode: &[u8]) -> Option<Vec<(Value, Value)>> {
    let length_start = bytecode.len().checked_sub(METADATA_LENGTH_FIELD_BYTES)?;
    let length_bytes: [u8; METADATA_LENGTH_FIELD_BYTES] =
        bytecode[length_start..].try_into().ok()?;
    let metadata_length = usize::from(u16::from_be_bytes(length_bytes));

    if metadata_length == 0 {
        return None;
    }

    let metadata_start = length_start.checked_sub(metadata_length)?;
    let mut payload = &bytecode[metadata_start..length_start];

    match ciborium::de::from_reader::<Value, _>(&mut payload) {
        Ok(Value::Map(entries)) => Some(entries),
        _ => None,
    }
}

/// Turns the value stored under the `solc` key into a version string.
fn version_from_value(value: Value) -> decode::Result<String> {
    match value {
        Value::Bytes(bytes) if bytes.len() == METADATA_SOLC_VERSION_BYTES => {
            Ok(bytes.iter().join("."))
        }
        Value::Bytes(bytes) => Err(decode::Error::InvalidVersionLength(bytes.len())),
        Value::Text(version) if !version.is_empty() => Ok(version),
        other => Err(decode::Error::MalformedVersionField {
            found: describe(&other),
        }),
    }
}

/// Names the kind of CBOR `value` for use in error messages.
fn describe(value: &Value) -> String {
    let kind = match value {
        Value::Integer(_) => "an integer",
        Value::Float(_) => "a float",
        Value::Text(_) => "an empty string",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
        Value::Tag(..) => "a tagged value",
        Value::Array(_) => "an array",
        Value::Map(_) => "a map",
        _ => "an unknown value",
    };
    kind.to_string()
}
