//! This module contains constants that are needed throughout the codebase.

/// The stable tag attached to every error that the library surfaces, allowing
/// host tooling to attribute failures to this component.
pub const COMPONENT_TAG: &str = "solc-version-inference";

/// The number of bytes at the very end of the bytecode that encode the length
/// of the CBOR metadata payload preceding them.
///
/// The length is stored as a big-endian `u16`.
pub const METADATA_LENGTH_FIELD_BYTES: usize = 2;

/// The key under which the compiler version is stored in the CBOR metadata.
pub const METADATA_SOLC_KEY: &str = "solc";

/// The number of bytes used by release builds of the compiler to encode their
/// version as `[major, minor, patch]` in the metadata.
pub const METADATA_SOLC_VERSION_BYTES: usize = 3;

/// The range of compiler versions that emit metadata without a version field.
///
/// Solc v0.4.7 was the first release to append metadata to the bytecode, and
/// v0.5.9 was the first to include its own version in that metadata. This is a
/// historical fact about compiler releases and must not be computed.
pub const METADATA_PRESENT_VERSION_ABSENT_RANGE: &str = "0.4.7 - 0.5.8";

/// The range of compiler versions that emit no metadata at all, being those
/// that predate v0.4.7.
pub const METADATA_ABSENT_RANGE: &str = "<0.4.7";

/// The location of the official list of compiler releases published by the
/// Solidity team.
pub const COMPILERS_LIST_URL: &str =
    "https://raw.githubusercontent.com/ethereum/solc-bin/gh-pages/bin/list.json";

/// The literal prefix wrapping every build identifier in the compilers list.
pub const BUILD_ID_PREFIX: &str = "soljson-";

/// The literal suffix wrapping every build identifier in the compilers list.
pub const BUILD_ID_SUFFIX: &str = ".js";

/// The default time in seconds that a request for the compilers list may take
/// overall.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// The default time in seconds allowed to establish a connection when
/// requesting the compilers list.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// The environment variable that overrides the compilers list location.
pub const LIST_URL_ENV_VAR: &str = "SOLC_VERSION_LIST_URL";

/// The environment variable that overrides the request timeout in seconds.
pub const REQUEST_TIMEOUT_ENV_VAR: &str = "SOLC_VERSION_TIMEOUT_SECS";

/// The environment variable that overrides the connect timeout in seconds.
pub const CONNECT_TIMEOUT_ENV_VAR: &str = "SOLC_VERSION_CONNECT_TIMEOUT_SECS";
