//! This module contains the error type for fetching the compilers list and
//! resolving short versions against it.

use thiserror::Error;

use crate::constant::COMPONENT_TAG;

/// Errors that occur while obtaining the list of compiler releases, or while
/// resolving a short version to its published build.
///
/// Unlike decoding, none of these are ever recovered from within the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Failed to obtain list of solc versions. HTTP response is not ok. Status code: {status} \
         Response text: {body}"
    )]
    CatalogUnavailable { status: u16, body: String },

    #[error("Failed to obtain list of solc versions. Reason: {source}")]
    CatalogRequest {
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("Failed to obtain list of solc versions. Reason: {source}")]
    CatalogParse {
        #[source]
        source: std::io::Error,
    },

    #[error("Given solc version {version:?} doesn't exist")]
    VersionNotFound { version: String },

    #[error(
        "Build {build_id:?} for solc version {version:?} is not of the form `soljson-<build>.js`"
    )]
    MalformedBuildId { version: String, build_id: String },
}

impl Error {
    /// Gets the stable tag of the component that produced the error.
    #[must_use]
    pub fn component(&self) -> &'static str {
        COMPONENT_TAG
    }
}

/// The result type for functions that may return resolution errors.
pub type Result<T> = std::result::Result<T, Error>;
