//! This module contains the primary error type for the library's interface.
//! It also re-exports the more specific error types that are
//! subsystem-specific.
//!
//! All of the errors implement [`std::error::Error`], and hence can be used
//! with [`anyhow::Error`].

pub mod bytecode;
pub mod decode;
pub mod range;
pub mod resolution;

use thiserror::Error;

use crate::constant::COMPONENT_TAG;

/// The interface result type for the library.
///
/// # Usage
///
/// Any function that combines more than one subsystem of the library should
/// return this result type. Subsystems should return the more-specific child
/// error types as appropriate.
pub type Result<T> = std::result::Result<T, Error>;

/// The interface error type for the library.
///
/// All errors returned from the library interface (and hence encountered by the
/// clients of the library) should be members of this enum.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors that come from reading bytecode supplied by the user.
    #[error(transparent)]
    Bytecode(#[from] bytecode::Error),

    /// Unexpected failures of the metadata decoder.
    #[error(transparent)]
    Decode(#[from] decode::Error),

    /// Errors from building version ranges that break their invariants.
    #[error(transparent)]
    Range(#[from] range::Error),

    /// Errors from fetching the compilers list or resolving versions against
    /// it.
    #[error(transparent)]
    Resolution(#[from] resolution::Error),
}

impl Error {
    /// Gets the stable tag of the component that produced the error.
    ///
    /// This is the same for every error produced by the library, and lets host
    /// tooling attribute failures without inspecting the message.
    #[must_use]
    pub fn component(&self) -> &'static str {
        COMPONENT_TAG
    }
}

#[cfg(test)]
mod test {
    use std::error::Error as _;

    use crate::error::{bytecode, decode, range, resolution, Error};

    #[test]
    fn carries_the_component_tag() {
        let error = Error::from(resolution::Error::VersionNotFound {
            version: "9.9.9".into(),
        });
        assert_eq!(error.component(), "solc-version-inference");
    }

    #[test]
    fn subsystem_errors_carry_the_component_tag() {
        let tag = "solc-version-inference";

        assert_eq!(bytecode::Error::InvalidHexLength.component(), tag);
        assert_eq!(decode::Error::EmptyVersion.component(), tag);
        assert_eq!(range::Error::EmptyVersion.component(), tag);
        assert_eq!(
            resolution::Error::CatalogUnavailable {
                status: 500,
                body:   String::new(),
            }
            .component(),
            tag
        );
    }

    #[test]
    fn displays_the_wrapped_error_transparently() {
        let inner = decode::Error::InvalidVersionLength(5);
        let message = inner.to_string();
        let error = Error::from(inner);

        assert_eq!(error.to_string(), message);
        assert!(error.source().is_none());
    }
}
