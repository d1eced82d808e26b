//! This module contains the representation of the deployed contract bytecode
//! that is handed to the library.

use std::ops::Deref;

use crate::error::bytecode;

/// The deployed bytecode of a contract, including any metadata that the
/// compiler appended to it.
///
/// It is intended to be immutable, and the library only ever reads from it.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Bytecode {
    bytes: Vec<u8>,
}

impl Bytecode {
    /// Creates new bytecode from the provided `bytes`.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Creates bytecode from the hex-encoded string `code`.
    ///
    /// The string may or may not start with the `0x` prefix, and surrounding
    /// whitespace is ignored. Both cases will be handled.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `code` is not valid hexadecimal.
    pub fn from_hex(code: &str) -> bytecode::Result<Self> {
        let code = code.trim();
        let no_0x_prefix = code.strip_prefix("0x").unwrap_or(code);
        let bytes = hex::decode(no_0x_prefix)?;

        Ok(Self { bytes })
    }

    /// Gets the bytecode as a slice of bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }
}

impl Deref for Bytecode {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Bytecode {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for Bytecode {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for Bytecode {
    fn from(value: &[u8]) -> Self {
        Self::new(value.to_vec())
    }
}

/// Bytecode can be created from a string as long as that string is a
/// hexadecimal encoding of the equivalent bytes.
impl TryFrom<&str> for Bytecode {
    type Error = bytecode::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl From<Bytecode> for Vec<u8> {
    fn from(value: Bytecode) -> Self {
        value.bytes
    }
}

#[cfg(test)]
mod test {
    use crate::{bytecode::Bytecode, error::bytecode};

    #[test]
    fn can_parse_hex_with_and_without_prefix() {
        let with = Bytecode::from_hex("0x6080fe").expect("Parsing errored");
        let without = Bytecode::from_hex("6080fe").expect("Parsing errored");

        assert_eq!(with, without);
        assert_eq!(with.as_bytes(), &[0x60, 0x80, 0xfe]);
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        let code = Bytecode::from_hex("  0x00ff\n").expect("Parsing errored");
        assert_eq!(code.as_bytes(), &[0x00, 0xff]);
    }

    #[test]
    fn accepts_empty_input() {
        let code = Bytecode::try_from("0x").expect("Parsing errored");
        assert!(code.is_empty());
    }

    #[test]
    fn emits_error_on_incorrectly_encoded_hex_string() {
        let result = Bytecode::from_hex("ab70anx7302842").expect_err("Parsing did not error");
        assert_eq!(result, bytecode::Error::InvalidHexCharacter('n', 5));
    }

    #[test]
    fn emits_error_on_odd_length() {
        let result = Bytecode::from_hex("0xabc").expect_err("Parsing did not error");
        assert_eq!(result, bytecode::Error::InvalidHexLength);
    }
}
