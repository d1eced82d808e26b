//! This library works out which version of the Solidity compiler produced a
//! given piece of deployed [EVM](https://ethereum.org/en/developers/docs/evm/)
//! bytecode, and resolves short compiler versions to the exact compiler builds
//! published by the Solidity team. Both are needed by tooling that verifies
//! on-chain contracts against their source code.
//!
//! # How it Works
//!
//! Inference of the compiler version proceeds as follows:
//!
//! 1. The [`metadata::MetadataDecoder`] reads the CBOR metadata that solc
//!    appends to the bytecode, reporting a [`metadata::DecodeOutcome`].
//! 2. The [`inference::Inferrer`] turns that outcome into an
//!    [`inference::SolcVersionRange`]. This is the exact version where the
//!    metadata names it, and otherwise the historical range of compilers that
//!    could have produced metadata of that shape.
//!
//! Resolution of short versions asks a [`release::CatalogSource`] for the
//! [`release::CompilersList`], and looks up the build published for the
//! version in it.
//!
//! # Basic Usage
//!
//! For the most basic usage of the library, it is sufficient to call
//! [`infer_solc_version`] with your bytecode.
//!
//! ```
//! use solc_version_inference::{infer_solc_version, inference::InferralType, Bytecode};
//!
//! // Some code followed by the metadata `{"solc": [0, 8, 9]}` and its length.
//! let bytecode = Bytecode::from_hex("0x6080604052fea164736f6c6343000809000a").unwrap();
//!
//! let range = infer_solc_version(&bytecode).unwrap();
//!
//! assert_eq!(range.inferral_type(), InferralType::Exact);
//! assert_eq!(range.range(), "0.8.9");
//! ```
//!
//! Resolving a short version fetches the list of releases over the network.
//!
//! ```no_run
//! let build = solc_version_inference::get_long_version("0.8.4").unwrap();
//! assert_eq!(build, "v0.8.4+commit.c7e474f2");
//! ```

#![warn(clippy::all, clippy::cargo, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Allows for better API naming

pub mod bytecode;
pub mod constant;
pub mod error;
pub mod inference;
pub mod metadata;
pub mod release;

// Re-exports to provide the library interface.
pub use bytecode::Bytecode;
pub use inference::{infer_solc_version, InferralType, SolcVersionRange};
pub use release::{get_long_version, get_versions, CompilersList};
