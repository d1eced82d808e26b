//! This module contains the functionality for resolving short compiler
//! versions, such as `0.8.4`, to the exact builds published by the Solidity
//! team, such as `v0.8.4+commit.c7e474f2`.
//!
//! # Catalog Sources
//!
//! The list of releases is obtained from a [`CatalogSource`]. The library
//! provides two of these:
//!
//! - [`HttpCatalogFetcher`], which fetches the list afresh on every call.
//! - [`CompilersList`] itself, allowing resolution against a list that has
//!   previously been obtained.
//!
//! No caching is performed by the library. Clients that want to avoid repeated
//! fetches should hold on to a [`CompilersList`] or provide their own source.

pub mod fetcher;
pub mod resolver;

use std::{collections::BTreeMap, env, fmt::Debug, str::FromStr, time::Duration};

pub use fetcher::HttpCatalogFetcher;
pub use resolver::{long_version_in, normalize_build_id, Resolver};
use serde::{Deserialize, Serialize};

use crate::{
    constant::{
        COMPILERS_LIST_URL,
        CONNECT_TIMEOUT_ENV_VAR,
        DEFAULT_CONNECT_TIMEOUT_SECS,
        DEFAULT_REQUEST_TIMEOUT_SECS,
        LIST_URL_ENV_VAR,
        REQUEST_TIMEOUT_ENV_VAR,
    },
    error::resolution,
};

/// Fetches the official list of compiler releases using the default
/// configuration.
///
/// # Errors
///
/// Returns [`Err`] if the list cannot be retrieved or parsed.
pub fn get_versions() -> resolution::Result<CompilersList> {
    HttpCatalogFetcher::new(Config::default()).get_versions()
}

/// Resolves `short_version` to the exact published build, fetching the list of
/// releases using the default configuration.
///
/// # Errors
///
/// Returns [`Err`] if the list cannot be retrieved or if it has no build for
/// `short_version`.
pub fn get_long_version(short_version: &str) -> resolution::Result<String> {
    Resolver::new(HttpCatalogFetcher::new(Config::default())).get_long_version(short_version)
}

/// The list of compiler releases published by the Solidity team.
///
/// This is a non-exhaustive view of the published document, and any fields
/// other than the ones below are ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilersList {
    /// A mapping from short versions to the build identifier of the
    /// corresponding release.
    releases: BTreeMap<String, String>,

    /// The short version of the most recent release.
    latest_release: String,
}

impl CompilersList {
    /// Constructs a new compilers list from the provided `releases` and the
    /// `latest_release`.
    #[must_use]
    pub fn new(releases: BTreeMap<String, String>, latest_release: impl Into<String>) -> Self {
        let latest_release = latest_release.into();
        Self {
            releases,
            latest_release,
        }
    }

    /// Gets the mapping from short versions to build identifiers.
    #[must_use]
    pub fn releases(&self) -> &BTreeMap<String, String> {
        &self.releases
    }

    /// Gets the short version of the most recent release.
    #[must_use]
    pub fn latest_release(&self) -> &str {
        &self.latest_release
    }

    /// Gets the build identifier published for `short_version`, if any.
    #[must_use]
    pub fn build_id(&self, short_version: &str) -> Option<&str> {
        self.releases.get(short_version).map(String::as_str)
    }
}

/// The interface to an object that is able to provide the list of compiler
/// releases.
pub trait CatalogSource
where
    Self: Debug,
{
    /// Gets the list of compiler releases.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the list cannot be obtained.
    fn get_versions(&self) -> resolution::Result<CompilersList>;
}

/// A list that has already been obtained can act as its own source.
impl CatalogSource for CompilersList {
    fn get_versions(&self) -> resolution::Result<CompilersList> {
        Ok(self.clone())
    }
}

impl<S> CatalogSource for &S
where
    S: CatalogSource + ?Sized,
{
    fn get_versions(&self) -> resolution::Result<CompilersList> {
        (**self).get_versions()
    }
}

impl<S> CatalogSource for Box<S>
where
    S: CatalogSource + ?Sized,
{
    fn get_versions(&self) -> resolution::Result<CompilersList> {
        (**self).get_versions()
    }
}

/// The configuration for fetching the list of compiler releases.
///
/// Timeouts are enforced by the HTTP transport rather than by the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The location of the JSON list of compiler releases.
    ///
    /// Defaults to [`COMPILERS_LIST_URL`].
    pub list_url: String,

    /// The maximum time that a request for the list may take overall.
    ///
    /// Defaults to [`DEFAULT_REQUEST_TIMEOUT_SECS`].
    pub timeout: Duration,

    /// The maximum time allowed to establish a connection for the request.
    ///
    /// Defaults to [`DEFAULT_CONNECT_TIMEOUT_SECS`].
    pub connect_timeout: Duration,
}

impl Config {
    /// Constructs the configuration from the environment, falling back to the
    /// defaults for any variable that is unset or cannot be parsed.
    ///
    /// The variables consulted are [`LIST_URL_ENV_VAR`],
    /// [`REQUEST_TIMEOUT_ENV_VAR`] and [`CONNECT_TIMEOUT_ENV_VAR`].
    #[must_use]
    pub fn from_env() -> Self {
        let default = Self::default();
        let list_url = env::var(LIST_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(default.list_url);
        let timeout = env_var_parsed(REQUEST_TIMEOUT_ENV_VAR)
            .map_or(default.timeout, Duration::from_secs);
        let connect_timeout = env_var_parsed(CONNECT_TIMEOUT_ENV_VAR)
            .map_or(default.connect_timeout, Duration::from_secs);

        Self {
            list_url,
            timeout,
            connect_timeout,
        }
    }

    /// Sets the location of the list of releases to `url`.
    #[must_use]
    pub fn with_list_url(mut self, url: impl Into<String>) -> Self {
        self.list_url = url.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_url:        COMPILERS_LIST_URL.to_string(),
            timeout:         Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Reads and parses the environment variable `name`, if possible.
fn env_var_parsed<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.trim().parse().ok())
}
