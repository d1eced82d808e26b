//! This module contains the [`Resolver`], which maps short compiler versions to
//! the exact builds published for them.

use crate::{
    constant::{BUILD_ID_PREFIX, BUILD_ID_SUFFIX},
    error::resolution,
    release::{CatalogSource, CompilersList, HttpCatalogFetcher},
};

/// Resolves short compiler versions against the list of releases provided by
/// its [`CatalogSource`].
///
/// Every resolution asks the source for the list anew.
#[derive(Clone, Debug, Default)]
pub struct Resolver<S = HttpCatalogFetcher> {
    source: S,
}

impl<S: CatalogSource> Resolver<S> {
    /// Constructs a new resolver that obtains the list of releases from
    /// `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Gets a reference to the source of the list of releases.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves `short_version` (e.g. `0.8.4`) to the version of the exact
    /// published build (e.g. `v0.8.4+commit.c7e474f2`).
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the list of releases cannot be obtained, if it has no
    /// build for `short_version`, or if that build is not named as expected.
    pub fn get_long_version(&self, short_version: &str) -> resolution::Result<String> {
        let list = self.source.get_versions()?;
        long_version_in(&list, short_version)
    }

    /// Resolves the most recent release to the version of its exact published
    /// build.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] under the same conditions as
    /// [`Self::get_long_version`].
    pub fn latest_long_version(&self) -> resolution::Result<String> {
        let list = self.source.get_versions()?;
        long_version_in(&list, list.latest_release())
    }
}

/// Resolves `short_version` against a `list` of releases that has already been
/// obtained.
///
/// # Errors
///
/// Returns [`Err`] if `list` has no (or an empty) build for `short_version`, or
/// if the build is not of the form `soljson-<build>.js`.
pub fn long_version_in(list: &CompilersList, short_version: &str) -> resolution::Result<String> {
    let build_id = list
        .build_id(short_version)
        .filter(|build_id| !build_id.is_empty())
        .ok_or_else(|| resolution::Error::VersionNotFound {
            version: short_version.to_string(),
        })?;

    match normalize_build_id(build_id) {
        Some(long_version) => {
            tracing::debug!(short_version, long_version, "Resolved solc version");
            Ok(long_version.to_string())
        }
        None => {
            tracing::warn!(short_version, build_id, "Published solc build has unexpected name");
            Err(resolution::Error::MalformedBuildId {
                version:  short_version.to_string(),
                build_id: build_id.to_string(),
            })
        }
    }
}

/// Strips the literal `soljson-` prefix and `.js` suffix from the published
/// `build_id`, returning the build version between them.
///
/// Returns [`None`] unless `build_id` has both the prefix and the suffix with a
/// non-empty version between them.
#[must_use]
pub fn normalize_build_id(build_id: &str) -> Option<&str> {
    build_id
        .strip_prefix(BUILD_ID_PREFIX)?
        .strip_suffix(BUILD_ID_SUFFIX)
        .filter(|version| !version.is_empty())
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use crate::{
        error::resolution,
        release::{
            resolver::{long_version_in, normalize_build_id},
            CatalogSource,
            CompilersList,
            Resolver,
        },
    };

    fn list() -> CompilersList {
        let releases = [
            ("0.8.4", "soljson-v0.8.4+commit.c7e474f2.js"),
            ("0.4.11", "soljson-v0.4.11+commit.68ef5810.js"),
            ("0.1.0", ""),
            ("0.0.1", "v0.0.1+commit.deadbeef"),
        ]
        .into_iter()
        .map(|(short, long)| (short.to_string(), long.to_string()))
        .collect();

        CompilersList::new(releases, "0.8.4")
    }

    /// A source that counts how many times the list was requested.
    #[derive(Debug, Default)]
    struct CountingSource {
        calls: Cell<usize>,
    }

    impl CatalogSource for CountingSource {
        fn get_versions(&self) -> resolution::Result<CompilersList> {
            self.calls.set(self.calls.get() + 1);
            Ok(list())
        }
    }

    #[test]
    fn resolves_known_version() -> anyhow::Result<()> {
        let resolver = Resolver::new(list());
        assert_eq!(resolver.get_long_version("0.8.4")?, "v0.8.4+commit.c7e474f2");

        Ok(())
    }

    #[test]
    fn resolves_latest_release() -> anyhow::Result<()> {
        let resolver = Resolver::new(list());
        assert_eq!(resolver.latest_long_version()?, "v0.8.4+commit.c7e474f2");

        Ok(())
    }

    #[test]
    fn errors_on_unknown_version() {
        let error = long_version_in(&list(), "9.9.9").expect_err("Resolution did not error");

        assert!(matches!(
            &error,
            resolution::Error::VersionNotFound { version } if version == "9.9.9"
        ));
        assert!(error.to_string().contains("doesn't exist"));
    }

    #[test]
    fn treats_empty_build_as_unknown() {
        let error = long_version_in(&list(), "0.1.0").expect_err("Resolution did not error");
        assert!(matches!(error, resolution::Error::VersionNotFound { .. }));
    }

    #[test]
    fn errors_on_unwrapped_build() {
        let error = long_version_in(&list(), "0.0.1").expect_err("Resolution did not error");

        assert!(matches!(
            &error,
            resolution::Error::MalformedBuildId { build_id, .. }
                if build_id == "v0.0.1+commit.deadbeef"
        ));
    }

    #[test]
    fn fetches_the_list_on_every_resolution() -> anyhow::Result<()> {
        let source = CountingSource::default();
        let resolver = Resolver::new(&source);

        resolver.get_long_version("0.8.4")?;
        resolver.get_long_version("0.4.11")?;
        assert_eq!(source.calls.get(), 2);

        Ok(())
    }

    #[test]
    fn normalizes_only_exact_wrappers() {
        assert_eq!(
            normalize_build_id("soljson-v0.8.4+commit.c7e474f2.js"),
            Some("v0.8.4+commit.c7e474f2")
        );
        assert_eq!(
            normalize_build_id("soljson-v0.4.24-nightly.2018.5.3+commit.b5a6f2a4.js"),
            Some("v0.4.24-nightly.2018.5.3+commit.b5a6f2a4")
        );
        assert_eq!(normalize_build_id("xsoljson-v0.8.4.js"), None);
        assert_eq!(normalize_build_id("soljson-v0.8.4.jsx"), None);
        assert_eq!(normalize_build_id("soljson-v0.8.4"), None);
        assert_eq!(normalize_build_id("soljson-.js"), None);
    }
}
