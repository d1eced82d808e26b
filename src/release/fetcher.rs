//! This module contains the [`HttpCatalogFetcher`], which retrieves the list of
//! compiler releases over HTTP.

use crate::{
    error::resolution,
    release::{CatalogSource, CompilersList, Config},
};

/// A catalog source that performs a single blocking HTTP request for the list
/// of compiler releases every time it is asked for it.
///
/// The request is made on the calling thread, and is neither retried nor
/// cached.
#[derive(Clone, Debug)]
pub struct HttpCatalogFetcher {
    /// The location of the list of releases.
    list_url: String,

    /// The HTTP agent used to make requests.
    agent: ureq::Agent,
}

impl HttpCatalogFetcher {
    /// Constructs a new fetcher using the provided `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .timeout_connect(config.connect_timeout)
            .build();
        Self::with_agent(config.list_url, agent)
    }

    /// Constructs a new fetcher that requests `list_url` using the provided
    /// `agent`, allowing the client to control the transport entirely.
    #[must_use]
    pub fn with_agent(list_url: impl Into<String>, agent: ureq::Agent) -> Self {
        let list_url = list_url.into();
        Self { list_url, agent }
    }

    /// Gets the location from which the list of releases is fetched.
    #[must_use]
    pub fn list_url(&self) -> &str {
        &self.list_url
    }
}

impl Default for HttpCatalogFetcher {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl CatalogSource for HttpCatalogFetcher {
    fn get_versions(&self) -> resolution::Result<CompilersList> {
        tracing::debug!(url = %self.list_url, "Fetching list of solc releases");

        let response = match self.agent.get(&self.list_url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                return Err(unavailable(status, response));
            }
            Err(error) => {
                return Err(resolution::Error::CatalogRequest {
                    source: Box::new(error),
                });
            }
        };

        // Redirects are followed by the agent, so anything else outside the
        // success range is a failure to obtain the list.
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(unavailable(status, response));
        }

        let list: CompilersList = response
            .into_json()
            .map_err(|source| resolution::Error::CatalogParse { source })?;

        tracing::debug!(
            releases = list.releases().len(),
            latest = list.latest_release(),
            "Fetched list of solc releases"
        );

        Ok(list)
    }
}

/// Builds the error for a response with the non-success `status`, keeping the
/// text of the response body for diagnosis.
fn unavailable(status: u16, response: ureq::Response) -> resolution::Error {
    let body = response
        .into_string()
        .unwrap_or_else(|error| format!("<unreadable response body: {error}>"));
    tracing::warn!(status, body = %body, "Request for list of solc releases was not ok");

    resolution::Error::CatalogUnavailable { status, body }
}
