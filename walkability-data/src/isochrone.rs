//! HTTP [`IsochroneProvider`] backed by OpenRouteService.
//!
//! The client posts to the foot-walking isochrone endpoint and converts the
//! GeoJSON answer into a `geo` polygon. The API key is a constructor
//! parameter passed through from the caller's configuration; it is never
//! read from global state.

use std::time::Duration;

use geo::{Point, Polygon};
use reqwest::Client;
use tokio::runtime::Runtime;
use walkability_core::{FetchError, IsochroneProvider, TimeLimit};

use crate::http::{self, ClientBuildError};
use crate::ors::IsochroneResponse;

/// Default OpenRouteService instance.
pub const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default user agent for OpenRouteService requests.
pub const DEFAULT_USER_AGENT: &str = "walkability-engine/0.1";

/// Configuration for [`OrsIsochroneClient`].
#[derive(Clone)]
pub struct OrsClientConfig {
    /// Base URL of the OpenRouteService instance.
    pub base_url: String,
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for OrsClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl OrsClientConfig {
    /// Create a configuration for the public instance with the given key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_ORS_BASE_URL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the client at a different instance.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Isochrone client for an OpenRouteService instance.
pub struct OrsIsochroneClient {
    client: Client,
    config: OrsClientConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for OrsIsochroneClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsIsochroneClient")
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl OrsIsochroneClient {
    /// Create a client for the public instance.
    ///
    /// # Errors
    /// Returns a [`ClientBuildError`] when the key is empty or the HTTP
    /// client or runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(OrsClientConfig::new(api_key))
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError::MissingApiKey`] for a blank key, or a
    /// build failure from the HTTP client or runtime.
    pub fn with_config(config: OrsClientConfig) -> Result<Self, ClientBuildError> {
        if config.api_key.trim().is_empty() {
            return Err(ClientBuildError::MissingApiKey);
        }
        let client = http::build_client(&config.user_agent, config.timeout)?;
        let runtime = http::build_runtime()?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    fn isochrone_url(&self) -> String {
        format!(
            "{}/v2/isochrones/foot-walking",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn fetch_isochrone_async(
        &self,
        center: Point<f64>,
        time_limit: TimeLimit,
    ) -> Result<Polygon<f64>, FetchError> {
        let url = self.isochrone_url();
        let body = serde_json::json!({
            "locations": [[center.x(), center.y()]],
            "range": [u64::from(time_limit.minutes()) * 60],
            "range_type": "time",
            "units": "m",
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| http::convert_reqwest_error(&err, &url, self.config.timeout))?
            .error_for_status()
            .map_err(|err| http::convert_reqwest_error(&err, &url, self.config.timeout))?;

        let payload: IsochroneResponse =
            response.json().await.map_err(|err| FetchError::Parse {
                message: err.to_string(),
            })?;
        payload.into_polygon()
    }
}

impl IsochroneProvider for OrsIsochroneClient {
    fn isochrone(
        &self,
        center: Point<f64>,
        time_limit: TimeLimit,
    ) -> Result<Polygon<f64>, FetchError> {
        log::debug!(
            "requesting {} isochrone around ({:.5}, {:.5})",
            time_limit,
            center.y(),
            center.x()
        );
        http::block_on(
            &self.runtime,
            self.fetch_isochrone_async(center, time_limit),
        )
    }
}
