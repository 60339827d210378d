//! Shared HTTP plumbing for the fetch clients.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use walkability_core::FetchError;

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while constructing a fetch client.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[from] std::io::Error),
    /// No API key was supplied for a service that requires one.
    #[error("an OpenRouteService API key is required")]
    MissingApiKey,
}

pub(crate) fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, ClientBuildError> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(ClientBuildError::HttpClient)
}

pub(crate) fn build_runtime() -> Result<Runtime, ClientBuildError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ClientBuildError::Runtime)
}

/// Drive a future to completion from synchronous code.
///
/// Inside an existing multi-threaded Tokio runtime the caller's runtime is
/// used via `block_in_place` to avoid nested-runtime panics; otherwise the
/// client's own stored runtime drives the future. A `current_thread` caller
/// runtime falls back to the stored runtime as well, since `block_in_place`
/// would panic there.
pub(crate) fn block_on<F: Future>(runtime: &Runtime, future: F) -> F::Output {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(|| handle.block_on(future))
        }
        _ => runtime.block_on(future),
    }
}

/// Convert a reqwest error into the engine's fetch error vocabulary.
pub(crate) fn convert_reqwest_error(
    error: &reqwest::Error,
    url: &str,
    timeout: Duration,
) -> FetchError {
    if error.is_timeout() {
        return FetchError::Timeout {
            url: url.to_owned(),
            timeout_secs: timeout.as_secs(),
        };
    }
    if let Some(status) = error.status() {
        return FetchError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
            message: error.to_string(),
        };
    }
    FetchError::Network {
        url: url.to_owned(),
        message: error.to_string(),
    }
}
