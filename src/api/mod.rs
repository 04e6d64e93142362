pub mod client;
pub mod endpoints;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

use crate::config::Config;
use crate::errors::AppResult;

/// Client for the configured API, carrying the stored token.
pub fn client_from_config(cfg: &Config) -> AppResult<ApiClient> {
    Ok(ApiClient::new(
        &cfg.api_base_url,
        cfg.token(),
        cfg.request_timeout_secs,
    )?)
}
