//! Blocking HTTP client for the attendance REST API.
//!
//! Every request carries the bearer token (when one is configured) and every
//! non-2xx response is turned into an [`ApiError`] with a normalized message.

use crate::api::error::ApiError;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub type Query<'a> = &'a [(&'a str, String)];

pub struct ApiClient {
    http: Client,
    base: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>, timeout_secs: u64) -> Result<Self, ApiError> {
        let mut raw = base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .user_agent(concat!("rattendance/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Resolve `path` relative to the base URL, keeping any base path prefix.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    fn request(&self, method: Method, path: &str, accept: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint_url(path)?;
        debug!("api request {} {}", method, url);

        let mut req = self.http.request(method, url).header(ACCEPT, accept);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }

    fn send(req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send()?;
        let status = resp.status();
        debug!(status = status.as_u16(), "api response");

        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_else(|e| {
            debug!("error body unreadable: {e}");
            String::new()
        });
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let body = resp.text()?;
        // Some endpoints answer 204/empty on success.
        let raw = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T, ApiError> {
        let req = self.request(Method::GET, path, "application/json")?.query(query);
        Self::decode(Self::send(req)?)
    }

    pub fn get_text(&self, path: &str, query: Query) -> Result<String, ApiError> {
        let req = self
            .request(Method::GET, path, "text/csv, text/plain, */*")?
            .query(query);
        Ok(Self::send(req)?.text()?)
    }

    pub fn get_bytes(&self, path: &str, query: Query) -> Result<Vec<u8>, ApiError> {
        let req = self.request(Method::GET, path, "*/*")?.query(query);
        Ok(Self::send(req)?.bytes()?.to_vec())
    }

    pub fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.request(Method::POST, path, "application/json")?.json(body);
        Self::decode(Self::send(req)?)
    }

    pub fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.request(Method::PUT, path, "application/json")?.json(body);
        Self::decode(Self::send(req)?)
    }
}

/// Unwrap list payloads that arrive either bare or inside a wrapper object.
pub fn extract_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in ["data", "items", "rows", "results", "logs", "records"] {
                if let Some(inner) = map.remove(key) {
                    match inner {
                        Value::Array(items) => return items,
                        // e.g. { data: { items: [...] } }
                        obj @ Value::Object(_) => return extract_list(obj),
                        _ => {}
                    }
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}
