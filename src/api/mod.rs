// API client module: a small blocking HTTP client bound to one `Config` and
// one JWT. Each submodule adds the requests for one remote resource; they all
// go through `ApiClient::execute`, which sends a request exactly once and
// turns a non-200 answer into an error.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::render;

pub mod files;
pub mod gateways;
pub mod groups;
pub mod keys;
pub mod swaps;
pub mod types;
pub mod uploads;

/// Timeout for `GET /data/testAuthentication`.
pub const AUTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Blocking client for the management and upload APIs.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
    token: String,
}

impl ApiClient {
    /// Create a client that authenticates every request with `token`.
    ///
    /// The underlying client has no default timeout; uploads get a deadline
    /// only when `config.upload_timeout` is set.
    pub fn new(config: Config, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::network(&config.api_url, e))?;
        Ok(ApiClient {
            client,
            config,
            token: token.into(),
        })
    }

    /// Load the stored JWT from `config.credentials` and build a client.
    pub fn from_config(config: Config) -> Result<Self> {
        let token = config.credentials.load_token()?;
        ApiClient::new(config, token)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    fn upload_url(&self, path: &str) -> String {
        format!("{}{}", self.config.upload_url, path)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.bearer_auth(&self.token)
    }

    /// Send `req` once and return the body of a 200 response.
    fn execute(&self, url: &str, req: RequestBuilder) -> Result<String> {
        let res = self
            .authorized(req)
            .send()
            .map_err(|e| Error::network(url, e))?;
        let status = res.status();
        debug!(%url, status = status.as_u16(), "response received");

        let body = res.text().map_err(|e| Error::network(url, e))?;
        if status != StatusCode::OK {
            return Err(Error::from_status(status.as_u16(), body));
        }
        Ok(body)
    }

    /// Send `req` and decode the `data` field of the response envelope.
    fn execute_data<T: DeserializeOwned>(&self, url: &str, req: RequestBuilder) -> Result<T> {
        let body = self.execute(url, req)?;
        render::decode_data(&body)
    }

    /// Send `req` and decode the whole response body.
    fn execute_json<T: DeserializeOwned>(&self, url: &str, req: RequestBuilder) -> Result<T> {
        let body = self.execute(url, req)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Check `token` against `GET /data/testAuthentication`.
///
/// This runs before the token is stored, so it does not need an `ApiClient`.
pub fn test_authentication(config: &Config, token: &str) -> Result<()> {
    let url = format!("{}/data/testAuthentication", config.api_url);
    let client = Client::builder()
        .timeout(AUTH_CHECK_TIMEOUT)
        .build()
        .map_err(|e| Error::network(&url, e))?;

    let res = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .map_err(|e| Error::network(&url, e))?;
    let status = res.status();
    if status != StatusCode::OK {
        let body = res.text().unwrap_or_default();
        return Err(Error::from_status(status.as_u16(), body));
    }
    info!("token accepted by {}", config.api_url);
    Ok(())
}

/// Append `(key, value)` to `query` when `value` is non-empty.
fn push_param(query: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        query.push((key.to_string(), value.to_string()));
    }
}

/// Append `(key, "true")` when `flag` is set; false flags are left out.
fn push_flag(query: &mut Vec<(String, String)>, key: &str, flag: bool) {
    if flag {
        query.push((key.to_string(), "true".to_string()));
    }
}
