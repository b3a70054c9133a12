use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{BasecoatError, Result};

/// Remote resource loader over plain blocking HTTP.
///
/// Every document this tool consumes is a raw GET; there is no caching
/// and no retry. A failed fetch aborts only the unit of work that asked
/// for it.
pub struct Remote {
    http: reqwest::blocking::Client,
}

impl Remote {
    pub fn new() -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch a URL and return its body as text.
    ///
    /// Connection-level failures and non-success statuses are distinct
    /// errors; the latter carries the status code and response body.
    pub fn fetch(&self, url: &str) -> Result<String> {
        debug!(%url, "fetching");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| BasecoatError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| BasecoatError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(BasecoatError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Fetch a URL and decode its body as a YAML document.
    pub fn fetch_yaml<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url)?;
        serde_yaml::from_str(&body).map_err(|e| BasecoatError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

impl Default for Remote {
    fn default() -> Self {
        Self::new()
    }
}
