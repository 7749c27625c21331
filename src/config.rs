//! Client configuration.
//!
//! Every field is optional.  Missing fields resolve to their defaults once,
//! when the `Client` is built, and the derived URL and headers are reused for
//! every query after that.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::error::{ClientError, Result};

pub const DEFAULT_HOST: &str = "http://127.0.0.1:9070";
pub const QUERY_PATH: &str = "/text-query";

pub const USERNAME_HEADER: &str = "x-cozo-username";
pub const PASSWORD_HEADER: &str = "x-cozo-password";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// The query endpoint: `host` followed by the fixed query path
    pub fn url(&self) -> String {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        format!("{host}{QUERY_PATH}")
    }

    /// The headers sent with every query
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let credentials = [
            (USERNAME_HEADER, self.username.as_deref().unwrap_or_default()),
            (PASSWORD_HEADER, self.password.as_deref().unwrap_or_default()),
        ];

        for (name, value) in credentials {
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::CreateClient(format!("Invalid {name} header: {e}")))?;
            headers.insert(HeaderName::from_static(name), value);
        }

        Ok(headers)
    }
}
