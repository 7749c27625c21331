pub mod config;
pub mod error;
pub mod request;
pub mod result;
pub mod table;

use std::fmt::Debug;
use std::io::Write;

use reqwest::header::HeaderMap;
use tracing::{debug, error};

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use request::{Params, QueryRequest};
pub use result::QueryResult;
pub use table::{render_table, write_table};

/// Client for the text query endpoint of a database server.
///
/// The endpoint URL and headers are resolved from a `ClientConfig` once, so a
/// client can be cloned and shared across tasks; every call is an independent
/// request/response exchange.
#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    url: String,
    headers: HeaderMap,
}

// headers carry the password
impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("url", &self.url).finish()
    }
}

impl Client {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let headers = config.headers()?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::CreateClient(e.to_string()))?;

        Ok(Client {
            inner,
            url: config.url(),
            headers,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Execute a query and return the decoded response.
    ///
    /// A response outside the 2xx range is logged as an error with its body
    /// and yields `None`.  Transport and decode failures are returned.
    pub async fn run(
        &self,
        script: &str,
        params: Option<Params>,
    ) -> Result<Option<QueryResult>> {
        match self.try_run(script, params).await {
            Ok(result) => Ok(Some(result)),
            Err(ClientError::Server { status, body }) => {
                error!(status, "{body}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Execute a query, returning a non-2xx response as `ClientError::Server`
    pub async fn try_run(&self, script: &str, params: Option<Params>) -> Result<QueryResult> {
        let request = QueryRequest::new(script, params);
        debug!(url = %self.url, script_len = script.len(), "sending query");

        let response = self
            .inner
            .post(&self.url)
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ClientError::Request(e.to_string()))?;

            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Execute a query and print its rows to stdout as a table.
    ///
    /// Nothing is printed when the server rejects the query; `run` has
    /// already logged the response.
    pub async fn print(&self, script: &str, params: Option<Params>) -> Result<()> {
        self.print_to(&mut std::io::stdout(), script, params).await
    }

    /// Execute a query and write its rows to `writer` as a table
    pub async fn print_to<W: Write>(
        &self,
        writer: &mut W,
        script: &str,
        params: Option<Params>,
    ) -> Result<()> {
        if let Some(result) = self.run(script, params).await? {
            table::write_table(writer, &result)?;
        }

        Ok(())
    }
}
