//! HTTP contact transport.
//!
//! POSTs the form as a JSON object to a fixed endpoint. The response body is
//! never read; only the status decides success.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::instrument;

use healthbasics_core::contact::{ContactFormInput, ContactTransport};

use crate::error::ContactError;

/// Path the site conventionally posts contact forms to.
pub const DEFAULT_CONTACT_PATH: &str = "/api/contacts";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Sends contact forms to a remote endpoint over HTTP.
pub struct HttpTransport {
    endpoint: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport for `endpoint`. A `timeout` of `None` waits indefinitely.
    ///
    /// The endpoint is not validated here; a malformed one fails at delivery
    /// time like any other transport error.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.trim().to_string(),
            timeout,
            client,
        })
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout.map(|t| t.as_secs()).unwrap_or_default()
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, input), fields(endpoint = %self.endpoint))]
    async fn deliver(&self, input: &ContactFormInput) -> anyhow::Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| ContactError::InvalidEndpoint(format!("{}: {e}", self.endpoint)))?;

        let response = self
            .client
            .post(url)
            .json(input)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ContactError::Timeout(self.timeout_secs())
                } else if e.is_builder() {
                    ContactError::InvalidEndpoint(e.to_string())
                } else {
                    ContactError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = ContactError::Rejected {
                status: status.as_u16(),
            };
            tracing::debug!(server_side = err.is_server_side(), "{err}");
            return Err(err.into());
        }

        tracing::debug!(status = status.as_u16(), "contact endpoint accepted submission");
        Ok(())
    }
}
