/// Status sources
///
/// One request against the backend token-status endpoint, decoded into a `StatusResult`.

use std::time::Duration;

use anyhow::{anyhow, Error, Result};
use reqwest::Client;
use tracing::debug;

use crate::config::settings::PollerConfig;
use crate::status::StatusResult;

pub trait FetchStatus {
    fn fetch_status(&self) -> impl std::future::Future<Output = Result<StatusResult, Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: Client,
    url: String,
}

impl HttpStatusSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    /// Build the client from poller settings; without `timeout_ms` the reqwest default applies
    pub fn from_config(poller: &PollerConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = poller.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;
        Ok(Self::new(client, poller.status_url()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FetchStatus for HttpStatusSource {
    async fn fetch_status(&self) -> Result<StatusResult, Error> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("token status response {}: {}", status, body);

        // the body decides, not the status code
        serde_json::from_str::<StatusResult>(&body)
            .map_err(|err| anyhow!("unparseable token status body (HTTP {}): {}", status, err))
    }
}
