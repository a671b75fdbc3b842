//! HTTP transport for store API requests.

use crate::config::Config;
use crate::Error;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

/// Raw response handed to the classifier: status and body, uninterpreted.
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

/// HTTP transport for the Medusa backend.
///
/// Owns base-URL joining and auth header injection; never inspects the
/// response status beyond logging it.
#[derive(Debug)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub(crate) fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_owned(),
            api_key: config.api_key().map(str::to_owned),
        })
    }

    /// Send a request and return the raw status and body.
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, Error> {
        let url = format!("{}{}", self.base_url, path);

        debug!(method = %method, url = %url, "sending request");

        let mut request = self.client.request(method, &url);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            warn!(status = %status, url = %url, "store API returned error status");
        }

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MedusaBuilder;

    #[test]
    fn test_transport_takes_normalized_base_url() {
        let config = MedusaBuilder::new("http://localhost:9000/")
            .build_config()
            .unwrap();

        let transport = HttpTransport::new(&config).unwrap();

        assert_eq!(transport.base_url, "http://localhost:9000");
    }
}
