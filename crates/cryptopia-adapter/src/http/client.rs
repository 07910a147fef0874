/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Url};

use crate::auth::Credentials;
use crate::http::{RequestSigner, Result};
use crate::types::Operation;

/// Base URL for the Cryptopia API
pub const DEFAULT_BASE_URL: &str = "https://www.cryptopia.co.nz";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Main HTTP client for the Cryptopia API.
///
/// Holds only immutable state, so one instance can be shared across tasks.
#[derive(Debug)]
pub struct CryptopiaClient {
    http_client: Client,
    base_url: Url,
    signer: Option<RequestSigner>,
}

impl CryptopiaClient {
    /// Create a public-only client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a public-only client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a client that can also call private endpoints
    pub fn with_credentials(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::build(config, Some(RequestSigner::new(credentials)))
    }

    fn build(config: ClientConfig, signer: Option<RequestSigner>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            signer,
        })
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.signer.as_ref().map(RequestSigner::credentials)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.http_client
    }

    pub(crate) fn signer(&self) -> Option<&RequestSigner> {
        self.signer.as_ref()
    }

    /// `{base}/Api/{operation}`; this string is also what private calls sign
    pub fn operation_url(&self, operation: Operation) -> String {
        format!(
            "{}/Api/{}",
            self.base_url.as_str().trim_end_matches('/'),
            operation
        )
    }
}
