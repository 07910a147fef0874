/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cryptopia-adapter tests

#![allow(dead_code)]

use cryptopia_adapter::{ClientConfig, Credentials, CryptopiaClient, RequestSigner};
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "6f2a1c9e4b8d4e0f";
/// base64("cryptopia-test-secret-0123456789")
pub const TEST_API_SECRET: &str = "Y3J5cHRvcGlhLXRlc3Qtc2VjcmV0LTAxMjM0NTY3ODk=";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}

pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    }
}

/// Client without credentials pointed at the mock server
pub fn public_client(server: &MockServer) -> CryptopiaClient {
    CryptopiaClient::with_config(mock_config(server)).expect("client init")
}

/// Client with the test credentials pointed at the mock server
pub fn signed_client(server: &MockServer) -> CryptopiaClient {
    CryptopiaClient::with_credentials(mock_config(server), test_credentials())
        .expect("client init")
}

/// Envelope with `Success: true`
pub fn success_envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "Success": true,
        "Message": null,
        "Data": data,
        "Error": null,
    })
}

/// Matches only requests whose `amx` header verifies against the received
/// body and the given URL.
pub struct ValidSignature {
    signer: RequestSigner,
    url: String,
}

impl ValidSignature {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            signer: RequestSigner::new(test_credentials()),
            url: url.into(),
        }
    }
}

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let Some(header) = request
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
        else {
            return false;
        };
        let Some(nonce) = header.rsplit(':').next() else {
            return false;
        };
        let Ok(body) = std::str::from_utf8(&request.body) else {
            return false;
        };

        self.signer
            .sign_with_nonce(&self.url, body, nonce)
            .map(|expected| expected.authorization == header)
            .unwrap_or(false)
    }
}
