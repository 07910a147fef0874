/*
[INPUT]:  Credentials, target URL, serialized request body, clock reading
[OUTPUT]: Signed request headers (Authorization + Content-Type)
[POS]:    HTTP layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::http::{CryptopiaError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Content type sent with every signed body
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Nonce ticks per second (10 microsecond resolution)
const NONCE_TICKS_PER_SECOND: u128 = 100_000;

/// Headers produced for one signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub authorization: String,
    pub content_type: &'static str,
    pub nonce: String,
}

impl SignedHeaders {
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&self.authorization)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        Ok(headers)
    }
}

/// Signs private request bodies with the `amx` HMAC scheme
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign with a nonce taken from the system clock.
    ///
    /// Nonces are not serialized across threads: two calls inside the same
    /// 10us window can produce the same nonce and one of them will be refused
    /// by the server.
    pub fn sign(&self, url: &str, body: &str) -> Result<SignedHeaders> {
        self.sign_with_nonce(url, body, &nonce_at(SystemTime::now()))
    }

    /// Sign according to the Cryptopia private API scheme
    ///
    /// Payload: "{key}POST{lowercase(quote_plus(url))}{nonce}{base64(md5(body))}"
    /// Header:  "amx {key}:{base64(hmac_sha256(secret, payload))}:{nonce}"
    pub fn sign_with_nonce(&self, url: &str, body: &str, nonce: &str) -> Result<SignedHeaders> {
        let api_key = self.credentials.api_key();
        let payload = signature_payload(api_key, url, nonce, &content_hash(body));

        let secret = self.credentials.decode_secret()?;
        let mut mac = HmacSha256::new_from_slice(&secret)
            .map_err(|e| CryptopiaError::Config(format!("invalid HMAC key: {e}")))?;
        mac.update(payload.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        Ok(SignedHeaders {
            authorization: format!("amx {api_key}:{signature}:{nonce}"),
            content_type: JSON_CONTENT_TYPE,
            nonce: nonce.to_string(),
        })
    }
}

/// Nonce for a clock reading: seconds since epoch * 100000, truncated
pub fn nonce_at(time: SystemTime) -> String {
    let elapsed = time.duration_since(UNIX_EPOCH).unwrap_or_default();
    let ticks = u128::from(elapsed.as_secs()) * NONCE_TICKS_PER_SECOND
        + u128::from(elapsed.subsec_nanos() / 10_000);
    ticks.to_string()
}

/// base64(md5(body))
pub fn content_hash(body: &str) -> String {
    BASE64.encode(Md5::digest(body.as_bytes()))
}

/// Form-encodes the URL (space as `+`) and lowercases the result
pub fn encode_url(url: &str) -> String {
    urlencoding::encode(url).replace("%20", "+").to_lowercase()
}

pub fn signature_payload(api_key: &str, url: &str, nonce: &str, content_hash: &str) -> String {
    format!("{api_key}POST{}{nonce}{content_hash}", encode_url(url))
}
