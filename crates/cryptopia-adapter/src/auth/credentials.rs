/*
[INPUT]:  API key and base64-encoded API secret
[OUTPUT]: Immutable credential pair with lazy secret decoding
[POS]:    Auth layer - credential ownership for private endpoints
[UPDATE]: When credential format or redaction rules change
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::http::Result;

/// API key/secret pair owned by one client instance.
///
/// The secret stays in its base64 form until a request is signed, so a
/// malformed secret surfaces as [`crate::CryptopiaError::CredentialDecode`]
/// on the first private call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Raw HMAC key bytes
    pub fn decode_secret(&self) -> Result<Vec<u8>> {
        Ok(BASE64.decode(self.api_secret.as_bytes())?)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
