/*
[INPUT]:  HTTP client configuration and API operations
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod dispatch;
pub mod error;
pub mod public;
pub mod response;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{CryptopiaError, Result};
pub use response::{decode_payload, unwrap_response};
pub use signature::{RequestSigner, SignedHeaders};

pub use client::{ClientConfig, CryptopiaClient};
