/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Cryptopia adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

pub use auth::Credentials;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CryptopiaClient,
    CryptopiaError,
    RequestSigner,
    Result,
    SignedHeaders,
};

// Re-export all types
pub use types::*;
