/*
[INPUT]:  API key and secret supplied by the caller
[OUTPUT]: Credentials consumed by the request signer
[POS]:    Auth layer - handles Cryptopia API credentials
[UPDATE]: When credential handling changes
*/

pub mod credentials;

pub use credentials::Credentials;
