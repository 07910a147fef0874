/*
[INPUT]:  Parsed response envelope and the operation that produced it
[OUTPUT]: Payload JSON or a RemoteRejection error
[POS]:    HTTP layer - envelope unwrapping applied to every dispatch
[UPDATE]: When the envelope shape or notice handling changes
*/

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::http::{CryptopiaError, Result};
use crate::types::{ApiResponse, Operation};

/// Inspect the envelope and hand back `Data` untouched.
///
/// Server notices in `Message` are logged and otherwise ignored.
pub fn unwrap_response(operation: Operation, response: ApiResponse) -> Result<Value> {
    if !response.is_success() {
        warn!(
            operation = %operation,
            error = response.error.as_deref().unwrap_or_default(),
            "cryptopia request rejected"
        );
        return Err(CryptopiaError::RemoteRejection {
            operation,
            error: response.error,
        });
    }

    if let Some(message) = response.message.as_deref().filter(|m| !m.is_empty()) {
        info!(operation = %operation, notice = message, "cryptopia notice");
    }

    Ok(response.data)
}

/// Typed view of an unwrapped payload; `null` becomes `None`
pub fn decode_payload<T: DeserializeOwned>(data: Value) -> Result<Option<T>> {
    if data.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(data)?))
}
