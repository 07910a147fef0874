/*
[INPUT]:  Operation name or descriptor plus request parameters
[OUTPUT]: Unwrapped payload JSON from exactly one HTTP round trip
[POS]:    HTTP layer - request dispatcher (routing, signing, unwrapping)
[UPDATE]: When routing rules or the request pipeline change
*/

use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::debug;

use crate::http::response::unwrap_response;
use crate::http::{CryptopiaClient, CryptopiaError, Result};
use crate::types::{ApiResponse, Operation, Params};

impl CryptopiaClient {
    /// Call any catalog operation by its wire name.
    ///
    /// Unknown names fail before anything is sent.
    pub async fn query(&self, name: &str, params: Params) -> Result<Value> {
        let operation: Operation = name.parse()?;
        self.dispatch(operation, params).await
    }

    /// Route, send, and unwrap one request
    pub async fn dispatch(&self, operation: Operation, params: Params) -> Result<Value> {
        let response = if operation.is_private() {
            self.send_private(operation, &params).await?
        } else {
            self.send_public(operation, &params).await?
        };
        unwrap_response(operation, response)
    }

    /// GET `{base}/Api/{operation}/{v1}/{v2}...`
    async fn send_public(&self, operation: Operation, params: &Params) -> Result<ApiResponse> {
        let url = format!(
            "{}/{}",
            self.operation_url(operation),
            params.path_segments()
        );
        let method = operation.method();
        debug!(operation = %operation, method = %method, url = %url, "dispatching cryptopia request");

        let builder = self.http_client().request(method, &url);
        send_envelope(builder).await
    }

    /// Signed POST `{base}/Api/{operation}` with a JSON body
    async fn send_private(&self, operation: Operation, params: &Params) -> Result<ApiResponse> {
        let signer = self
            .signer()
            .ok_or(CryptopiaError::MissingCredentials { operation })?;

        let url = self.operation_url(operation);
        let body = params.to_body()?;
        let headers = signer.sign(&url, &body)?;
        let method = operation.method();
        debug!(
            operation = %operation,
            method = %method,
            url = %url,
            nonce = %headers.nonce,
            "dispatching cryptopia request"
        );

        let builder = self
            .http_client()
            .request(method, &url)
            .headers(headers.to_header_map()?)
            .body(body);
        send_envelope(builder).await
    }
}

async fn send_envelope(builder: RequestBuilder) -> Result<ApiResponse> {
    let response = builder.send().await?;
    Ok(response.json::<ApiResponse>().await?)
}
