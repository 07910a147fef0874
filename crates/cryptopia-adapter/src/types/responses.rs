/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Response envelope and typed operation results
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform envelope wrapping every Cryptopia reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiResponse {
    /// A missing `Success` flag counts as failure.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitTradeResponse {
    /// Id of the resting order, `None` when the trade filled immediately
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub filled_orders: Vec<i64>,
}
