/*
[INPUT]:  Caller-supplied parameters and typed request structs
[OUTPUT]: Ordered parameter sets ready for path building or JSON bodies
[POS]:    Data layer - request envelope for public and private calls
[UPDATE]: When API schema changes or new request types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::http::{CryptopiaError, Result};

use super::enums::{CancelType, TradeType};

/// Named request parameters, kept in insertion order.
///
/// Public calls only use the values, as URL path segments. Private calls send
/// the whole mapping as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Build parameters from a typed request; it must serialize to an object.
    pub fn from_request<T: Serialize>(request: &T) -> Result<Self> {
        match serde_json::to_value(request)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CryptopiaError::InvalidParams(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values joined with `/`, in insertion order. Key names are dropped.
    pub fn path_segments(&self) -> String {
        self.0
            .values()
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Serialized JSON body; this exact string is what gets signed.
    pub fn to_body(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitTradeRequest {
    /// Market label, e.g. `DOT/BTC`
    pub market: String,
    #[serde(rename = "Type")]
    pub trade_type: TradeType,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// `OrderID` is required for [`CancelType::Trade`], `TradePairID` for
/// [`CancelType::TradePair`]. Both are always sent, as `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelTradeRequest {
    #[serde(rename = "Type")]
    pub cancel_type: CancelType,
    #[serde(rename = "OrderID")]
    pub order_id: Option<i64>,
    #[serde(rename = "TradePairID")]
    pub trade_pair_id: Option<i64>,
}

impl CancelTradeRequest {
    pub fn all() -> Self {
        Self {
            cancel_type: CancelType::All,
            order_id: None,
            trade_pair_id: None,
        }
    }

    pub fn order(order_id: i64) -> Self {
        Self {
            cancel_type: CancelType::Trade,
            order_id: Some(order_id),
            trade_pair_id: None,
        }
    }

    pub fn trade_pair(trade_pair_id: i64) -> Self {
        Self {
            cancel_type: CancelType::TradePair,
            order_id: None,
            trade_pair_id: Some(trade_pair_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitTipRequest {
    pub currency: String,
    /// Number of recently active chat users to split the tip between
    pub active_users: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitWithdrawRequest {
    pub currency: String,
    pub address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitTransferRequest {
    pub currency: String,
    pub username: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
