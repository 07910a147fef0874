/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - payloads carried in the envelope's Data field
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{TradeType, TransactionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub algorithm: String,
    pub withdraw_fee: Decimal,
    pub min_withdraw: Decimal,
    pub min_base_trade: Decimal,
    pub is_tip_enabled: bool,
    pub min_tip: Decimal,
    pub deposit_confirmations: u32,
    pub status: String,
    #[serde(default)]
    pub status_message: Option<String>,
    pub listing_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradePair {
    pub id: i64,
    pub label: String,
    pub currency: String,
    pub symbol: String,
    pub base_currency: String,
    pub base_symbol: String,
    pub status: String,
    #[serde(default)]
    pub status_message: Option<String>,
    pub trade_fee: Decimal,
    pub minimum_trade: Decimal,
    pub maximum_trade: Decimal,
    pub minimum_base_trade: Decimal,
    pub maximum_base_trade: Decimal,
    pub minimum_price: Decimal,
    pub maximum_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    pub trade_pair_id: i64,
    pub label: String,
    pub ask_price: Decimal,
    pub bid_price: Decimal,
    pub low: Decimal,
    pub high: Decimal,
    pub volume: Decimal,
    pub last_price: Decimal,
    pub buy_volume: Decimal,
    pub sell_volume: Decimal,
    pub change: Decimal,
    pub open: Decimal,
    pub close: Decimal,
    pub base_volume: Decimal,
    pub buy_base_volume: Decimal,
    pub sell_base_volume: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketHistory {
    pub trade_pair_id: i64,
    pub label: String,
    #[serde(rename = "Type")]
    pub trade_type: TradeType,
    pub price: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
    /// Unix seconds
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketOrder {
    pub trade_pair_id: i64,
    pub label: String,
    pub price: Decimal,
    pub volume: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketOrders {
    #[serde(default)]
    pub buy: Vec<MarketOrder>,
    #[serde(default)]
    pub sell: Vec<MarketOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketOrderGroup {
    pub trade_pair_id: i64,
    pub market: String,
    #[serde(default)]
    pub buy: Vec<MarketOrder>,
    #[serde(default)]
    pub sell: Vec<MarketOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub currency_id: i64,
    pub symbol: String,
    pub total: Decimal,
    pub available: Decimal,
    pub unconfirmed: Decimal,
    pub held_for_trades: Decimal,
    pub pending_withdraw: Decimal,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub base_address: Option<String>,
    pub status: String,
    #[serde(default)]
    pub status_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositAddress {
    pub currency: String,
    pub address: String,
    /// Shared base address for payment-id style coins
    #[serde(default)]
    pub base_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    pub order_id: i64,
    pub trade_pair_id: i64,
    pub market: String,
    #[serde(rename = "Type")]
    pub trade_type: TradeType,
    pub rate: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
    pub remaining: Decimal,
    pub time_stamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeHistory {
    pub trade_id: i64,
    pub trade_pair_id: i64,
    pub market: String,
    #[serde(rename = "Type")]
    pub trade_type: TradeType,
    pub rate: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
    pub fee: Decimal,
    pub time_stamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    pub id: i64,
    pub currency: String,
    #[serde(default)]
    pub tx_id: Option<String>,
    #[serde(rename = "Type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub fee: Decimal,
    pub status: String,
    pub confirmations: u32,
    pub timestamp: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_balance_from_numeric_fields() {
        let raw = r#"{
            "CurrencyId": 2,
            "Symbol": "DOT",
            "Total": 1.5,
            "Available": 1.25,
            "Unconfirmed": 0,
            "HeldForTrades": 0.25,
            "PendingWithdraw": 0,
            "Address": "4HMjBARzTNdUpXCYkZDTHq8vmJQkdxXyFg",
            "BaseAddress": null,
            "Status": "OK",
            "StatusMessage": null
        }"#;

        let balance: Balance = serde_json::from_str(raw).expect("balance");
        assert_eq!(balance.symbol, "DOT");
        assert_eq!(balance.total, Decimal::from_str("1.5").unwrap());
        assert_eq!(balance.held_for_trades, Decimal::from_str("0.25").unwrap());
        assert_eq!(balance.base_address, None);
    }

    #[test]
    fn test_market_orders_default_sides() {
        let orders: MarketOrders = serde_json::from_str(r#"{"Buy": []}"#).expect("orders");
        assert!(orders.buy.is_empty());
        assert!(orders.sell.is_empty());
    }

    #[test]
    fn test_open_order_type_field() {
        let raw = r#"{
            "OrderId": 23467,
            "TradePairId": 100,
            "Market": "DOT/BTC",
            "Type": "Buy",
            "Rate": 0.00000034,
            "Amount": 145.98000000,
            "Total": 0.00004963,
            "Remaining": 23.98760000,
            "TimeStamp": "2014-12-07T20:04:05.3947572"
        }"#;

        let order: OpenOrder = serde_json::from_str(raw).expect("open order");
        assert_eq!(order.trade_type, TradeType::Buy);
        assert_eq!(order.rate, Decimal::from_str("0.00000034").unwrap());
    }
}
