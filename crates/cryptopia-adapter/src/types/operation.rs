/*
[INPUT]:  Operation names from callers or the command line
[OUTPUT]: Typed catalog entries with routing and parameter shape
[POS]:    Data layer - fixed public/private operation catalog
[UPDATE]: When the exchange adds or retires an endpoint
*/

use std::fmt;
use std::str::FromStr;

use reqwest::Method;

use crate::http::CryptopiaError;

/// Every endpoint the adapter can dispatch.
///
/// Public operations are plain `GET`s with path-segment parameters. Private
/// operations are signed `POST`s with a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetCurrencies,
    GetTradePairs,
    GetMarkets,
    GetMarket,
    GetMarketHistory,
    GetMarketOrders,
    GetMarketOrderGroups,
    GetBalance,
    GetDepositAddress,
    GetOpenOrders,
    GetTradeHistory,
    GetTransactions,
    SubmitTrade,
    CancelTrade,
    SubmitTip,
    SubmitWithdraw,
    SubmitTransfer,
}

impl Operation {
    pub const PUBLIC: [Operation; 7] = [
        Operation::GetCurrencies,
        Operation::GetTradePairs,
        Operation::GetMarkets,
        Operation::GetMarket,
        Operation::GetMarketHistory,
        Operation::GetMarketOrders,
        Operation::GetMarketOrderGroups,
    ];

    pub const PRIVATE: [Operation; 10] = [
        Operation::GetBalance,
        Operation::GetDepositAddress,
        Operation::GetOpenOrders,
        Operation::GetTradeHistory,
        Operation::GetTransactions,
        Operation::SubmitTrade,
        Operation::CancelTrade,
        Operation::SubmitTip,
        Operation::SubmitWithdraw,
        Operation::SubmitTransfer,
    ];

    /// Name used in the URL path
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::GetCurrencies => "GetCurrencies",
            Operation::GetTradePairs => "GetTradePairs",
            Operation::GetMarkets => "GetMarkets",
            Operation::GetMarket => "GetMarket",
            Operation::GetMarketHistory => "GetMarketHistory",
            Operation::GetMarketOrders => "GetMarketOrders",
            Operation::GetMarketOrderGroups => "GetMarketOrderGroups",
            Operation::GetBalance => "GetBalance",
            Operation::GetDepositAddress => "GetDepositAddress",
            Operation::GetOpenOrders => "GetOpenOrders",
            Operation::GetTradeHistory => "GetTradeHistory",
            Operation::GetTransactions => "GetTransactions",
            Operation::SubmitTrade => "SubmitTrade",
            Operation::CancelTrade => "CancelTrade",
            Operation::SubmitTip => "SubmitTip",
            Operation::SubmitWithdraw => "SubmitWithdraw",
            Operation::SubmitTransfer => "SubmitTransfer",
        }
    }

    /// Whether the call must be signed
    pub const fn is_private(self) -> bool {
        match self {
            Operation::GetCurrencies
            | Operation::GetTradePairs
            | Operation::GetMarkets
            | Operation::GetMarket
            | Operation::GetMarketHistory
            | Operation::GetMarketOrders
            | Operation::GetMarketOrderGroups => false,
            Operation::GetBalance
            | Operation::GetDepositAddress
            | Operation::GetOpenOrders
            | Operation::GetTradeHistory
            | Operation::GetTransactions
            | Operation::SubmitTrade
            | Operation::CancelTrade
            | Operation::SubmitTip
            | Operation::SubmitWithdraw
            | Operation::SubmitTransfer => true,
        }
    }

    pub fn method(self) -> Method {
        if self.is_private() {
            Method::POST
        } else {
            Method::GET
        }
    }

    /// Parameter names in the order the endpoint expects them.
    ///
    /// Public names are informational only; their values become path segments.
    pub const fn param_names(self) -> &'static [&'static str] {
        match self {
            Operation::GetCurrencies | Operation::GetTradePairs | Operation::GetMarkets => &[],
            Operation::GetMarket | Operation::GetMarketHistory | Operation::GetMarketOrders => {
                &["market"]
            }
            Operation::GetMarketOrderGroups => &["markets"],
            Operation::GetBalance | Operation::GetDepositAddress => &["Currency"],
            Operation::GetOpenOrders | Operation::GetTradeHistory => &["Market"],
            Operation::GetTransactions => &["Type"],
            Operation::SubmitTrade => &["Market", "Type", "Rate", "Amount"],
            Operation::CancelTrade => &["Type", "OrderID", "TradePairID"],
            Operation::SubmitTip => &["Currency", "ActiveUsers", "Amount"],
            Operation::SubmitWithdraw => &["Currency", "Address", "Amount"],
            Operation::SubmitTransfer => &["Currency", "Username", "Amount"],
        }
    }

    pub fn all() -> impl Iterator<Item = Operation> {
        Self::PUBLIC.into_iter().chain(Self::PRIVATE)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CryptopiaError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Operation::all()
            .find(|operation| operation.as_str() == name)
            .ok_or_else(|| CryptopiaError::UnknownOperation(name.to_string()))
    }
}
