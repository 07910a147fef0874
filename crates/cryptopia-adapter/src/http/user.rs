/*
[INPUT]:  Currency / market filters and signed credentials
[OUTPUT]: User account data (balances, addresses, orders, history)
[POS]:    HTTP layer - private account endpoints (require signature)
[UPDATE]: When adding new account endpoints or changing body fields
*/

use crate::http::response::decode_payload;
use crate::http::{CryptopiaClient, Result};
use crate::types::{
    Balance, DepositAddress, OpenOrder, Operation, Params, TradeHistory, Transaction,
    TransactionType,
};

impl CryptopiaClient {
    /// POST /Api/GetBalance `{"Currency": ...}`
    ///
    /// An empty currency returns every balance on the account.
    pub async fn get_balance(&self, currency: &str) -> Result<Option<Vec<Balance>>> {
        let params = Params::new().with("Currency", currency);
        let data = self.dispatch(Operation::GetBalance, params).await?;
        decode_payload(data)
    }

    /// POST /Api/GetDepositAddress `{"Currency": ...}`
    pub async fn get_deposit_address(&self, currency: &str) -> Result<Option<DepositAddress>> {
        let params = Params::new().with("Currency", currency);
        let data = self.dispatch(Operation::GetDepositAddress, params).await?;
        decode_payload(data)
    }

    /// POST /Api/GetOpenOrders `{"Market": ...}`
    pub async fn get_open_orders(&self, market: &str) -> Result<Option<Vec<OpenOrder>>> {
        let params = Params::new().with("Market", market);
        let data = self.dispatch(Operation::GetOpenOrders, params).await?;
        decode_payload(data)
    }

    /// POST /Api/GetTradeHistory `{"Market": ...}`
    pub async fn get_trade_history(&self, market: &str) -> Result<Option<Vec<TradeHistory>>> {
        let params = Params::new().with("Market", market);
        let data = self.dispatch(Operation::GetTradeHistory, params).await?;
        decode_payload(data)
    }

    /// POST /Api/GetTransactions `{"Type": "Deposit" | "Withdraw"}`
    pub async fn get_transactions(
        &self,
        transaction_type: TransactionType,
    ) -> Result<Option<Vec<Transaction>>> {
        let params = Params::new().with("Type", transaction_type.to_string());
        let data = self.dispatch(Operation::GetTransactions, params).await?;
        decode_payload(data)
    }
}
