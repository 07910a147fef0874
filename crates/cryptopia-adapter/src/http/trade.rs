/*
[INPUT]:  Trade, cancel, tip, withdraw and transfer requests
[OUTPUT]: Order ids and transfer confirmations
[POS]:    HTTP layer - trading endpoints (require signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::response::decode_payload;
use crate::http::{CryptopiaClient, Result};
use crate::types::{
    CancelTradeRequest, Operation, Params, SubmitTipRequest, SubmitTradeRequest,
    SubmitTradeResponse, SubmitTransferRequest, SubmitWithdrawRequest,
};

impl CryptopiaClient {
    /// Place a limit order
    ///
    /// POST /Api/SubmitTrade
    pub async fn submit_trade(
        &self,
        req: &SubmitTradeRequest,
    ) -> Result<Option<SubmitTradeResponse>> {
        let data = self
            .dispatch(Operation::SubmitTrade, Params::from_request(req)?)
            .await?;
        decode_payload(data)
    }

    /// Cancel one order, every order on a pair, or everything.
    /// Returns the ids of the cancelled orders.
    ///
    /// POST /Api/CancelTrade
    pub async fn cancel_trade(&self, req: &CancelTradeRequest) -> Result<Option<Vec<i64>>> {
        let data = self
            .dispatch(Operation::CancelTrade, Params::from_request(req)?)
            .await?;
        decode_payload(data)
    }

    /// POST /Api/SubmitTip
    pub async fn submit_tip(&self, req: &SubmitTipRequest) -> Result<Option<String>> {
        let data = self
            .dispatch(Operation::SubmitTip, Params::from_request(req)?)
            .await?;
        decode_payload(data)
    }

    /// Returns the withdrawal id.
    ///
    /// POST /Api/SubmitWithdraw
    pub async fn submit_withdraw(&self, req: &SubmitWithdrawRequest) -> Result<Option<i64>> {
        let data = self
            .dispatch(Operation::SubmitWithdraw, Params::from_request(req)?)
            .await?;
        decode_payload(data)
    }

    /// POST /Api/SubmitTransfer
    pub async fn submit_transfer(&self, req: &SubmitTransferRequest) -> Result<Option<String>> {
        let data = self
            .dispatch(Operation::SubmitTransfer, Params::from_request(req)?)
            .await?;
        decode_payload(data)
    }
}
