/*
[INPUT]:  Market labels
[OUTPUT]: Market data (currencies, pairs, tickers, history, order books)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::response::decode_payload;
use crate::http::{CryptopiaClient, Result};
use crate::types::{
    Currency, Market, MarketHistory, MarketOrderGroup, MarketOrders, Operation, Params, TradePair,
};

impl CryptopiaClient {
    /// GET /Api/GetCurrencies/
    pub async fn get_currencies(&self) -> Result<Option<Vec<Currency>>> {
        let data = self.dispatch(Operation::GetCurrencies, Params::new()).await?;
        decode_payload(data)
    }

    /// GET /Api/GetTradePairs/
    pub async fn get_trade_pairs(&self) -> Result<Option<Vec<TradePair>>> {
        let data = self.dispatch(Operation::GetTradePairs, Params::new()).await?;
        decode_payload(data)
    }

    /// GET /Api/GetMarkets/
    pub async fn get_markets(&self) -> Result<Option<Vec<Market>>> {
        let data = self.dispatch(Operation::GetMarkets, Params::new()).await?;
        decode_payload(data)
    }

    /// GET /Api/GetMarket/{market}
    ///
    /// `market` is a label such as `DOT_BTC` or a trade pair id.
    pub async fn get_market(&self, market: &str) -> Result<Option<Market>> {
        let params = Params::new().with("market", market);
        let data = self.dispatch(Operation::GetMarket, params).await?;
        decode_payload(data)
    }

    /// GET /Api/GetMarketHistory/{market}
    pub async fn get_market_history(&self, market: &str) -> Result<Option<Vec<MarketHistory>>> {
        let params = Params::new().with("market", market);
        let data = self.dispatch(Operation::GetMarketHistory, params).await?;
        decode_payload(data)
    }

    /// GET /Api/GetMarketOrders/{market}
    pub async fn get_market_orders(&self, market: &str) -> Result<Option<MarketOrders>> {
        let params = Params::new().with("market", market);
        let data = self.dispatch(Operation::GetMarketOrders, params).await?;
        decode_payload(data)
    }

    /// GET /Api/GetMarketOrderGroups/{markets}
    ///
    /// Several markets are joined with `-`, e.g. `DOT_BTC-DOGE_BTC`.
    pub async fn get_market_order_groups(
        &self,
        markets: &str,
    ) -> Result<Option<Vec<MarketOrderGroup>>> {
        let params = Params::new().with("markets", markets);
        let data = self.dispatch(Operation::GetMarketOrderGroups, params).await?;
        decode_payload(data)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, CryptopiaClient};
    use crate::types::{MarketOrder, TradeType};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CryptopiaClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        CryptopiaClient::with_config(config).expect("client init")
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("decimal")
    }

    #[tokio::test]
    async fn test_get_currencies() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "Success": true,
            "Message": null,
            "Data": [
                {
                    "Id": 1,
                    "Name": "Bitcoin",
                    "Symbol": "BTC",
                    "Algorithm": "sha256",
                    "WithdrawFee": 0.001,
                    "MinWithdraw": 0.002,
                    "MinBaseTrade": 0.00005,
                    "IsTipEnabled": false,
                    "MinTip": 0.0001,
                    "DepositConfirmations": 6,
                    "Status": "OK",
                    "StatusMessage": "",
                    "ListingStatus": "Active"
                }
            ],
            "Error": null
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/Api/GetCurrencies/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let currencies = client_for(&server)
            .get_currencies()
            .await
            .expect("get_currencies failed")
            .expect("payload");

        assert_eq!(currencies.len(), 1);
        assert_eq!(currencies[0].symbol, "BTC");
        assert_eq!(currencies[0].withdraw_fee, dec("0.001"));
        assert_eq!(currencies[0].deposit_confirmations, 6);
    }

    #[tokio::test]
    async fn test_get_trade_pairs() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "Success": true,
            "Message": null,
            "Data": [
                {
                    "Id": 100,
                    "Label": "DOT/BTC",
                    "Currency": "Dotcoin",
                    "Symbol": "DOT",
                    "BaseCurrency": "Bitcoin",
                    "BaseSymbol": "BTC",
                    "Status": "OK",
                    "StatusMessage": null,
                    "TradeFee": 0.2,
                    "MinimumTrade": 0.00000001,
                    "MaximumTrade": 100000000.0,
                    "MinimumBaseTrade": 0.00005,
                    "MaximumBaseTrade": 100000000.0,
                    "MinimumPrice": 0.00000001,
                    "MaximumPrice": 100000000.0
                }
            ],
            "Error": null
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/Api/GetTradePairs/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let pairs = client_for(&server)
            .get_trade_pairs()
            .await
            .expect("get_trade_pairs failed")
            .expect("payload");

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].id, 100);
        assert_eq!(pairs[0].label, "DOT/BTC");
        assert_eq!(pairs[0].base_symbol, "BTC");
        assert_eq!(pairs[0].status_message, None);
        assert_eq!(pairs[0].trade_fee, dec("0.2"));
        assert_eq!(pairs[0].minimum_base_trade, dec("0.00005"));
    }

    #[tokio::test]
    async fn test_get_market() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "Success": true,
            "Message": null,
            "Data": {
                "TradePairId": 100,
                "Label": "DOT/BTC",
                "AskPrice": 0.00000034,
                "BidPrice": 0.00000033,
                "Low": 0.0000003,
                "High": 0.00000036,
                "Volume": 1000.5,
                "LastPrice": 0.00000034,
                "BuyVolume": 400,
                "SellVolume": 600.5,
                "Change": -1.5,
                "Open": 0.00000035,
                "Close": 0.00000034,
                "BaseVolume": 0.0003,
                "BuyBaseVolume": 0.0001,
                "SellBaseVolume": 0.0002
            },
            "Error": null
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/Api/GetMarket/DOT_BTC"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let market = client_for(&server)
            .get_market("DOT_BTC")
            .await
            .expect("get_market failed")
            .expect("payload");

        assert_eq!(market.trade_pair_id, 100);
        assert_eq!(market.label, "DOT/BTC");
        assert_eq!(market.change, dec("-1.5"));
        assert_eq!(market.buy_volume, dec("400"));
    }

    #[tokio::test]
    async fn test_get_market_orders() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "Success": true,
            "Data": {
                "Buy": [
                    {"TradePairId": 100, "Label": "DOT/BTC", "Price": 0.00000033, "Volume": 10, "Total": 0.0000033}
                ],
                "Sell": []
            }
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/Api/GetMarketOrders/DOT_BTC"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let orders = client_for(&server)
            .get_market_orders("DOT_BTC")
            .await
            .expect("get_market_orders failed")
            .expect("payload");

        assert_eq!(
            orders.buy,
            vec![MarketOrder {
                trade_pair_id: 100,
                label: "DOT/BTC".to_string(),
                price: dec("0.00000033"),
                volume: dec("10"),
                total: dec("0.0000033"),
            }]
        );
        assert!(orders.sell.is_empty());
    }

    #[tokio::test]
    async fn test_get_market_history() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "Success": true,
            "Data": [
                {
                    "TradePairId": 100,
                    "Label": "DOT/BTC",
                    "Type": "Sell",
                    "Price": 0.00000034,
                    "Amount": 50,
                    "Total": 0.000017,
                    "Timestamp": 1412527700
                }
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/Api/GetMarketHistory/DOT_BTC"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let history = client_for(&server)
            .get_market_history("DOT_BTC")
            .await
            .expect("get_market_history failed")
            .expect("payload");

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].trade_type, TradeType::Sell);
        assert_eq!(history[0].timestamp, 1_412_527_700);
    }

    #[tokio::test]
    async fn test_get_market_order_groups_path() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/Api/GetMarketOrderGroups/DOT_BTC-DOGE_BTC"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"Success": true, "Data": []}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let groups = client_for(&server)
            .get_market_order_groups("DOT_BTC-DOGE_BTC")
            .await
            .expect("get_market_order_groups failed");

        assert_eq!(groups, Some(vec![]));
    }
}
