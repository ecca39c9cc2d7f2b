//! Integration tests for the Bittrex REST API client.
//!
//! These tests verify deserialization of API record types and client
//! construction. Live tests are `#[ignore]` because they require network
//! access and credentials (`BITTREX_API_KEY` / `BITTREX_API_SECRET`,
//! `.env` honored).
//!
//! Run live tests with:
//! ```bash
//! cargo test --test api_integration -- --ignored
//! ```

use bittrex_sdk::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// =============================================================================
// Record decode tests
// =============================================================================

mod market_records {
    use super::*;

    #[test]
    fn markets_payload_decodes() {
        let json = r#"[
            {
                "MarketCurrency": "LTC",
                "BaseCurrency": "BTC",
                "MarketCurrencyLong": "Litecoin",
                "BaseCurrencyLong": "Bitcoin",
                "MinTradeSize": 0.00000001,
                "MarketName": "BTC-LTC",
                "IsActive": true,
                "Created": "2014-02-13T00:00:00"
            },
            {
                "MarketCurrency": "DOGE",
                "BaseCurrency": "BTC",
                "MarketCurrencyLong": "Dogecoin",
                "BaseCurrencyLong": "Bitcoin",
                "MinTradeSize": 100.0,
                "MarketName": "BTC-DOGE",
                "IsActive": false,
                "Created": "2014-02-13T00:00:00"
            }
        ]"#;

        let markets: Vec<Market> = serde_json::from_str(json).unwrap();
        assert_eq!(markets.len(), 2);
        assert_eq!(markets[0].min_trade_size, dec("0.00000001"));
        assert!(!markets[1].is_active);
    }

    #[test]
    fn currency_payload_decodes() {
        let json = r#"{
            "Currency": "BTC",
            "CurrencyLong": "Bitcoin",
            "MinConfirmation": 2,
            "TxFee": 0.00020000,
            "IsActive": true,
            "CoinType": "BITCOIN",
            "BaseAddress": null
        }"#;

        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.tx_fee, dec("0.0002"));
        assert!(currency.base_address.is_none());
    }

    #[test]
    fn market_summary_array_first_element() {
        // The singular endpoint answers with a one-element array.
        let json = r#"[
            {
                "MarketName": "BTC-LTC",
                "High": 0.01350000,
                "Low": 0.01200000,
                "Volume": 3833.97619253,
                "Last": 0.01349998,
                "BaseVolume": 47.03987026,
                "TimeStamp": "2014-07-09T07:19:30.15",
                "Bid": 0.01271001,
                "Ask": 0.01291100,
                "OpenBuyOrders": 45,
                "OpenSellOrders": 45,
                "PrevDay": 0.01229501,
                "Created": "2014-03-20T06:00:00",
                "DisplayMarketName": null
            }
        ]"#;

        let mut summaries: Vec<MarketSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(summaries.len(), 1);

        let summary = summaries.swap_remove(0);
        assert_eq!(summary.market_name, "BTC-LTC");
        assert_eq!(summary.prev_day, dec("0.01229501"));
    }

    #[test]
    fn market_history_decodes_sides() {
        let json = r#"[
            {
                "Id": 319435,
                "TimeStamp": "2014-07-09T03:21:20.08",
                "Quantity": 0.30802438,
                "Price": 0.01263400,
                "Total": 0.00389158,
                "FillType": "FILL",
                "OrderType": "BUY"
            },
            {
                "Id": 319436,
                "TimeStamp": "2014-07-09T03:21:21.0",
                "Quantity": 0.10000000,
                "Price": 0.01263400,
                "Total": 0.00126340,
                "FillType": "PARTIAL_FILL",
                "OrderType": "SELL"
            }
        ]"#;

        let trades: Vec<MarketTrade> = serde_json::from_str(json).unwrap();
        assert_eq!(trades[0].order_type, OrderSide::Buy);
        assert_eq!(trades[1].fill_type, FillType::PartialFill);
    }
}

mod orderbook_records {
    use super::*;

    #[test]
    fn composite_book_with_empty_sell_side() {
        let json = r#"{
            "buy": [
                {"Quantity": 12.37000000, "Rate": 0.02525000},
                {"Quantity": 32.55412402, "Rate": 0.02540000}
            ],
            "sell": []
        }"#;

        let book: OrderBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.buy.len(), 2);
        assert_eq!(book.buy[1].quantity, dec("32.55412402"));
        assert!(book.sell.is_empty());
    }

    #[test]
    fn single_side_is_a_bare_array() {
        let json = r#"[{"Quantity": 12.37000000, "Rate": 0.02525000}]"#;

        let side: Vec<OrderBookEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(side[0].rate, dec("0.02525"));
    }
}

mod account_records {
    use super::*;

    #[test]
    fn balances_decode_with_mixed_nulls() {
        let json = r#"[
            {
                "Currency": "BTC",
                "Balance": "1.50000000",
                "Available": "1.00000000",
                "Pending": "0.50000000",
                "CryptoAddress": "1MacMr6715hjds342dXuLqXcju6fgwHA31"
            },
            {
                "Currency": "LTC",
                "Balance": 0.0,
                "Available": 0.0,
                "Pending": 0.0,
                "CryptoAddress": null
            }
        ]"#;

        let balances: Vec<Balance> = serde_json::from_str(json).unwrap();
        assert_eq!(balances[0].balance, dec("1.5"));
        assert!(balances[0].crypto_address.is_some());
        assert_eq!(balances[1].balance, Decimal::ZERO);
        assert!(balances[1].crypto_address.is_none());
    }

    #[test]
    fn deposit_address_decodes() {
        let json = r#"{"Currency": "VTC", "Address": "Vy5SKeKGXUHKS2WVpJ76HYuKAu3URastUo"}"#;
        let address: DepositAddress = serde_json::from_str(json).unwrap();
        assert_eq!(address.currency, "VTC");
    }

    #[test]
    fn withdrawal_confirmation_decodes() {
        let json = r#"{"uuid": "68b5a16c-92de-11e3-ba3b-425861b86ab6"}"#;
        let confirmation: WithdrawalConfirmation = serde_json::from_str(json).unwrap();
        assert_eq!(confirmation.uuid, "68b5a16c-92de-11e3-ba3b-425861b86ab6");
    }

    #[test]
    fn transaction_history_decodes() {
        let json = r#"[{
            "PaymentUuid": "b52c7a5c-90c6-4c6e-835c-e16df12708b1",
            "Currency": "BTC",
            "Amount": 17.00000000,
            "Address": "1DeaaFBdbB5nrHj87x3NHS4onvw1GPNyAu",
            "Opened": "2014-07-09T04:24:47.217",
            "Authorized": true,
            "PendingPayment": false,
            "TxCost": 0.00020000,
            "TxId": "3efd41b3a051433a888eed3ecc174c1d025a5e2b486eb418eaaec5efddda22de",
            "Canceled": false,
            "InvalidAddress": false
        }]"#;

        let history: Vec<Transaction> = serde_json::from_str(json).unwrap();
        assert_eq!(history[0].amount, dec("17"));
        assert!(history[0].tx_id.is_some());
    }
}

mod order_records {
    use super::*;

    #[test]
    fn open_orders_decode() {
        let json = r#"[{
            "Uuid": null,
            "OrderUuid": "09aa5bb6-8232-41aa-9b78-a5a1093e0211",
            "Exchange": "BTC-LTC",
            "OrderType": "LIMIT_SELL",
            "Quantity": 5.00000000,
            "QuantityRemaining": 5.00000000,
            "Limit": 2.00000000,
            "CommissionPaid": 0.00000000,
            "Price": 0.00000000,
            "PricePerUnit": null,
            "Opened": "2014-07-09T03:55:48.77",
            "Closed": null,
            "CancelInitiated": false,
            "ImmediateOrCancel": false,
            "IsConditional": false,
            "Condition": null,
            "ConditionTarget": null
        }]"#;

        let orders: Vec<OpenOrder> = serde_json::from_str(json).unwrap();
        assert_eq!(orders[0].order_type, OrderType::LimitSell);
        assert_eq!(orders[0].quantity_remaining, dec("5"));
    }

    #[test]
    fn order_result_decodes() {
        let json = r#"{"uuid": "e606d53c-8d70-11e3-94b5-425861b86ab6"}"#;
        let result: OrderResult = serde_json::from_str(json).unwrap();
        assert!(!result.uuid.is_empty());
    }
}

// =============================================================================
// Client construction
// =============================================================================

mod construction {
    use super::*;

    #[test]
    fn builder_rejects_missing_credentials() {
        assert!(matches!(
            BittrexClient::builder().build(),
            Err(BittrexError::Config(_))
        ));
    }

    #[test]
    fn builder_defaults_to_v1_1() {
        // Default version is part of the public contract.
        assert_eq!(ApiVersion::default(), ApiVersion::V1_1);
    }

    #[test]
    fn builder_accepts_host_override_and_version() {
        let client = BittrexClient::builder()
            .host("https://staging.example.com")
            .api_version(ApiVersion::V1_0)
            .key("k")
            .secret("s")
            .build();
        assert!(client.is_ok());
    }
}

// =============================================================================
// Live tests (network + credentials required)
// =============================================================================

mod live {
    use super::*;

    fn live_client() -> BittrexClient {
        let credentials = Credentials::from_env().expect("credentials in env");
        BittrexClient::builder()
            .credentials(credentials)
            .build()
            .expect("client should build")
    }

    #[tokio::test]
    #[ignore]
    async fn fetches_markets() {
        let markets = live_client().markets().list().await.unwrap();
        assert!(markets.iter().any(|m| m.market_name == "BTC-LTC"));
    }

    #[tokio::test]
    #[ignore]
    async fn fetches_ticker_and_summary() {
        let client = live_client();

        let ticker = client.markets().ticker("BTC-LTC").await.unwrap();
        assert!(ticker.bid > Decimal::ZERO);

        let summary = client.markets().summary("BTC-LTC").await.unwrap();
        assert_eq!(summary.market_name, "BTC-LTC");
    }

    #[tokio::test]
    #[ignore]
    async fn fetches_order_book_both_sides() {
        let book = live_client()
            .order_books()
            .get("BTC-LTC", BookSide::Both, Some(10))
            .await
            .unwrap();
        assert!(!book.buy.is_empty());
        assert!(!book.sell.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn unknown_market_surfaces_api_error() {
        let err = live_client()
            .markets()
            .ticker("NOT-AMARKET")
            .await
            .unwrap_err();
        assert!(matches!(err, BittrexError::Api(_)));
    }

    #[tokio::test]
    #[ignore]
    async fn fetches_balances() {
        let balances = live_client().account().balances().await.unwrap();
        for balance in balances {
            assert!(balance.balance >= Decimal::ZERO);
        }
    }
}
