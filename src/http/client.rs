//! Low-level HTTP client — `BittrexHttp`.
//!
//! One method per API endpoint, returning typed records. Every call is a
//! signed GET: caller parameters (with unset options dropped), then
//! `apikey` and `nonce`, serialized as the query string; the `apisign`
//! header carries the HMAC-SHA512 of the exact URL that is sent.

use crate::auth::{signer, ApiVersion, Credentials};
use crate::domain::account::{Balance, DepositAddress, Transaction, WithdrawalConfirmation};
use crate::domain::market::{Currency, Market, MarketSummary, MarketTrade, Ticker};
use crate::domain::order::{OpenOrder, Order, OrderHistoryEntry, OrderResult};
use crate::domain::orderbook::{BookSide, OrderBook, OrderBookEntry};
use crate::error::{ApiError, BittrexError, RequestError, ResponseError};
use crate::network;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Request timeout for all API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The server's response envelope: `result` is only meaningful when
/// `success` is true.
#[derive(Deserialize)]
struct ApiEnvelope {
    success: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: serde_json::Value,
}

/// Low-level signed client for the Bittrex REST API.
pub struct BittrexHttp {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

impl BittrexHttp {
    pub fn new(host: &str, version: ApiVersion, credentials: Credentials) -> Self {
        Self {
            base_url: network::base_url(host, version),
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            credentials,
        }
    }

    // ── Public market data ───────────────────────────────────────────────

    pub async fn get_markets(&self) -> Result<Vec<Market>, BittrexError> {
        self.call("/public/getmarkets", &[]).await
    }

    pub async fn get_currencies(&self) -> Result<Vec<Currency>, BittrexError> {
        self.call("/public/getcurrencies", &[]).await
    }

    pub async fn get_ticker(&self, market: &str) -> Result<Ticker, BittrexError> {
        self.call("/public/getticker", &[("market", Some(market.to_string()))])
            .await
    }

    pub async fn get_market_summaries(&self) -> Result<Vec<MarketSummary>, BittrexError> {
        self.call("/public/getmarketsummaries", &[]).await
    }

    /// The singular endpoint still answers with a one-element array.
    pub async fn get_market_summary(
        &self,
        market: &str,
    ) -> Result<Vec<MarketSummary>, BittrexError> {
        self.call(
            "/public/getmarketsummary",
            &[("market", Some(market.to_string()))],
        )
        .await
    }

    /// Both sides of the book in one composite response (`type=both`).
    pub async fn get_order_book(
        &self,
        market: &str,
        depth: Option<u32>,
    ) -> Result<OrderBook, BittrexError> {
        self.call(
            "/public/getorderbook",
            &[
                ("market", Some(market.to_string())),
                ("type", Some(BookSide::Both.as_str().to_string())),
                ("depth", depth.map(|d| d.to_string())),
            ],
        )
        .await
    }

    /// One side of the book; the server answers with a bare array here.
    pub async fn get_order_book_side(
        &self,
        market: &str,
        side: BookSide,
        depth: Option<u32>,
    ) -> Result<Vec<OrderBookEntry>, BittrexError> {
        self.call(
            "/public/getorderbook",
            &[
                ("market", Some(market.to_string())),
                ("type", Some(side.as_str().to_string())),
                ("depth", depth.map(|d| d.to_string())),
            ],
        )
        .await
    }

    pub async fn get_market_history(&self, market: &str) -> Result<Vec<MarketTrade>, BittrexError> {
        self.call(
            "/account/getmarkethistory",
            &[("market", Some(market.to_string()))],
        )
        .await
    }

    // ── Trading ──────────────────────────────────────────────────────────

    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<OrderResult, BittrexError> {
        self.call(
            "/market/buylimit",
            &[
                ("market", Some(market.to_string())),
                ("quantity", Some(quantity.to_string())),
                ("rate", Some(rate.to_string())),
            ],
        )
        .await
    }

    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<OrderResult, BittrexError> {
        self.call(
            "/market/selllimit",
            &[
                ("market", Some(market.to_string())),
                ("quantity", Some(quantity.to_string())),
                ("rate", Some(rate.to_string())),
            ],
        )
        .await
    }

    pub async fn cancel(&self, uuid: &str) -> Result<(), BittrexError> {
        self.call("/market/cancel", &[("uuid", Some(uuid.to_string()))])
            .await
    }

    pub async fn get_open_orders(&self, market: &str) -> Result<Vec<OpenOrder>, BittrexError> {
        self.call(
            "/market/getopenorders",
            &[("market", Some(market.to_string()))],
        )
        .await
    }

    // ── Account ──────────────────────────────────────────────────────────

    pub async fn get_balances(&self) -> Result<Vec<Balance>, BittrexError> {
        self.call("/account/getbalances", &[]).await
    }

    pub async fn get_balance(&self, currency: &str) -> Result<Balance, BittrexError> {
        self.call(
            "/account/getbalance",
            &[("currency", Some(currency.to_string()))],
        )
        .await
    }

    pub async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> Result<DepositAddress, BittrexError> {
        self.call(
            "/account/getdepositaddress",
            &[("currency", Some(currency.to_string()))],
        )
        .await
    }

    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> Result<WithdrawalConfirmation, BittrexError> {
        self.call(
            "/account/withdraw",
            &[
                ("currency", Some(currency.to_string())),
                ("quantity", Some(quantity.to_string())),
                ("address", Some(address.to_string())),
                ("paymentid", payment_id.map(str::to_string)),
            ],
        )
        .await
    }

    pub async fn get_order(&self, uuid: &str) -> Result<Order, BittrexError> {
        self.call("/account/getorder", &[("uuid", Some(uuid.to_string()))])
            .await
    }

    pub async fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> Result<Vec<OrderHistoryEntry>, BittrexError> {
        self.call(
            "/account/getorderhistory",
            &[("market", market.map(str::to_string))],
        )
        .await
    }

    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<Transaction>, BittrexError> {
        self.call(
            "/account/getwithdrawalhistory",
            &[("currency", currency.map(str::to_string))],
        )
        .await
    }

    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<Transaction>, BittrexError> {
        self.call(
            "/account/getdeposithistory",
            &[("currency", currency.map(str::to_string))],
        )
        .await
    }

    // ── Internal dispatch ────────────────────────────────────────────────

    /// Build, sign and issue one GET request, then decode the envelope.
    ///
    /// `None`-valued parameters are dropped before serialization — they
    /// never appear in the query string in any form.
    async fn call<T: DeserializeOwned>(
        &self,
        pathname: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<T, BittrexError> {
        let url = format!("{}{}", self.base_url, pathname);
        let full_url = format!("{}?{}", url, self.signed_query(params));
        let signature = signer::sign(self.credentials.expose_secret(), &full_url);

        tracing::debug!(endpoint = pathname, "dispatching signed request");

        let response = self
            .client
            .get(&full_url)
            .header("apisign", signature)
            .send()
            .await
            .map_err(RequestError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(RequestError::Transport)?;

        if !status.is_success() {
            // Best effort: the error body is usually an envelope too.
            let message = serde_json::from_str::<ApiEnvelope>(&body)
                .map(|envelope| envelope.message)
                .unwrap_or_default();

            tracing::debug!(endpoint = pathname, status = status.as_u16(), "request failed");

            return Err(RequestError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                message,
            }
            .into());
        }

        decode_envelope(pathname, &body)
    }

    /// Merge caller parameters with `apikey` and `nonce` and serialize
    /// them in insertion order.
    fn signed_query(&self, params: &[(&str, Option<String>)]) -> String {
        let mut query: Vec<(&str, String)> = params
            .iter()
            .filter_map(|(key, value)| value.clone().map(|v| (*key, v)))
            .collect();

        query.push(("apikey", self.credentials.key().to_string()));
        query.push(("nonce", unix_time_secs().to_string()));

        serde_urlencoded::to_string(&query).expect("string pairs always serialize")
    }
}

fn unix_time_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

/// Decode a 2xx response body: unwrap the envelope, then decode `result`
/// into the endpoint's record type.
fn decode_envelope<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, BittrexError> {
    let envelope: ApiEnvelope =
        serde_json::from_str(body).map_err(|source| ResponseError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })?;

    if !envelope.success {
        return Err(ApiError {
            message: envelope.message,
        }
        .into());
    }

    serde_json::from_value(envelope.result).map_err(|source| {
        ResponseError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }
        .into()
    })
}

impl std::fmt::Debug for BittrexHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexHttp")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}
