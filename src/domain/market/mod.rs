//! Public market data: markets, currencies, tickers, summaries, trades.
//!
//! All records decode straight off the wire. Quantities and rates are
//! [`Decimal`] (the server sends both JSON numbers and numeric strings),
//! timestamps use the exchange's timezone-less format.

pub mod client;

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A listed market pair, e.g. `BTC-LTC`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    pub market_currency: String,
    pub base_currency: String,
    pub market_currency_long: String,
    pub base_currency_long: String,
    pub min_trade_size: Decimal,
    pub market_name: String,
    pub is_active: bool,
    #[serde(with = "serde_util::timestamp")]
    pub created: DateTime<Utc>,
}

/// A listed currency and its withdrawal fee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    pub currency: String,
    pub currency_long: String,
    pub min_confirmation: u32,
    pub tx_fee: Decimal,
    pub is_active: bool,
    pub coin_type: String,
    pub base_address: Option<String>,
}

/// Best bid/ask and last trade price for one market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Ticker {
    pub bid: Decimal,
    pub ask: Decimal,
    pub last: Decimal,
}

/// 24-hour rolling summary for one market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    pub market_name: String,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: Decimal,
    pub last: Decimal,
    pub base_volume: Decimal,
    #[serde(with = "serde_util::timestamp")]
    pub time_stamp: DateTime<Utc>,
    pub bid: Decimal,
    pub ask: Decimal,
    pub open_buy_orders: u32,
    pub open_sell_orders: u32,
    pub prev_day: Decimal,
    #[serde(with = "serde_util::timestamp")]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub display_market_name: Option<String>,
}

/// An executed public trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MarketTrade {
    pub id: u64,
    #[serde(with = "serde_util::timestamp")]
    pub time_stamp: DateTime<Utc>,
    pub quantity: Decimal,
    pub price: Decimal,
    pub total: Decimal,
    pub fill_type: FillType,
    pub order_type: OrderSide,
}

/// How a public trade was filled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FillType {
    #[serde(rename = "FILL")]
    Fill,
    #[serde(rename = "PARTIAL_FILL")]
    PartialFill,
}

/// Aggressor side of a public trade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderSide {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}
