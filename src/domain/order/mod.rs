//! Trading: order placement results, open orders, order lookups, history.

pub mod client;

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Acknowledgement of a placed order. This payload uses a lowercase key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderResult {
    pub uuid: String,
}

/// Limit order type on the v1 API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderType {
    #[serde(rename = "LIMIT_BUY")]
    LimitBuy,
    #[serde(rename = "LIMIT_SELL")]
    LimitSell,
}

/// An order currently resting on the book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    pub uuid: Option<String>,
    pub order_uuid: String,
    pub exchange: String,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub limit: Decimal,
    pub commission_paid: Decimal,
    pub price: Decimal,
    pub price_per_unit: Option<Decimal>,
    #[serde(with = "serde_util::timestamp")]
    pub opened: DateTime<Utc>,
    #[serde(default, with = "serde_util::opt_timestamp")]
    pub closed: Option<DateTime<Utc>>,
    pub cancel_initiated: bool,
    pub immediate_or_cancel: bool,
    pub is_conditional: bool,
    pub condition: Option<String>,
    pub condition_target: Option<Decimal>,
}

/// A single order fetched by UUID. Carries the full reservation and
/// commission breakdown the open-orders listing omits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub account_id: Option<String>,
    pub order_uuid: String,
    pub exchange: String,
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub limit: Decimal,
    pub reserved: Decimal,
    pub reserve_remaining: Decimal,
    pub commission_reserved: Decimal,
    pub commission_reserve_remaining: Decimal,
    pub commission_paid: Decimal,
    pub price: Decimal,
    pub price_per_unit: Option<Decimal>,
    #[serde(with = "serde_util::timestamp")]
    pub opened: DateTime<Utc>,
    #[serde(default, with = "serde_util::opt_timestamp")]
    pub closed: Option<DateTime<Utc>>,
    pub is_open: bool,
    pub sentinel: String,
    pub cancel_initiated: bool,
    pub immediate_or_cancel: bool,
    pub is_conditional: bool,
    pub condition: Option<String>,
    pub condition_target: Option<Decimal>,
}

/// A closed or cancelled order from the history listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OrderHistoryEntry {
    pub order_uuid: String,
    pub exchange: String,
    #[serde(with = "serde_util::timestamp")]
    pub time_stamp: DateTime<Utc>,
    pub order_type: OrderType,
    pub limit: Decimal,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub commission: Decimal,
    pub price: Decimal,
    pub price_per_unit: Option<Decimal>,
    pub is_conditional: bool,
    pub condition: Option<String>,
    pub condition_target: Option<Decimal>,
    pub immediate_or_cancel: bool,
}
