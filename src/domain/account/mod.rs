//! Account: balances, deposit addresses, withdrawals, transfer history.

pub mod client;

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance of a single currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub currency: String,
    pub balance: Decimal,
    pub available: Decimal,
    pub pending: Decimal,
    pub crypto_address: Option<String>,
}

/// Deposit address for a currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DepositAddress {
    pub currency: String,
    pub address: String,
}

/// Acknowledgement of a requested withdrawal. Lowercase key on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalConfirmation {
    pub uuid: String,
}

/// A deposit or withdrawal from the transfer history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    pub payment_uuid: String,
    pub currency: String,
    pub amount: Decimal,
    pub address: String,
    #[serde(with = "serde_util::timestamp")]
    pub opened: DateTime<Utc>,
    pub authorized: bool,
    pub pending_payment: bool,
    pub tx_cost: Decimal,
    pub tx_id: Option<String>,
    pub canceled: bool,
    pub invalid_address: bool,
}
