//! Account sub-client — balances, addresses, withdrawals, history.

use crate::client::BittrexClient;
use crate::domain::account::{Balance, DepositAddress, Transaction, WithdrawalConfirmation};
use crate::error::BittrexError;
use rust_decimal::Decimal;

/// Sub-client for account operations.
pub struct Account<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl Account<'_> {
    /// Balances for every currency the account has touched.
    pub async fn balances(&self) -> Result<Vec<Balance>, BittrexError> {
        self.client.http.get_balances().await
    }

    /// Balance for one currency.
    pub async fn balance(&self, currency: &str) -> Result<Balance, BittrexError> {
        self.client.http.get_balance(currency).await
    }

    /// Deposit address for one currency.
    pub async fn deposit_address(&self, currency: &str) -> Result<DepositAddress, BittrexError> {
        self.client.http.get_deposit_address(currency).await
    }

    /// Request a withdrawal. `payment_id` is for currencies that require a
    /// memo/tag; it is omitted from the request entirely when `None`.
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> Result<WithdrawalConfirmation, BittrexError> {
        self.client
            .http
            .withdraw(currency, quantity, address, payment_id)
            .await
    }

    /// Withdrawal history, optionally filtered to one currency.
    pub async fn withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<Transaction>, BittrexError> {
        self.client.http.get_withdrawal_history(currency).await
    }

    /// Deposit history, optionally filtered to one currency.
    pub async fn deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<Transaction>, BittrexError> {
        self.client.http.get_deposit_history(currency).await
    }
}
