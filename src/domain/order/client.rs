//! Orders sub-client — trading operations.

use crate::client::BittrexClient;
use crate::domain::order::{OpenOrder, Order, OrderHistoryEntry, OrderResult};
use crate::error::BittrexError;
use rust_decimal::Decimal;

/// Sub-client for order placement and lookup.
pub struct Orders<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl Orders<'_> {
    /// Place a limit buy of `quantity` at `rate`.
    ///
    /// Both values go out in plain decimal notation, never through `f64`.
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<OrderResult, BittrexError> {
        self.client.http.buy_limit(market, quantity, rate).await
    }

    /// Place a limit sell of `quantity` at `rate`.
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> Result<OrderResult, BittrexError> {
        self.client.http.sell_limit(market, quantity, rate).await
    }

    /// Cancel an order by UUID.
    pub async fn cancel(&self, uuid: &str) -> Result<(), BittrexError> {
        self.client.http.cancel(uuid).await
    }

    /// Orders currently open on `market`.
    pub async fn open(&self, market: &str) -> Result<Vec<OpenOrder>, BittrexError> {
        self.client.http.get_open_orders(market).await
    }

    /// Fetch a single order by UUID.
    pub async fn get(&self, uuid: &str) -> Result<Order, BittrexError> {
        self.client.http.get_order(uuid).await
    }

    /// Order history, optionally filtered to one market.
    pub async fn history(
        &self,
        market: Option<&str>,
    ) -> Result<Vec<OrderHistoryEntry>, BittrexError> {
        self.client.http.get_order_history(market).await
    }
}
