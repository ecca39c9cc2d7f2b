//! Order books sub-client.

use crate::client::BittrexClient;
use crate::domain::orderbook::{BookSide, OrderBook};
use crate::error::BittrexError;

/// Sub-client for order book queries.
pub struct OrderBooks<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl OrderBooks<'_> {
    /// Fetch the book for `market`.
    ///
    /// For `BookSide::Both` the server answers with the `{buy, sell}`
    /// composite. For a single side it answers with a bare array, which is
    /// placed in the matching side of the returned [`OrderBook`] with the
    /// other side empty.
    pub async fn get(
        &self,
        market: &str,
        side: BookSide,
        depth: Option<u32>,
    ) -> Result<OrderBook, BittrexError> {
        match side {
            BookSide::Both => self.client.http.get_order_book(market, depth).await,
            BookSide::Buy => {
                let buy = self
                    .client
                    .http
                    .get_order_book_side(market, side, depth)
                    .await?;
                Ok(OrderBook { buy, sell: Vec::new() })
            }
            BookSide::Sell => {
                let sell = self
                    .client
                    .http
                    .get_order_book_side(market, side, depth)
                    .await?;
                Ok(OrderBook { buy: Vec::new(), sell })
            }
        }
    }
}
