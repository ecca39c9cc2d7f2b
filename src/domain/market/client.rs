//! Markets sub-client — public market data.

use crate::client::BittrexClient;
use crate::domain::market::{Currency, Market, MarketSummary, MarketTrade, Ticker};
use crate::error::{BittrexError, ResponseError};

/// Sub-client for public market data.
pub struct Markets<'a> {
    pub(crate) client: &'a BittrexClient,
}

impl Markets<'_> {
    /// All listed markets.
    pub async fn list(&self) -> Result<Vec<Market>, BittrexError> {
        self.client.http.get_markets().await
    }

    /// All listed currencies.
    pub async fn currencies(&self) -> Result<Vec<Currency>, BittrexError> {
        self.client.http.get_currencies().await
    }

    /// Current bid/ask/last for one market.
    pub async fn ticker(&self, market: &str) -> Result<Ticker, BittrexError> {
        self.client.http.get_ticker(market).await
    }

    /// 24-hour summaries for every market.
    pub async fn summaries(&self) -> Result<Vec<MarketSummary>, BittrexError> {
        self.client.http.get_market_summaries().await
    }

    /// 24-hour summary for one market.
    ///
    /// The endpoint answers with a one-element array; this returns that
    /// single element.
    pub async fn summary(&self, market: &str) -> Result<MarketSummary, BittrexError> {
        let mut summaries = self.client.http.get_market_summary(market).await?;

        if summaries.is_empty() {
            return Err(ResponseError::EmptyResult {
                endpoint: "/public/getmarketsummary".to_string(),
            }
            .into());
        }
        Ok(summaries.swap_remove(0))
    }

    /// Recent public trades for one market.
    pub async fn history(&self, market: &str) -> Result<Vec<MarketTrade>, BittrexError> {
        self.client.http.get_market_history(market).await
    }
}
