//! Order book: depth entries and the buy/sell composite.

pub mod client;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One resting level of the book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBookEntry {
    pub quantity: Decimal,
    pub rate: Decimal,
}

/// Both sides of the book. An empty side decodes to an empty vec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    pub buy: Vec<OrderBookEntry>,
    pub sell: Vec<OrderBookEntry>,
}

/// Which side of the book to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSide {
    Buy,
    Sell,
    Both,
}

impl BookSide {
    /// Side as it appears in the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            BookSide::Buy => "buy",
            BookSide::Sell => "sell",
            BookSide::Both => "both",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_decodes_both_sides_independently() {
        let json = r#"{
            "buy": [
                {"Quantity": 12.37, "Rate": 0.02525}
            ],
            "sell": []
        }"#;

        let book: OrderBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.buy.len(), 1);
        assert_eq!(book.buy[0].rate, Decimal::new(2525, 5));
        assert!(book.sell.is_empty());
    }

    #[test]
    fn side_query_values() {
        assert_eq!(BookSide::Buy.as_str(), "buy");
        assert_eq!(BookSide::Sell.as_str(), "sell");
        assert_eq!(BookSide::Both.as_str(), "both");
    }
}
