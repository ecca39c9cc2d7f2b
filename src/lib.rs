//! # Bittrex SDK
//!
//! A typed Rust client for the Bittrex v1.0/v1.1 REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared serde helpers and domain records (typed wire structs)
//! 2. **Auth** — Credentials + HMAC-SHA512 request signing
//! 3. **HTTP** — `BittrexHttp`: signed dispatch + response-envelope decoding
//! 4. **High-Level Client** — `BittrexClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bittrex_sdk::prelude::*;
//!
//! let client = BittrexClient::builder()
//!     .key("api-key")
//!     .secret("api-secret")
//!     .build()?;
//!
//! let ticker = client.markets().ticker("BTC-LTC").await?;
//! let book = client.order_books().get("BTC-LTC", BookSide::Both, None).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared serde helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): records and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: API version, credentials, request signing.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Low-level signed HTTP client.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BittrexClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — market data
    pub use crate::domain::market::{
        Currency, FillType, Market, MarketSummary, MarketTrade, OrderSide, Ticker,
    };

    // Domain types — order book
    pub use crate::domain::orderbook::{BookSide, OrderBook, OrderBookEntry};

    // Domain types — trading
    pub use crate::domain::order::{OpenOrder, Order, OrderHistoryEntry, OrderResult, OrderType};

    // Domain types — account
    pub use crate::domain::account::{
        Balance, DepositAddress, Transaction, WithdrawalConfirmation,
    };

    // Auth
    pub use crate::auth::{ApiVersion, Credentials};

    // Errors
    pub use crate::error::{ApiError, BittrexError, ConfigError, RequestError, ResponseError};

    // Network
    pub use crate::network::DEFAULT_API_HOST;

    // High-level client + sub-clients
    pub use crate::client::{
        AccountClient, BittrexClient, BittrexClientBuilder, MarketsClient, OrderBooksClient,
        OrdersClient,
    };
}
