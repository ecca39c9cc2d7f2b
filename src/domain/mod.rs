//! Domain modules, one vertical slice per API surface group.

pub mod account;
pub mod market;
pub mod order;
pub mod orderbook;
