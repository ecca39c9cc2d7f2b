//! Low-level signed HTTP client.

mod client;

pub use client::BittrexHttp;
