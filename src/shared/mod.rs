//! Shared helpers used across all domains.

pub mod serde_util;
