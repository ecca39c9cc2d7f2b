//! HMAC-SHA512 request signing.
//!
//! Bittrex authenticates GET requests with an `apisign` header: the
//! hex-encoded HMAC-SHA512 of the full request URL (query included),
//! keyed with the API secret.

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Sign a message and return the lowercase hex-encoded signature.
pub fn sign(secret: &str, message: &str) -> String {
    // HMAC accepts keys of any length, so this cannot fail.
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");

    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
