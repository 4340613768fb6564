//! HMAC-SHA256 primitives for request credentials.
//!
//! The signed message is the decimal ASCII form of a Unix timestamp in
//! seconds: signed, base 10, no padding and no separators.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::{Choice, ConstantTimeEq};

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of an HMAC-SHA256 tag.
pub const MAC_LEN: usize = 32;

/// Compute HMAC-SHA256 over the decimal form of `timestamp`.
///
/// # Panics
///
/// Never in practice: HMAC-SHA256 accepts keys of any size per RFC 2104.
#[must_use]
pub fn compute_mac(key: &[u8], timestamp: i64) -> [u8; MAC_LEN] {
    // INVARIANT: `new_from_slice` only fails for fixed-size-key MACs.
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key size");
    mac.update(timestamp.to_string().as_bytes());

    let mut out = [0u8; MAC_LEN];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/// Compute the MAC for `timestamp` and return it hex-encoded (64 characters).
#[must_use]
pub fn compute_mac_hex(key: &[u8], timestamp: i64) -> String {
    hex::encode(compute_mac(key, timestamp))
}

/// Constant-time byte comparison.
///
/// Runtime does not depend on the position of the first differing byte.
/// Slices of different lengths compare unequal; length is not secret.
/// The result stays a [`Choice`] so callers can combine several comparisons
/// without branching.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> Choice {
    a.ct_eq(b)
}
