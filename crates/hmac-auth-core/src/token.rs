//! Wire-format credentials.
//!
//! A credential travels as `<timestamp>.<hex-mac>`, for example
//! `1700000000.dee498c4...36d9`. The timestamp is Unix seconds in signed
//! base 10 and the MAC is hex in either case.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};

use crate::crypto::{compute_mac, compute_mac_hex};
use crate::error::ParseError;

/// A decoded request credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// The instant the client claims to have signed at (second resolution).
    pub timestamp: DateTime<Utc>,
    /// The raw MAC bytes supplied by the client.
    pub mac: Vec<u8>,
}

impl Credential {
    /// Sign `timestamp` with `key`, producing a credential a validator holding
    /// the same key will accept.
    ///
    /// Sub-second precision is dropped: the credential carries whole seconds
    /// only, exactly as it does on the wire.
    #[must_use]
    pub fn sign(key: &[u8], timestamp: DateTime<Utc>) -> Self {
        let timestamp = timestamp.trunc_subsecs(0);
        Self {
            timestamp,
            mac: compute_mac(key, timestamp.timestamp()).to_vec(),
        }
    }

    /// The credential's timestamp as Unix seconds.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }
}

// The MAC is secret-derived; keep it out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("timestamp", &self.unix_seconds())
            .field("mac", &format_args!("<{} bytes>", self.mac.len()))
            .finish()
    }
}

/// Encodes the credential in wire format, lowercase hex.
impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.unix_seconds(), hex::encode(&self.mac))
    }
}

impl FromStr for Credential {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Decode a wire-format credential.
///
/// # Errors
///
/// - [`ParseError::MalformedToken`] unless the value splits into exactly two
///   fields on `.` with a non-empty first field
/// - [`ParseError::InvalidTimestamp`] if the first field is not a signed
///   base-10 `i64` representable as a date
/// - [`ParseError::EmptyMac`] if the second field is empty
/// - [`ParseError::InvalidHexEncoding`] if the second field is not hex
pub fn parse(raw: &str) -> Result<Credential, ParseError> {
    let mut fields = raw.split('.');
    let (Some(ts), Some(hex_mac), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseError::MalformedToken);
    };

    if ts.is_empty() {
        return Err(ParseError::MalformedToken);
    }

    let seconds = ts
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidTimestamp(ts.to_string()))?;
    let timestamp = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| ParseError::InvalidTimestamp(ts.to_string()))?;

    if hex_mac.is_empty() {
        return Err(ParseError::EmptyMac);
    }

    let mac = hex::decode(hex_mac).map_err(|_| ParseError::InvalidHexEncoding)?;

    Ok(Credential { timestamp, mac })
}

/// Produce the wire token for `timestamp` (Unix seconds) under `key`.
#[must_use]
pub fn sign(key: &[u8], timestamp: i64) -> String {
    format!("{timestamp}.{}", compute_mac_hex(key, timestamp))
}
