//! Credential validation: clock skew and MAC checks.

use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use subtle::{Choice, ConditionallySelectable};

use crate::crypto::{compute_mac, constant_time_eq};
use crate::error::{AuthError, ValidationError};
use crate::keys::{KeySet, SecretKey};
use crate::token::{parse, Credential};

/// Default tolerated distance between a credential's timestamp and now.
pub const DEFAULT_SKEW: TimeDelta = TimeDelta::minutes(10);

/// Which configured keys a credential may be signed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Accept a MAC from any configured key (supports rotation).
    #[default]
    AnyKey,
    /// Accept only the primary key.
    PrimaryOnly,
}

impl FromStr for KeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::AnyKey),
            "first" | "primary" => Ok(Self::PrimaryOnly),
            other => Err(format!("unknown key policy {other:?}, expected `any` or `first`")),
        }
    }
}

/// A successfully authenticated credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authorized {
    /// The credential's timestamp.
    pub timestamp: DateTime<Utc>,
    /// Position in the key set of the key that produced the MAC.
    pub key_index: usize,
}

/// Check one credential against one key.
///
/// Both the skew and the MAC are evaluated before returning, so the time
/// taken does not reveal which check failed. When both fail the skew error
/// wins.
///
/// # Errors
///
/// - [`ValidationError::TimestampOutOfRange`] if the timestamp is outside
///   `[now - skew, now + skew]`
/// - [`ValidationError::MacMismatch`] otherwise, if the MAC differs
pub fn validate(
    credential: &Credential,
    key: &[u8],
    now: DateTime<Utc>,
    skew: TimeDelta,
) -> Result<(), ValidationError> {
    let in_window = within_skew(credential.timestamp, now, skew);
    let mac_ok = mac_matches(credential, key);
    verdict(credential, in_window, bool::from(mac_ok))
}

/// Validates credentials against an immutable key set.
///
/// Cheap to share: wrap in an `Arc` and call from any number of request
/// handlers concurrently.
#[derive(Debug, Clone)]
pub struct Validator {
    keys: KeySet,
    skew: TimeDelta,
    policy: KeyPolicy,
}

impl Validator {
    /// Create a validator with the default skew and [`KeyPolicy::AnyKey`].
    #[must_use]
    pub fn new(keys: KeySet) -> Self {
        Self {
            keys,
            skew: DEFAULT_SKEW,
            policy: KeyPolicy::default(),
        }
    }

    /// Set the allowed clock skew.
    #[must_use]
    pub fn with_skew(mut self, skew: TimeDelta) -> Self {
        self.skew = skew.abs();
        self
    }

    /// Set the key policy.
    #[must_use]
    pub fn with_policy(mut self, policy: KeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured skew.
    #[must_use]
    pub fn skew(&self) -> TimeDelta {
        self.skew
    }

    /// The configured key policy.
    #[must_use]
    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Check a parsed credential at `now`.
    ///
    /// Under [`KeyPolicy::AnyKey`] every key is tried, even after a match, and
    /// the matching index is selected without branching, so timing does not
    /// reveal which key matched.
    ///
    /// # Errors
    ///
    /// See [`validate`].
    pub fn validate(
        &self,
        credential: &Credential,
        now: DateTime<Utc>,
    ) -> Result<Authorized, ValidationError> {
        let in_window = within_skew(credential.timestamp, now, self.skew);

        let mut matched = Choice::from(0);
        let mut key_index = 0u64;
        for (index, key) in (0u64..).zip(self.candidate_keys()) {
            let hit = mac_matches(credential, key.as_bytes());
            key_index.conditional_assign(&index, hit & !matched);
            matched |= hit;
        }

        verdict(credential, in_window, bool::from(matched))?;
        Ok(Authorized {
            timestamp: credential.timestamp,
            key_index: usize::try_from(key_index).unwrap_or_default(),
        })
    }

    /// Authenticate a raw header value at `now`.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingCredential`] for `None`, otherwise the parse or
    /// validation failure.
    pub fn authenticate(
        &self,
        header_value: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Authorized, AuthError> {
        let raw = header_value.ok_or(AuthError::MissingCredential)?;
        let credential = parse(raw)?;
        Ok(self.validate(&credential, now)?)
    }

    fn candidate_keys(&self) -> &[SecretKey] {
        match self.policy {
            KeyPolicy::AnyKey => self.keys.as_slice(),
            KeyPolicy::PrimaryOnly => std::slice::from_ref(self.keys.primary()),
        }
    }
}

fn within_skew(timestamp: DateTime<Utc>, now: DateTime<Utc>, skew: TimeDelta) -> bool {
    let drift = timestamp.signed_duration_since(now);
    drift <= skew && drift >= -skew
}

fn mac_matches(credential: &Credential, key: &[u8]) -> Choice {
    let expected = compute_mac(key, credential.unix_seconds());
    constant_time_eq(&expected, &credential.mac)
}

fn verdict(credential: &Credential, in_window: bool, mac_ok: bool) -> Result<(), ValidationError> {
    if !in_window {
        return Err(ValidationError::TimestampOutOfRange {
            timestamp: credential.unix_seconds(),
        });
    }
    if !mac_ok {
        return Err(ValidationError::MacMismatch);
    }
    Ok(())
}
