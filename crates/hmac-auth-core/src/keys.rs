//! Shared-secret key set.

use std::fmt;

use crate::error::KeySetError;

/// A single shared secret. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap raw key material.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl From<&str> for SecretKey {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<String> for SecretKey {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

/// An ordered, non-empty set of shared secrets.
///
/// The first key is the primary one; later keys exist so that a rotated-out
/// key keeps validating while clients migrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    keys: Vec<SecretKey>,
}

impl KeySet {
    /// Build a key set from explicit keys.
    ///
    /// # Errors
    ///
    /// Returns [`KeySetError::MissingKeys`] if `keys` yields nothing.
    pub fn new<I, K>(keys: I) -> Result<Self, KeySetError>
    where
        I: IntoIterator<Item = K>,
        K: Into<SecretKey>,
    {
        let keys: Vec<SecretKey> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(KeySetError::MissingKeys);
        }
        Ok(Self { keys })
    }

    /// Parse a comma-separated list of secrets.
    ///
    /// Entries are trimmed and empty entries are skipped, so `"a, ,b"` holds
    /// two keys.
    ///
    /// # Errors
    ///
    /// Returns [`KeySetError::MissingKeys`] if no non-empty entry remains.
    pub fn parse(source: &str) -> Result<Self, KeySetError> {
        Self::new(
            source
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty()),
        )
    }

    /// The primary key.
    #[must_use]
    pub fn primary(&self) -> &SecretKey {
        &self.keys[0]
    }

    /// All keys in configured order.
    #[must_use]
    pub fn as_slice(&self) -> &[SecretKey] {
        &self.keys
    }

    /// Number of configured keys (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; a key set cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_keys_in_order() {
        let keys = KeySet::parse("deadbeef, rotated ,").unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.primary().as_bytes(), b"deadbeef");
        let all = keys.as_slice();
        assert_eq!(all[0].as_bytes(), b"deadbeef");
        assert_eq!(all[1].as_bytes(), b"rotated");
    }

    #[test]
    fn empty_source_is_missing_keys() {
        assert_eq!(KeySet::parse(""), Err(KeySetError::MissingKeys));
        assert_eq!(KeySet::parse(" , ,"), Err(KeySetError::MissingKeys));
        assert_eq!(
            KeySet::new(Vec::<SecretKey>::new()),
            Err(KeySetError::MissingKeys)
        );
    }

    #[test]
    fn debug_redacts_secrets() {
        let keys = KeySet::parse("deadbeef").unwrap();
        let debug = format!("{keys:?}");
        assert!(!debug.contains("deadbeef"));
        assert!(debug.contains("redacted"));
    }
}
