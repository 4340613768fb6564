//! Service configuration.

use std::str::FromStr;

use axum::http::HeaderName;
use chrono::TimeDelta;

use hmac_auth_core::{KeyPolicy, KeySet, DEFAULT_SKEW};

use crate::error::ConfigError;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:5000").
    pub listen_addr: String,

    /// Shared secrets from `HMAC_KEYS`. Required.
    pub hmac_keys: KeySet,

    /// Allowed clock skew (default: 10 minutes).
    pub allowed_skew: TimeDelta,

    /// Header carrying the credential (default: `Request-Hmac`).
    pub header_name: HeaderName,

    /// Which configured keys may sign requests (default: any).
    pub key_policy: KeyPolicy,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Configuration with the given keys and every other setting defaulted.
    #[must_use]
    pub fn new(hmac_keys: KeySet) -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".into(),
            hmac_keys,
            allowed_skew: DEFAULT_SKEW,
            header_name: HeaderName::from_static("request-hmac"),
            key_policy: KeyPolicy::default(),
            max_body_bytes: 1024 * 1024, // 1MB
            request_timeout_seconds: 30,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails if `HMAC_KEYS` is unset or empty, or if any other variable is
    /// set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ServiceConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let keys = lookup("HMAC_KEYS").unwrap_or_default();
        let mut config = Self::new(KeySet::parse(&keys)?);

        if let Some(addr) = lookup("LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(seconds) = parse_var::<i64>(&lookup, "HMAC_ALLOWED_SKEW_SECONDS")? {
            config.allowed_skew = TimeDelta::try_seconds(seconds)
                .filter(|skew| *skew >= TimeDelta::zero())
                .ok_or_else(|| ConfigError::Invalid {
                    name: "HMAC_ALLOWED_SKEW_SECONDS",
                    message: format!("{seconds} is not a usable number of seconds"),
                })?;
        }
        if let Some(header) = lookup("HMAC_HEADER") {
            config.header_name =
                HeaderName::from_str(header.trim()).map_err(|e| ConfigError::Invalid {
                    name: "HMAC_HEADER",
                    message: e.to_string(),
                })?;
        }
        if let Some(policy) = lookup("HMAC_KEY_POLICY") {
            config.key_policy = policy.parse().map_err(|message| ConfigError::Invalid {
                name: "HMAC_KEY_POLICY",
                message,
            })?;
        }
        if let Some(bytes) = parse_var(&lookup, "MAX_BODY_BYTES")? {
            config.max_body_bytes = bytes;
        }
        if let Some(seconds) = parse_var(&lookup, "REQUEST_TIMEOUT_SECONDS")? {
            config.request_timeout_seconds = seconds;
        }

        Ok(config)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Invalid {
            name,
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use hmac_auth_core::KeySetError;

    fn load(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServiceConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn missing_keys_is_fatal() {
        assert!(matches!(
            load(&[]),
            Err(ConfigError::MissingKeys(KeySetError::MissingKeys))
        ));
        assert!(matches!(
            load(&[("HMAC_KEYS", "")]),
            Err(ConfigError::MissingKeys(_))
        ));
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[("HMAC_KEYS", "deadbeef")]).unwrap();
        assert_eq!(config.hmac_keys.len(), 1);
        assert_eq!(config.allowed_skew, TimeDelta::minutes(10));
        assert_eq!(config.header_name.as_str(), "request-hmac");
        assert_eq!(config.key_policy, KeyPolicy::AnyKey);
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
    }

    #[test]
    fn overrides_apply() {
        let config = load(&[
            ("HMAC_KEYS", "a,b"),
            ("HMAC_ALLOWED_SKEW_SECONDS", "30"),
            ("HMAC_HEADER", "X-Signature"),
            ("HMAC_KEY_POLICY", "first"),
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
        ])
        .unwrap();
        assert_eq!(config.hmac_keys.len(), 2);
        assert_eq!(config.allowed_skew, TimeDelta::seconds(30));
        assert_eq!(config.header_name.as_str(), "x-signature");
        assert_eq!(config.key_policy, KeyPolicy::PrimaryOnly);
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.request_timeout_seconds, 5);
    }

    fn rejected_var(name: &str, value: &str) -> Option<&'static str> {
        match load(&[("HMAC_KEYS", "a"), (name, value)]) {
            Err(ConfigError::Invalid { name, .. }) => Some(name),
            _ => None,
        }
    }

    #[test]
    fn bad_values_are_rejected() {
        for (name, value) in [
            ("HMAC_ALLOWED_SKEW_SECONDS", "ten"),
            ("HMAC_ALLOWED_SKEW_SECONDS", "-1"),
            ("HMAC_HEADER", "bad header"),
            ("HMAC_KEY_POLICY", "all"),
        ] {
            assert_eq!(rejected_var(name, value), Some(name), "{name}={value}");
        }
    }
}
