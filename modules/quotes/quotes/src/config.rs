use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_TTL_SECS: u64 = 366 * 24 * 60 * 60;

/// Configuration for the `quotes` module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuotesConfig {
    #[serde(default = "default_min_author_length")]
    pub min_author_length: usize,
    #[serde(default = "default_max_length")]
    pub max_author_length: usize,
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
    #[serde(default = "default_max_length")]
    pub max_text_length: usize,
    /// Lifetime of a login session.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Upper bound for a single REST request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub password_hash: PasswordHashConfig,
}

/// Argon2id cost parameters used for new password hashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordHashConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            min_author_length: default_min_author_length(),
            max_author_length: default_max_length(),
            min_text_length: default_min_text_length(),
            max_text_length: default_max_length(),
            session_ttl_secs: default_session_ttl_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            password_hash: PasswordHashConfig::default(),
        }
    }
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl QuotesConfig {
    /// Reject bounds that could never be satisfied and out-of-range durations.
    ///
    /// # Errors
    /// Returns a description of the first inconsistent setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_author_length > self.max_author_length {
            return Err(format!(
                "min_author_length ({}) exceeds max_author_length ({})",
                self.min_author_length, self.max_author_length
            ));
        }
        if self.min_text_length > self.max_text_length {
            return Err(format!(
                "min_text_length ({}) exceeds max_text_length ({})",
                self.min_text_length, self.max_text_length
            ));
        }
        if self.session_ttl_secs == 0 || self.session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(format!(
                "session_ttl_secs must be between 1 and {MAX_SESSION_TTL_SECS}, got {}",
                self.session_ttl_secs
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".to_owned());
        }
        Ok(())
    }

    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            min_author_length: self.min_author_length,
            max_author_length: self.max_author_length,
            min_text_length: self.min_text_length,
            max_text_length: self.max_text_length,
        }
    }
}

fn default_min_author_length() -> usize {
    3
}

fn default_min_text_length() -> usize {
    10
}

fn default_max_length() -> usize {
    300
}

fn default_session_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_request_timeout_secs() -> u64 {
    30
}

// argon2 crate defaults (OWASP minimum for Argon2id)
fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_defaults() {
        let cfg = QuotesConfig::default();
        assert_eq!(cfg.service_config(), ServiceConfig::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: QuotesConfig =
            serde_json::from_str(r#"{"session_ttl_secs": 60, "password_hash": {"iterations": 3}}"#)
                .unwrap();
        assert_eq!(cfg.session_ttl(), Duration::from_secs(60));
        assert_eq!(cfg.min_text_length, 10);
        assert_eq!(cfg.password_hash.iterations, 3);
        assert_eq!(cfg.password_hash.memory_kib, 19 * 1024);
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let cfg = QuotesConfig {
            min_text_length: 500,
            ..QuotesConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("min_text_length"));
    }

    #[test]
    fn validate_rejects_zero_ttl() {
        let cfg = QuotesConfig {
            session_ttl_secs: 0,
            ..QuotesConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_caps_session_ttl() {
        let at_cap = QuotesConfig {
            session_ttl_secs: MAX_SESSION_TTL_SECS,
            ..QuotesConfig::default()
        };
        assert!(at_cap.validate().is_ok());

        let huge = QuotesConfig {
            session_ttl_secs: 1_000_000_000_000,
            ..QuotesConfig::default()
        };
        assert!(huge.validate().unwrap_err().contains("session_ttl_secs"));
    }

    #[test]
    fn validate_rejects_zero_request_timeout() {
        let cfg = QuotesConfig {
            request_timeout_secs: 0,
            ..QuotesConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("request_timeout_secs"));
    }
}
