// Database connection settings
//
// Passed into ConnectionProvider at construction instead of living in globals.
// Defaults are the classic `sa` / empty-password pair, pointed at a local file.

use serde::Deserialize;
use std::env;
use std::fmt;

pub const ENV_URL: &str = "MEMBER_DB_URL";
pub const ENV_USERNAME: &str = "MEMBER_DB_USERNAME";
pub const ENV_PASSWORD: &str = "MEMBER_DB_PASSWORD";

pub const DEFAULT_URL: &str = "jdbc.db";
pub const DEFAULT_USERNAME: &str = "sa";
pub const DEFAULT_PASSWORD: &str = "";

/// Where and as whom to connect.
///
/// `url` is a SQLite path or `file:` URI. Username and password identify the
/// session; the embedded backend does not authenticate them.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl DbConfig {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        DbConfig {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Defaults, overridden by `MEMBER_DB_URL` / `MEMBER_DB_USERNAME` / `MEMBER_DB_PASSWORD`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DbConfig::default();

        DbConfig {
            url: lookup(ENV_URL).unwrap_or(defaults.url),
            username: lookup(ENV_USERNAME).unwrap_or(defaults.username),
            password: lookup(ENV_PASSWORD).unwrap_or(defaults.password),
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new(DEFAULT_URL, DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

// Never print the password
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = DbConfig::default();

        assert_eq!(config.url, "jdbc.db");
        assert_eq!(config.username, "sa");
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_lookup_overrides_only_present_keys() {
        let vars: HashMap<&str, &str> = [
            (ENV_URL, "/var/lib/members.db"),
            (ENV_PASSWORD, "hunter2"),
        ]
        .into_iter()
        .collect();

        let config = DbConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.url, "/var/lib/members.db");
        assert_eq!(config.username, "sa");
        assert_eq!(config.password, "hunter2");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DbConfig::new("members.db", "admin", "s3cret");
        let printed = format!("{:?}", config);

        assert!(printed.contains("members.db"));
        assert!(printed.contains("admin"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: DbConfig = serde_json::from_str(r#"{"url": "file:members.db"}"#).unwrap();

        assert_eq!(config.url, "file:members.db");
        assert_eq!(config.username, "sa");
        assert_eq!(config.password, "");
    }
}
