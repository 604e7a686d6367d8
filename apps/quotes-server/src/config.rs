//! Layered application configuration.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use quotes::QuotesConfig;
use quotes_kit::DbConfig;
use quotes_kit::db::SQLITE_MEMORY_DSN;
use quotes_kit::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `APP__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DbConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub quotes: QuotesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
    8000
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Defaults, then the YAML file (if any), then `APP__*` environment variables.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    /// Returns an error if a layer cannot be read or does not match the schema.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    /// CLI flags are the last layer.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        self.logging.apply_verbosity(cli.verbose);
        if cli.mock {
            SQLITE_MEMORY_DSN.clone_into(&mut self.database.dsn);
        }
    }

    /// # Errors
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host must not be empty");
        }
        if self.database.dsn.trim().is_empty() {
            anyhow::bail!("database.dsn must not be empty");
        }
        if self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be greater than zero");
        }
        self.quotes
            .validate()
            .map_err(|e| anyhow::anyhow!("quotes: {e}"))
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.quotes.min_author_length, 3);
        assert_eq!(cfg.database.dsn, "sqlite://quotes.db?mode=rwc");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn yaml_overrides_defaults() {
        let file = yaml_file(
            "server:\n  port: 9100\nquotes:\n  min_text_length: 20\nlogging:\n  format: json\n",
        );
        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.quotes.min_text_length, 20);
        assert_eq!(cfg.quotes.max_text_length, 300);
        assert_eq!(cfg.logging.format, quotes_kit::logging::LogFormat::Json);
    }

    #[test]
    fn shipped_sample_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/quotes.yaml");
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.quotes.password_hash.memory_kib, 19456);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = yaml_file("quotes:\n  min_quote_length: 5\n");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/quotes.yaml"))).is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(&CliOverrides {
            port: Some(1234),
            verbose: 2,
            mock: true,
        });
        assert_eq!(cfg.server.port, 1234);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.database.dsn, SQLITE_MEMORY_DSN);
        assert!(cfg.database.is_memory());
    }

    #[test]
    fn validate_catches_bad_quotes_section() {
        let mut cfg = AppConfig::default();
        cfg.quotes.min_author_length = 400;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("min_author_length"));
    }

    #[test]
    fn print_config_is_json() {
        let json: serde_json::Value =
            serde_json::from_str(&AppConfig::default().to_pretty_json().unwrap()).unwrap();
        assert_eq!(json["server"]["port"], 8000);
        assert_eq!(json["quotes"]["session_ttl_secs"], 86400);
    }
}
