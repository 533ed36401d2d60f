//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Data source configuration.
    #[serde(default)]
    pub source: SourceSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
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
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Data source configuration.
///
/// `remote_url` is only the boot-time value; at runtime the active remote
/// URL lives in the source store and is mutable through the config endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// Share-link URL of the remote CSV, if any.
    #[serde(default)]
    pub remote_url: Option<String>,
    /// Path of the local fallback CSV file.
    #[serde(default = "default_local_path")]
    pub local_path: String,
    /// Timeout for the remote fetch, in seconds.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    /// Number of leading raw rows the metadata sampler inspects.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            remote_url: None,
            local_path: default_local_path(),
            fetch_timeout_secs: default_fetch_timeout(),
            sample_size: default_sample_size(),
        }
    }
}

fn default_local_path() -> String {
    "sales.csv".to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_sample_size() -> usize {
    10_000
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PHARMADASH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_settings_defaults() {
        let settings = SourceSettings::default();
        assert_eq!(settings.remote_url, None);
        assert_eq!(settings.local_path, "sales.csv");
        assert_eq!(settings.fetch_timeout_secs, 30);
        assert_eq!(settings.sample_size, 10_000);
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 5000);
    }
}
