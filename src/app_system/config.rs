use chrono::Duration;

/// Runtime configuration.
///
/// # Environment variables
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | STORE_CHANNEL_BUFFER | 100 | mailbox size of each resource actor |
/// | LOG_FILTER | info | tracing filter used when `RUST_LOG` is unset |
/// | AUTH_TOKEN_TTL_SECS | 3600 | lifetime of mock bearer tokens |
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub channel_buffer: usize,
    pub log_filter: String,
    pub auth_token_ttl_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 100,
            log_filter: "info".to_string(),
            auth_token_ttl_secs: 3600,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults for
    /// unset or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            channel_buffer: std::env::var("STORE_CHANNEL_BUFFER")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.channel_buffer),
            log_filter: std::env::var("LOG_FILTER").unwrap_or(defaults.log_filter),
            auth_token_ttl_secs: std::env::var("AUTH_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs: &i64| secs > 0)
                .unwrap_or(defaults.auth_token_ttl_secs),
        }
    }

    pub fn auth_token_ttl(&self) -> Duration {
        Duration::seconds(self.auth_token_ttl_secs)
    }
}
