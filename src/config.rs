/// Default per-message limit (1 MiB).
const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Default tracing filter directive.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("CRAFT_MAX_MESSAGE_BYTES must be a positive integer")]
    InvalidMaxMessageBytes,
    #[error("CRAFT_LOG must not be empty")]
    EmptyLogFilter,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub log_filter: String,
    pub max_message_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `CRAFT_LOG` (optional, default `info`) — tracing filter directive
    /// - `CRAFT_MAX_MESSAGE_BYTES` (optional, default 1 MiB) — max bytes per JSON-RPC line
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("CRAFT_LOG").ok(),
            std::env::var("CRAFT_MAX_MESSAGE_BYTES").ok(),
        )
    }

    fn from_vars(
        log_filter: Option<String>,
        max_message_bytes: Option<String>,
    ) -> Result<Self, ConfigError> {
        let log_filter = match log_filter {
            Some(val) if val.trim().is_empty() => return Err(ConfigError::EmptyLogFilter),
            Some(val) => val,
            None => DEFAULT_LOG_FILTER.to_string(),
        };

        let max_message_bytes = match max_message_bytes {
            Some(val) => match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxMessageBytes),
            },
            None => DEFAULT_MAX_MESSAGE_BYTES,
        };

        Ok(Self {
            log_filter,
            max_message_bytes,
        })
    }
}
