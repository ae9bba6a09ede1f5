//! Server configuration from environment variables.

use serde::{Deserialize, Serialize};

/// Default host address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port number
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `DEPVIZ_HOST` / `DEPVIZ_PORT`, falling back
    /// to defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("DEPVIZ_HOST").unwrap_or(defaults.host),
            port: std::env::var("DEPVIZ_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }
}
