//! CLI configuration from environment variables

/// Runtime configuration
///
/// | Variable    | Default | Meaning                         |
/// |-------------|---------|---------------------------------|
/// | `LOG_LEVEL` | `info`  | Level used when `RUST_LOG` is unset |
/// | `LOG_JSON`  | `false` | Emit JSON log lines             |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}
