use serde::Deserialize;

/// `[logging]` section: how the `errpage` binary and preview server log
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Filter directive for the fmt subscriber, e.g. "info" or "errpage_lib=debug".
    /// `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Prefix lines with the emitting module
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), show_target: false }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
