use serde::Deserialize;

use super::preview::PreviewConfig;
use super::telemetry::LoggingConfig;
use super::templates::TemplateConfig;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Template file locations
    /// Missing files are not fatal: rendering degrades to the 500 page
    #[serde(default)]
    pub templates: TemplateConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Preview server configuration
    #[serde(default)]
    pub preview: PreviewConfig,
}
