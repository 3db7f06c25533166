mod loader;
mod preview;
mod root;
mod telemetry;
mod templates;
mod validator;

pub use loader::{load_from_path, read_from_path, warn_missing_templates};
pub use preview::PreviewConfig;
pub use root::Config;
pub use telemetry::LoggingConfig;
pub use templates::TemplateConfig;
pub use validator::validate;
