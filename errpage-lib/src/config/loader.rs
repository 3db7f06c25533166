use std::fs;
use std::path::Path;

use tracing::warn;

use crate::config::root::Config;
use crate::config::validator::validate;
use crate::error::{ErrpageError, Result};
use crate::template::TemplateKind;

pub fn load_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let cfg = read_from_path(p)?;
    warn_missing_templates(&cfg);
    Ok(cfg)
}

/// Read, parse and validate without logging
///
/// For callers that install their subscriber from the loaded `[logging]`
/// section; they call [`warn_missing_templates`] once it is in place.
pub fn read_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let txt = fs::read_to_string(p)
        .map_err(|e| ErrpageError::Config(format!("Failed to read config file: {e}")))?;
    let cfg: Config = toml::from_str(&txt)
        .map_err(|e| ErrpageError::Config(format!("Failed to parse config: {e}")))?;

    validate(&cfg).map_err(ErrpageError::Config)?;
    Ok(cfg)
}

/// Missing template files are survivable (pages degrade to 500), so only warn
pub fn warn_missing_templates(cfg: &Config) {
    for kind in TemplateKind::ALL {
        let path = cfg.templates.path_for(kind);
        if !path.exists() {
            warn!(%kind, path = %path.display(), "template file not found");
        }
    }
}
