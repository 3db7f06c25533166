use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::template::TemplateKind;

/// Template file locations, one per page kind
///
/// Paths are used as given: relative paths resolve against the working
/// directory of the process, and files are read again on every render.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Bucket/target listing page
    /// Default: "templates/target-list.tpl"
    #[serde(default = "default_target_list")]
    pub target_list: PathBuf,
    /// 404 page
    /// Default: "templates/not-found.tpl"
    #[serde(default = "default_not_found")]
    pub not_found: PathBuf,
    /// 500 page, also the target of every degrade
    /// Default: "templates/internal-server-error.tpl"
    #[serde(default = "default_internal_server_error")]
    pub internal_server_error: PathBuf,
    /// 401 page
    /// Default: "templates/unauthorized.tpl"
    #[serde(default = "default_unauthorized")]
    pub unauthorized: PathBuf,
    /// 403 page
    /// Default: "templates/forbidden.tpl"
    #[serde(default = "default_forbidden")]
    pub forbidden: PathBuf,
    /// 400 page
    /// Default: "templates/bad-request.tpl"
    #[serde(default = "default_bad_request")]
    pub bad_request: PathBuf,
}

impl TemplateConfig {
    /// Build a config where every template lives in `dir` under its default file name
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            target_list: dir.join("target-list.tpl"),
            not_found: dir.join("not-found.tpl"),
            internal_server_error: dir.join("internal-server-error.tpl"),
            unauthorized: dir.join("unauthorized.tpl"),
            forbidden: dir.join("forbidden.tpl"),
            bad_request: dir.join("bad-request.tpl"),
        }
    }

    pub fn path_for(&self, kind: TemplateKind) -> &Path {
        match kind {
            TemplateKind::TargetList => &self.target_list,
            TemplateKind::NotFound => &self.not_found,
            TemplateKind::InternalServerError => &self.internal_server_error,
            TemplateKind::Unauthorized => &self.unauthorized,
            TemplateKind::Forbidden => &self.forbidden,
            TemplateKind::BadRequest => &self.bad_request,
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self::from_dir("templates")
    }
}

fn default_target_list() -> PathBuf {
    TemplateConfig::default().target_list
}

fn default_not_found() -> PathBuf {
    TemplateConfig::default().not_found
}

fn default_internal_server_error() -> PathBuf {
    TemplateConfig::default().internal_server_error
}

fn default_unauthorized() -> PathBuf {
    TemplateConfig::default().unauthorized
}

fn default_forbidden() -> PathBuf {
    TemplateConfig::default().forbidden
}

fn default_bad_request() -> PathBuf {
    TemplateConfig::default().bad_request
}
