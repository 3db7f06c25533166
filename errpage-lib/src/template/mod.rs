mod check;
mod engine;
mod resolver;

use std::fmt;
use std::str::FromStr;

use http::StatusCode;
use serde::Serialize;

use crate::error::ErrpageError;

pub use check::{check_templates, TemplateCheck};
pub use engine::TemplateEngine;
pub use resolver::resolve;

/// Page kinds with a configurable template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    TargetList,
    NotFound,
    InternalServerError,
    Unauthorized,
    Forbidden,
    BadRequest,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::TargetList,
        TemplateKind::NotFound,
        TemplateKind::InternalServerError,
        TemplateKind::Unauthorized,
        TemplateKind::Forbidden,
        TemplateKind::BadRequest,
    ];

    /// Status code sent when the page renders without degrading
    pub fn status(self) -> StatusCode {
        match self {
            TemplateKind::TargetList => StatusCode::OK,
            TemplateKind::NotFound => StatusCode::NOT_FOUND,
            TemplateKind::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            TemplateKind::Unauthorized => StatusCode::UNAUTHORIZED,
            TemplateKind::Forbidden => StatusCode::FORBIDDEN,
            TemplateKind::BadRequest => StatusCode::BAD_REQUEST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::TargetList => "target-list",
            TemplateKind::NotFound => "not-found",
            TemplateKind::InternalServerError => "internal-server-error",
            TemplateKind::Unauthorized => "unauthorized",
            TemplateKind::Forbidden => "forbidden",
            TemplateKind::BadRequest => "bad-request",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = ErrpageError;

    /// Accepts the kebab-case name or the snake_case config key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ErrpageError::Config(format!("unknown template kind: {s}")))
    }
}
