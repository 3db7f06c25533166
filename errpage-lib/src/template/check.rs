use serde::Serialize;
use std::path::PathBuf;

use crate::config::TemplateConfig;
use crate::render::{RenderContext, TargetSummary};
use crate::template::{resolve, TemplateEngine, TemplateKind};

/// Outcome of loading and executing one configured template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateCheck {
    pub kind: TemplateKind,
    pub path: PathBuf,
    /// Load or execution error, `None` when the template renders
    pub error: Option<String>,
}

impl TemplateCheck {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Load and execute every configured template against a sample context
///
/// Nothing is written and nothing degrades: each failure is reported as is.
pub fn check_templates(config: &TemplateConfig) -> Vec<TemplateCheck> {
    let engine = TemplateEngine::new();
    let ctx = RenderContext::new("/")
        .with_error("sample error")
        .with_targets(vec![TargetSummary::new("sample", ["/sample/"])]);

    TemplateKind::ALL
        .into_iter()
        .map(|kind| {
            let error = resolve(config, kind, None)
                .and_then(|source| engine.execute(&source, &ctx))
                .err()
                .map(|err| err.to_string());
            TemplateCheck { kind, path: config.path_for(kind).to_path_buf(), error }
        })
        .collect()
}
