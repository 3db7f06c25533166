use serde::Serialize;
use std::fmt::Display;

/// Values exposed to a page template
///
/// Built fresh for every response. Absent fields are left undefined in the
/// template, which renders them as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    targets: Vec<TargetSummary>,
}

/// One entry of the target list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSummary {
    pub name: String,
    pub mounts: Vec<String>,
}

impl RenderContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), error: None, targets: Vec::new() }
    }

    pub fn with_error(mut self, error: impl Display) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_targets(mut self, targets: Vec<TargetSummary>) -> Self {
        self.targets = targets;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn targets(&self) -> &[TargetSummary] {
        &self.targets
    }
}

impl TargetSummary {
    pub fn new<I, S>(name: impl Into<String>, mounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), mounts: mounts.into_iter().map(Into::into).collect() }
    }
}
