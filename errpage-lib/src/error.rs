use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a template into a page body
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The configured template file could not be read
    #[error("open {}: {reason}", .path.display())]
    Load {
        path: PathBuf,
        reason: String,
        #[source]
        source: io::Error,
    },

    /// The template text is malformed or substitution failed
    #[error("execute template: {0}")]
    Execution(#[from] minijinja::Error),
}

impl TemplateError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Load { path: path.into(), reason: describe_io_error(&source), source }
    }
}

/// Errors surfaced by configuration loading and the preview server
#[derive(Error, Debug)]
pub enum ErrpageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

pub type Result<T> = std::result::Result<T, ErrpageError>;

/// Short lower-case description of an I/O failure, without the OS error number
fn describe_io_error(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "no such file or directory".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        io::ErrorKind::IsADirectory => "is a directory".to_string(),
        _ => {
            let text = err.to_string();
            let text = text.split(" (os error").next().unwrap_or_default().trim();
            let mut chars = text.chars();
            match chars.next() {
                Some(first) => first.to_lowercase().chain(chars).collect(),
                None => "unknown error".to_string(),
            }
        }
    }
}
