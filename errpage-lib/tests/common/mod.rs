//! Shared helpers for renderer tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use bytes::Bytes;
use errpage_lib::{ResponseWriter, TemplateConfig};
use http::header::{HeaderName, HeaderValue};
use http::StatusCode;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Directory holding the templates shipped with the workspace
pub fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../templates")
}

pub fn shipped_config() -> TemplateConfig {
    TemplateConfig::from_dir(shipped_templates())
}

/// Config pointing into an empty temporary directory: every template is missing
pub fn missing_config() -> Result<(TempDir, TemplateConfig), std::io::Error> {
    let dir = tempfile::tempdir()?;
    let config = TemplateConfig::from_dir(dir.path());
    Ok((dir, config))
}

/// Every template is missing except the shipped 500 page
pub fn only_internal_server_error() -> Result<(TempDir, TemplateConfig), std::io::Error> {
    let (dir, mut config) = missing_config()?;
    config.internal_server_error = shipped_config().internal_server_error;
    Ok((dir, config))
}

pub fn html(inner: &str) -> String {
    format!("<!DOCTYPE html>\n<html>\n  <body>\n{inner}  </body>\n</html>\n")
}

pub fn internal_server_error_page(error: &str) -> String {
    html(&format!("    <h1>Internal Server Error</h1>\n    <p>{error}</p>\n"))
}

pub fn terminal_page(error: &str) -> String {
    format!(
        "\n<!DOCTYPE html>\n<html>\n  <body>\n\t<h1>Internal Server Error</h1>\n\t<p>{error}</p>\n  </body>\n</html>\n"
    )
}

pub fn missing_message(path: &Path) -> String {
    format!("open {}: no such file or directory", path.display())
}

/// Writer that counts every call, to check the one-status-one-body contract
#[derive(Debug, Default)]
pub struct CountingWriter {
    pub status: Option<StatusCode>,
    pub status_calls: usize,
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: Bytes,
    pub body_calls: usize,
}

impl ResponseWriter for CountingWriter {
    fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
        self.status_calls += 1;
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.push((name, value));
    }

    fn write_body(&mut self, body: Bytes) {
        self.body = body;
        self.body_calls += 1;
    }
}
