use minijinja::Environment;
use serde::Serialize;

use crate::error::TemplateError;

/// Executes template text against a render context
///
/// Templates use minijinja syntax (`{{ path }}`, `{{ error }}`). Output is not
/// auto-escaped and a trailing newline in the source is preserved, so a page
/// renders byte-for-byte as written on disk.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    pub fn execute<C: Serialize>(&self, source: &str, ctx: C) -> Result<String, TemplateError> {
        Ok(self.env.render_str(source, ctx)?)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
