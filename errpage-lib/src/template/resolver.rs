use std::borrow::Cow;
use std::fs;

use crate::config::TemplateConfig;
use crate::error::TemplateError;
use crate::template::TemplateKind;

/// Return the template text for `kind`
///
/// A non-empty `inline` template wins and is returned without touching the
/// filesystem. Otherwise the configured file is read in full, on every call.
pub fn resolve<'a>(
    config: &TemplateConfig,
    kind: TemplateKind,
    inline: Option<&'a str>,
) -> Result<Cow<'a, str>, TemplateError> {
    if let Some(inline) = inline.filter(|text| !text.is_empty()) {
        return Ok(Cow::Borrowed(inline));
    }

    let path = config.path_for(kind);
    fs::read_to_string(path)
        .map(Cow::Owned)
        .map_err(|source| TemplateError::load(path, source))
}
