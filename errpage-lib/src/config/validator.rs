use crate::config::root::Config;
use crate::template::TemplateKind;

pub fn validate(config: &Config) -> Result<(), String> {
    for kind in TemplateKind::ALL {
        if config.templates.path_for(kind).as_os_str().is_empty() {
            return Err(format!("template path for {kind} cannot be empty"));
        }
    }
    if config.preview.default_kind.parse::<TemplateKind>().is_err() {
        return Err(format!(
            "preview default_kind \"{}\" is not a known template kind",
            config.preview.default_kind
        ));
    }
    Ok(())
}
