use anyhow::Context;
use edu_config::EduConfig;

use crate::cli::GlobalFlags;

/// Load layered config and apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<EduConfig> {
    let mut config = EduConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut EduConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(base_url) = &flags.base_url {
        config.backend.base_url.clone_from(base_url);
        config
            .backend
            .validate()
            .context("invalid --base-url")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(base_url: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Text,
            base_url: base_url.map(ToString::to_string),
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let mut config = EduConfig::default();
        apply_overrides(&mut config, &flags(Some("https://copilot.school.example")))
            .expect("valid override");
        assert_eq!(config.backend.base_url, "https://copilot.school.example");
    }

    #[test]
    fn invalid_base_url_flag_is_rejected() {
        let mut config = EduConfig::default();
        let err = apply_overrides(&mut config, &flags(Some("copilot.school.example"))).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --base-url"));
    }

    #[test]
    fn no_flag_keeps_config() {
        let mut config = EduConfig::default();
        apply_overrides(&mut config, &flags(None)).expect("no override");
        assert_eq!(config.backend.base_url, edu_config::DEFAULT_BASE_URL);
    }
}
