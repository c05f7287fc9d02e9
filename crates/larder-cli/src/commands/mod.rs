//! CLI command implementations for `larder`.
//!
//! - [`cook`] -- Build a session from the given inputs and print a recipe.
//! - [`normalize`] -- Offline ingredient name cleanup.
//! - [`suggest`] -- Static ingredient and nutrition lists.

pub mod cook;
pub mod normalize;
pub mod suggest;

use std::path::Path;

use larder_core::LarderConfig;

/// Load configuration from the given path, or defaults when none is given.
pub fn load_config(config_override: Option<&Path>) -> anyhow::Result<LarderConfig> {
    let Some(path) = config_override else {
        return Ok(LarderConfig::default());
    };
    if !path.exists() {
        anyhow::bail!("config file not found: {}", path.display());
    }
    Ok(LarderConfig::load(path)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.chat_model, "gpt-4o");
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_config(Some(Path::new("/tmp/.larder-test-missing.json"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chatModel": "gpt-4o-mini"}}"#).unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.chat_model, "gpt-4o-mini");
    }
}
