use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{WorkspaceError, WorkspaceResult};

/// Settings file read from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "idmint.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Defaults for `idmint generate`; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub locale: Option<String>,
    pub seed: Option<u64>,
    pub count: Option<usize>,
    pub output: Option<OutputFormat>,
}

/// Load settings from `explicit`, or from [`DEFAULT_SETTINGS_FILE`] when it
/// exists. A missing explicit file is an error; a missing default file is not.
pub fn load_settings(explicit: Option<&Path>) -> WorkspaceResult<Settings> {
    match explicit {
        Some(path) if !path.exists() => Err(WorkspaceError::MissingConfig(path.to_path_buf())),
        Some(path) => read_settings(path),
        None => {
            let path = Path::new(DEFAULT_SETTINGS_FILE);
            if path.exists() {
                read_settings(path)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

pub fn parse_settings(content: &str, path: &Path) -> WorkspaceResult<Settings> {
    toml::from_str(content).map_err(|source| WorkspaceError::TomlDecode {
        path: path.to_path_buf(),
        source,
    })
}

fn read_settings(path: &Path) -> WorkspaceResult<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings = parse_settings(&content, path)?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key() {
        let content = r#"
locale = "de"
seed = 42
count = 10
output = "csv"
"#;
        let settings = parse_settings(content, Path::new("idmint.toml")).expect("parse");
        assert_eq!(
            settings,
            Settings {
                locale: Some("de".to_string()),
                seed: Some(42),
                count: Some(10),
                output: Some(OutputFormat::Csv),
            }
        );
    }

    #[test]
    fn empty_file_yields_defaults() {
        let settings = parse_settings("", Path::new("idmint.toml")).expect("parse");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn unknown_keys_and_formats_are_rejected() {
        let path = Path::new("idmint.toml");
        assert!(matches!(
            parse_settings("colour = true", path),
            Err(WorkspaceError::TomlDecode { .. })
        ));
        assert!(matches!(
            parse_settings("output = \"xml\"", path),
            Err(WorkspaceError::TomlDecode { .. })
        ));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let path = std::env::temp_dir().join("idmint-does-not-exist.toml");
        assert!(matches!(
            load_settings(Some(&path)),
            Err(WorkspaceError::MissingConfig(_))
        ));
    }
}
