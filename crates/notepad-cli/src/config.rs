use std::path::{Path, PathBuf};

use notepad_core::crypto::HashAlgorithm;
use notepad_core::history::DEFAULT_MAX_HISTORY;
use notepad_core::text::search::DEFAULT_CONTEXT_CHARS;
use serde::{Deserialize, Serialize};

use crate::constants::env_vars;
use crate::errors::CliError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotepadConfig {
    pub hash: HashSection,
    pub search: SearchSection,
    pub history: HistorySection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashSection {
    /// Token passed to the digest; unknown names fall back to SHA-256.
    pub algorithm: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub context_chars: usize,
    pub case_sensitive: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            context_chars: DEFAULT_CONTEXT_CHARS,
            case_sensitive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySection {
    pub max_entries: usize,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_HISTORY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty on a terminal, plain otherwise
    #[default]
    Auto,
    Plain,
    Json,
}

impl NotepadConfig {
    /// Defaults as written by `config init`.
    pub fn initial() -> Self {
        Self {
            hash: HashSection {
                algorithm: HashAlgorithm::default().as_str().to_string(),
            },
            ..Self::default()
        }
    }

    /// Hash token to use when the command line does not name one.
    pub fn hash_algorithm(&self) -> &str {
        if self.hash.algorithm.trim().is_empty() {
            HashAlgorithm::default().as_str()
        } else {
            &self.hash.algorithm
        }
    }
}

/// Where the config was looked up, and whether the user named it.
#[derive(Debug, Clone)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub explicit: bool,
}

/// Resolve the config path: `--config`, then `NOTEPAD_CONFIG`, then XDG.
pub fn resolve_config_path(flag: Option<&str>) -> anyhow::Result<ConfigLocation> {
    if let Some(path) = flag {
        return Ok(ConfigLocation {
            path: PathBuf::from(path),
            explicit: true,
        });
    }
    if let Ok(value) = std::env::var(env_vars::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(ConfigLocation {
                path: PathBuf::from(value),
                explicit: true,
            });
        }
    }
    Ok(ConfigLocation {
        path: default_config_path()?,
        explicit: false,
    })
}

/// Load the config. A missing default file means defaults; a missing
/// explicitly named file is an error.
pub fn load_config(location: &ConfigLocation) -> anyhow::Result<NotepadConfig> {
    if !location.path.exists() {
        if location.explicit {
            return Err(CliError::not_found(
                format!("Config not found at {}", location.path.display()),
                "Hint: Run `notepad config init` to create it.",
            )
            .into());
        }
        return Ok(NotepadConfig::default());
    }
    read_config(&location.path)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<NotepadConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents).map_err(|e| {
        anyhow::Error::from(CliError::invalid_input(format!(
            "Failed to parse config {}: {}",
            path.display(),
            e
        )))
    })
}

pub fn write_config(path: &Path, config: &NotepadConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("notepad"));
        }
    }
    Ok(home_dir()?.join(".config").join("notepad"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = NotepadConfig::initial();
        config.search.context_chars = 12;
        config.output.format = OutputFormat::Json;
        write_config(&path, &config).unwrap();

        assert_eq!(read_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[hash]\nalgorithm = \"MD5\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.hash_algorithm(), "MD5");
        assert_eq!(config.search.context_chars, DEFAULT_CONTEXT_CHARS);
        assert_eq!(config.history.max_entries, DEFAULT_MAX_HISTORY);
        assert_eq!(config.output.format, OutputFormat::Auto);
    }

    #[test]
    fn test_missing_default_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let location = ConfigLocation {
            path: dir.path().join("absent.toml"),
            explicit: false,
        };
        assert_eq!(load_config(&location).unwrap(), NotepadConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let location = ConfigLocation {
            path: dir.path().join("absent.toml"),
            explicit: true,
        };
        let err = load_config(&location).unwrap_err();
        assert!(err.to_string().contains("Config not found"));
    }

    #[test]
    fn test_invalid_toml_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search\ncontext_chars = ").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_output_format_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        for (name, expected) in [
            ("auto", OutputFormat::Auto),
            ("plain", OutputFormat::Plain),
            ("json", OutputFormat::Json),
        ] {
            std::fs::write(&path, format!("[output]\nformat = \"{name}\"\n")).unwrap();
            assert_eq!(read_config(&path).unwrap().output.format, expected);
        }
    }

    #[test]
    fn test_empty_algorithm_uses_sha256() {
        assert_eq!(NotepadConfig::default().hash_algorithm(), "SHA-256");
    }

    #[test]
    fn test_flag_wins_over_default_path() {
        let location = resolve_config_path(Some("/tmp/custom.toml")).unwrap();
        assert!(location.explicit);
        assert_eq!(location.path, PathBuf::from("/tmp/custom.toml"));
    }
}
