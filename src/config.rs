use crate::case::{Case, Punctuation};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casefmt.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub case: Case,
    /// `None` defers to [`Case::default_punctuation`].
    pub punctuation: Option<Punctuation>,
}

fn default_case() -> Case {
    Case::Kebab
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: default_case(),
            punctuation: None,
        }
    }
}

/// One layer of configuration. Fields left out of a file do not override
/// the layers beneath it.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    case: Option<Case>,
    punctuation: Option<Punctuation>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults.
    ///
    /// An explicit `config_file` replaces both the global and the local lookup.
    pub fn load(
        config_file: Option<&Path>,
        case: Option<Case>,
        punctuation: Option<Punctuation>,
    ) -> Result<Self> {
        let mut config = Self::default();

        match config_file {
            Some(path) => {
                config = config.merge(Self::from_file(path)?);
            }
            None => {
                if let Some(global_path) = Self::global_config_path() {
                    if global_path.exists() {
                        config = config.merge(Self::from_file(&global_path)?);
                    }
                }

                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    config = config.merge(Self::from_file(&local_path)?);
                }
            }
        }

        config = config.merge(PartialConfig { case, punctuation });
        debug!(
            "effective config: case={} punctuation={}",
            config.case,
            config.effective_punctuation()
        );

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<PartialConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let partial = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("loaded config layer from {}", path.display());
        Ok(partial)
    }

    fn merge(mut self, other: PartialConfig) -> Self {
        if let Some(case) = other.case {
            self.case = case;
        }
        if other.punctuation.is_some() {
            self.punctuation = other.punctuation;
        }
        self
    }

    pub fn effective_punctuation(&self) -> Punctuation {
        self.punctuation
            .unwrap_or_else(|| self.case.default_punctuation())
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casefmt").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
