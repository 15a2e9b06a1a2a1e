use crate::cli::output::OutputFormat;
use crate::Case;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casekit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_case: Case,

    #[serde(default = "default_colored")]
    pub colored: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_colored() -> bool {
    true
}

/// One config file as written; absent keys stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigLayer {
    default_case: Option<Case>,
    colored: Option<bool>,
    format: Option<OutputFormat>,
}

impl ConfigLayer {
    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_case: Case::default(),
            colored: default_colored(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        case: Option<Case>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Result<Self> {
        let mut layers = Vec::new();
        if let Some(global_path) = Self::global_config_path() {
            layers.push(global_path);
        }
        layers.push(PathBuf::from(LOCAL_CONFIG_FILE));

        let mut config = Self::from_layers(&layers)?;

        // Apply CLI overrides
        if let Some(case) = case {
            config.default_case = case;
        }
        if let Some(format) = format {
            config.format = format;
        }
        if no_color {
            config.colored = false;
        }

        Ok(config)
    }

    /// Merge config files in order, later files overriding earlier ones.
    /// Missing files are skipped.
    pub fn from_layers(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();

        for path in paths {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                let layer = ConfigLayer::from_file(path)?;
                config = config.merge(layer);
            }
        }

        Ok(config)
    }

    /// Fields set in `layer` override ours, whatever their value.
    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(case) = layer.default_case {
            self.default_case = case;
        }
        if let Some(colored) = layer.colored {
            self.colored = colored;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casekit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
