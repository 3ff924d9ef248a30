#[allow(unused_imports)]
use crate::prelude::*;
use progressive_core::Options;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".progressive-lsp.toml";

/// Configuration for the progressive LSP server
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Defaults for the renumbering commands, used whenever a command does not
/// say otherwise
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct OptionsConfig {
    /// Keep the first number of the selections and count from it
    #[serde(default)]
    pub skip_first_number: bool,

    /// A cursor without a selection renumbers the number it touches
    #[serde(default = "default_true")]
    pub allow_zero_length_selection: bool,

    /// Read `-12` as a negative number rather than `-` followed by `12`
    #[serde(default = "default_true")]
    pub negative_numbers: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            skip_first_number: false,
            allow_zero_length_selection: default_true(),
            negative_numbers: default_true(),
        }
    }
}

/// Per-invocation settings. `None` falls back to the configured default.
///
/// Also accepted as LSP `initializationOptions`, where it replaces the
/// defaults from the config file.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionOverrides {
    #[serde(default)]
    pub skip_first_number: Option<bool>,
    #[serde(default)]
    pub allow_zero_length_selection: Option<bool>,
    #[serde(default)]
    pub negative_numbers: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl OptionsConfig {
    fn apply(&mut self, overrides: &OptionOverrides) {
        if let Some(skip) = overrides.skip_first_number {
            self.skip_first_number = skip;
        }
        if let Some(allow) = overrides.allow_zero_length_selection {
            self.allow_zero_length_selection = allow;
        }
        if let Some(negative) = overrides.negative_numbers {
            self.negative_numbers = negative;
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load config from default locations:
    /// 1. .progressive-lsp.toml in workspace root
    /// 2. Default config if not found
    pub fn load_from_workspace(workspace_root: Option<&str>) -> Self {
        if let Some(root) = workspace_root {
            let config_path = PathBuf::from(root).join(CONFIG_FILE_NAME);
            if config_path.exists() {
                match Self::from_file(&config_path) {
                    Ok(config) => {
                        log_debug!("Loaded config from {:?}", config_path);
                        return config;
                    }
                    Err(e) => {
                        log_debug!("Failed to load config from {:?}: {}", config_path, e);
                    }
                }
            }
        }
        log_debug!("Using default configuration");
        Self::default()
    }

    /// Fold the client's `initializationOptions` into the defaults.
    /// Anything that does not look like [`OptionOverrides`] is ignored.
    pub fn merge_initialization_options(&mut self, value: Option<&serde_json::Value>) {
        let Some(value) = value else {
            return;
        };
        match serde_json::from_value::<OptionOverrides>(value.clone()) {
            Ok(overrides) => self.options.apply(&overrides),
            Err(e) => log_debug!("Ignoring initializationOptions: {}", e),
        }
    }

    /// Options for one command run: explicit overrides first, then the
    /// configured defaults.
    pub fn resolve_options(&self, overrides: &OptionOverrides) -> Options {
        let mut resolved = self.options;
        resolved.apply(overrides);
        Options {
            skip_first_number: resolved.skip_first_number,
            allow_zero_length_selection: resolved.allow_zero_length_selection,
            negative_numbers: resolved.negative_numbers,
        }
    }
}
