//! Configuration — optional YAML file + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "shopping.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Heading shown at the top of the screen
    #[serde(default = "default_title")]
    pub title: String,

    /// Blank lines after rows at odd positions (1st, 3rd, ...)
    #[serde(default = "default_row_gap")]
    pub row_gap: u16,

    /// Blank lines after rows at even positions (2nd, 4th, ...)
    #[serde(default = "default_pair_gap")]
    pub pair_gap: u16,

    /// Where tracing output goes (the terminal belongs to the UI)
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_title() -> String {
    "Shopping List".into()
}
fn default_row_gap() -> u16 {
    0
}
fn default_pair_gap() -> u16 {
    1
}
fn default_log_file() -> String {
    "shopping-tui.log".into()
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    /// A missing file means defaults; env overrides apply either way.
    pub fn load(config_path: &Path) -> Result<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Defaults plus env overrides, for when the file is unusable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Load `shopping.yaml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load(&dir.join(CONFIG_FILENAME))
    }

    fn load_with(config_path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config: Config = match std::fs::read_to_string(config_path) {
            Ok(content) => {
                serde_yaml::from_str(&content).context("Failed to parse shopping.yaml")?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config: {}", config_path.display())
                })
            }
        };

        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(title) = env("SHOPPING_LIST_TITLE") {
            self.title = title;
        }
        if let Some(path) = env("SHOPPING_LIST_LOG_FILE") {
            self.log_file = path;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.pair_gap <= self.row_gap {
            anyhow::bail!(
                "pair_gap ({}) must be larger than row_gap ({})",
                self.pair_gap,
                self.row_gap
            );
        }
        Ok(())
    }

    /// Blank lines drawn after the row at 1-indexed `position`.
    pub fn gap_after(&self, position: usize) -> u16 {
        if position % 2 == 0 {
            self.pair_gap
        } else {
            self.row_gap
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            row_gap: default_row_gap(),
            pair_gap: default_pair_gap(),
            log_file: default_log_file(),
        }
    }
}
