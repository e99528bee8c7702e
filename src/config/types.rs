//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bootstrap::RenderArgs;
use crate::error::NavResult;
use crate::walker::DepthLimit;

use super::loader;

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// `0` renders every level, `-1` renders flat, `n` renders `n` levels
    #[serde(default)]
    pub max_depth: i64,

    #[serde(default)]
    pub before: String,

    #[serde(default)]
    pub after: String,

    #[serde(default)]
    pub link_before: String,

    #[serde(default)]
    pub link_after: String,
}

/// Outer `<ul>` configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuConfig {
    /// Wrap the rendered fragment in the outer list
    #[serde(default)]
    pub wrap: bool,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default = "default_menu_class")]
    pub class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            wrap: false,
            id: None,
            class: default_menu_class(),
        }
    }
}

fn default_menu_class() -> String {
    "navbar-nav".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default log filter directive for this level
    pub fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NavResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (NAVWALKER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Render options described by this configuration
    pub fn render_args(&self) -> RenderArgs {
        RenderArgs {
            before: self.render.before.clone(),
            after: self.render.after.clone(),
            link_before: self.render.link_before.clone(),
            link_after: self.render.link_after.clone(),
            depth: DepthLimit::from_max_depth(self.render.max_depth),
        }
    }
}
