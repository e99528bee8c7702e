//! Configuration module for navwalker
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NAVWALKER_*)
//! 3. Project config (./navwalker.toml)
//! 4. User config (~/.config/navwalker/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::PROJECT_CONFIG_FILE;
pub use types::{Config, ConfigWarning, MenuConfig, OutputConfig, RenderConfig, Verbosity};
