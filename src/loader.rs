//! Menu file loading
//!
//! Reads a flat list of menu items from JSON, YAML or TOML. The list may be
//! the document itself (JSON/YAML) or sit under an `items` key
//! (`[[items]]` or `[[item]]` tables in TOML).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{NavError, NavResult};
use crate::models::MenuItem;

/// Supported menu file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Json,
    Yaml,
    Toml,
}

impl MenuFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> NavResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(NavError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MenuDocument {
    List(Vec<MenuItem>),
    Table {
        #[serde(alias = "item")]
        items: Vec<MenuItem>,
    },
}

impl From<MenuDocument> for Vec<MenuItem> {
    fn from(doc: MenuDocument) -> Self {
        match doc {
            MenuDocument::List(items) | MenuDocument::Table { items } => items,
        }
    }
}

/// Parse menu items from file content
pub fn parse_menu(content: &str, format: MenuFormat, file: &Path) -> NavResult<Vec<MenuItem>> {
    let invalid = |message: String| NavError::InvalidMenu {
        file: file.to_path_buf(),
        message,
    };

    let doc: MenuDocument = match format {
        MenuFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
        MenuFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?
        }
        MenuFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    Ok(doc.into())
}

/// Read and parse a menu file, picking the format from its extension
pub fn load_menu(path: &Path) -> NavResult<Vec<MenuItem>> {
    let format = MenuFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let items = parse_menu(&content, format, path)?;
    tracing::debug!(path = %path.display(), items = items.len(), "loaded menu");
    Ok(items)
}
