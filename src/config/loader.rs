//! Configuration loading

use std::fs;
use std::path::Path;

use crate::error::{NavError, NavResult};

use super::types::{Config, ConfigWarning, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "navwalker.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NavResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NavError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match Config::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(error = %e, "ignoring project config"),
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("navwalker/config.toml");
        if user_config.exists() {
            match Config::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(error = %e, "ignoring user config"),
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (NAVWALKER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // NAVWALKER_MAX_DEPTH
    if let Some(depth) = var("NAVWALKER_MAX_DEPTH") {
        match depth.trim().parse::<i64>() {
            Ok(depth) => config.render.max_depth = depth,
            Err(_) => tracing::warn!(value = %depth, "ignoring invalid NAVWALKER_MAX_DEPTH"),
        }
    }

    // NAVWALKER_WRAP
    if let Some(val) = var("NAVWALKER_WRAP") {
        config.menu.wrap = val.to_lowercase() != "false" && val != "0";
    }

    // NAVWALKER_MENU_ID
    if let Some(id) = var("NAVWALKER_MENU_ID") {
        config.menu.id = Some(id).filter(|id| !id.is_empty());
    }

    // NAVWALKER_MENU_CLASS
    if let Some(class) = var("NAVWALKER_MENU_CLASS") {
        config.menu.class = class;
    }

    // NAVWALKER_VERBOSITY
    if let Some(verbosity) = var("NAVWALKER_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "render",
        "max_depth",
        "before",
        "after",
        "link_before",
        "link_after",
        "menu",
        "wrap",
        "id",
        "class",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
