//! navwalker CLI - render CMS menus as Bootstrap 5 navbar markup
//!
//! Usage: navwalker <COMMAND>
//!
//! Commands:
//!   render  Render a menu file to HTML
//!   check   Report structural problems in a menu file

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use navwalker::config::PROJECT_CONFIG_FILE;
use navwalker::{
    diagnose, load_menu, mark_current, wrap_menu, Bootstrap5Walker, Config, ConfigWarning,
    DepthLimit,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose, &config);
    print_config_warnings(&warnings);

    match cli.command {
        Commands::Render {
            file,
            current_url,
            depth,
            wrap,
            menu_id,
            menu_class,
        } => cmd_render(
            &file,
            current_url.as_deref(),
            depth,
            wrap,
            menu_id,
            menu_class,
            &config,
        ),
        Commands::Check { file, json } => cmd_check(&file, json),
    }
}

/// Explicit `--config` first, then the project file (with unknown-key
/// warnings), then the user config and defaults.
fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    let project = Path::new(PROJECT_CONFIG_FILE);
    let path = match explicit {
        Some(path) => path,
        None if project.exists() => project,
        None => return Ok((Config::load_or_default(None), Vec::new())),
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    Ok((config.with_env_overrides(), warnings))
}

fn init_logging(verbose: u8, config: &Config) {
    let level = match verbose {
        0 => config.output.verbosity.filter(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

fn cmd_render(
    file: &Path,
    current_url: Option<&str>,
    depth: Option<i64>,
    wrap: bool,
    menu_id: Option<String>,
    menu_class: Option<String>,
    config: &Config,
) -> Result<()> {
    let mut items =
        load_menu(file).with_context(|| format!("failed to load menu {}", file.display()))?;

    if let Some(url) = current_url {
        if mark_current(&mut items, url) == 0 {
            tracing::info!(url, "no menu item matches the current url");
        }
    }

    let mut args = config.render_args();
    if let Some(depth) = depth {
        args.depth = DepthLimit::from_max_depth(depth);
    }

    let html = Bootstrap5Walker::new(args).render(&items);

    let wrap = wrap || menu_id.is_some() || menu_class.is_some() || config.menu.wrap;
    if wrap {
        let id = menu_id.or_else(|| config.menu.id.clone());
        let class = menu_class.unwrap_or_else(|| config.menu.class.clone());
        print!("{}", wrap_menu(&html, id.as_deref(), &class));
    } else {
        print!("{}", html);
    }

    Ok(())
}

fn cmd_check(file: &Path, json: bool) -> Result<()> {
    let items =
        load_menu(file).with_context(|| format!("failed to load menu {}", file.display()))?;
    let issues = diagnose(&items);

    if json {
        let report = serde_json::json!({
            "file": file.display().to_string(),
            "items": items.len(),
            "issues": issues,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if issues.is_empty() {
        println!("✓ {}: {} items, no issues", file.display(), items.len());
    } else {
        println!("✗ {}: {} issue(s)", file.display(), issues.len());
        for issue in &issues {
            println!("  - {}", issue);
        }
    }

    if !issues.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
