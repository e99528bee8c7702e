//! CLI Argument Parsing
//!
//! Global flags (--config, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// navwalker - render CMS menus as Bootstrap 5 navbar markup
#[derive(Parser, Debug)]
#[command(name = "navwalker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./navwalker.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a menu file to HTML on stdout
    Render {
        /// Menu file (.json, .yaml, .yml or .toml)
        file: PathBuf,

        /// Url of the page being displayed; marks the active trail
        #[arg(long)]
        current_url: Option<String>,

        /// Levels to render: 0 all, -1 flat, n levels
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<i64>,

        /// Wrap the fragment in the outer <ul>
        #[arg(long)]
        wrap: bool,

        /// Id of the outer <ul> (implies --wrap)
        #[arg(long)]
        menu_id: Option<String>,

        /// Class of the outer <ul> (implies --wrap)
        #[arg(long)]
        menu_class: Option<String>,
    },

    /// Report dangling parents, cycles and duplicate ids
    Check {
        /// Menu file (.json, .yaml, .yml or .toml)
        file: PathBuf,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },
}
