//! Command-line interface for weather-presets.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **list**: Show every known weather preset with its display name
//! - **show**: Resolve the display name of a single preset
//! - **delete**: Remove an installed preset from the server
//!
//! ## Usage
//!
//! ```text
//! # List presets of the server installed in /srv/acserver
//! weather-presets --server-path /srv/acserver list
//!
//! # JSON output for scripting
//! weather-presets list --format json
//!
//! # Remove a custom preset
//! weather-presets delete custom_storm
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ServerLayout, SERVER_PATH_ENV};

pub mod presets;

#[derive(Parser)]
#[command(name = "weather-presets")]
#[command(version)]
#[command(about = "List, inspect, and remove weather presets of a simulation server")]
#[command(
    long_about = "weather-presets manages the weather presets installed under <server>/content/weather.\n\nThe catalog always contains the built-in presets; installed presets are added to it or replace built-ins with the same key. Display names come from each preset's weather.ini ([LAUNCHER] NAME=...)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Simulation server install path
    #[arg(long, global = true, env = SERVER_PATH_ENV, default_value = ".")]
    pub server_path: PathBuf,

    /// Preset directory (defaults to <server-path>/content/weather)
    #[arg(long, global = true)]
    pub presets_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    /// Server layout described by the global options
    #[must_use]
    pub fn layout(&self) -> ServerLayout {
        ServerLayout::new(&self.server_path).with_weather_dir(self.presets_dir.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all weather presets
    List,

    /// Show the display name of a preset
    Show {
        /// Preset key (directory name)
        #[arg(required = true)]
        key: String,
    },

    /// Delete an installed weather preset
    Delete {
        /// Preset key (directory name)
        #[arg(required = true)]
        key: String,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
