//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use liftlog::config::{Config, ConfigColorMode, ConfigSortOrder};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first (default)
    #[default]
    Desc,
}

impl From<ConfigSortOrder> for SortOrder {
    fn from(order: ConfigSortOrder) -> Self {
        match order {
            ConfigSortOrder::Asc => SortOrder::Asc,
            ConfigSortOrder::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ConfigColorMode> for ColorMode {
    fn from(mode: ConfigColorMode) -> Self {
        match mode {
            ConfigColorMode::Auto => ColorMode::Auto,
            ConfigColorMode::Always => ColorMode::Always,
            ConfigColorMode::Never => ColorMode::Never,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "liftlog")]
#[command(about = "Workout history statistics", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// History file or directory (default: ~/.liftlog/history)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Filter from date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) since: Option<String>,

    /// Filter until date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) until: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Sort order for results [default: desc]
    #[arg(short, long, global = true, value_enum)]
    pub(crate) order: Option<SortOrder>,

    /// Color output mode [default: auto]
    #[arg(long, global = true, value_enum)]
    pub(crate) color: Option<ColorMode>,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (report skipped records)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone for calendar days (e.g., "UTC", "Europe/Berlin"; default: local)
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.order.is_none() {
            self.order = config.order.map(SortOrder::from);
        }
        if self.color.is_none() {
            self.color = config.color.map(ColorMode::from);
        }
        if self.file.is_none() {
            self.file = config.file.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }

    pub(crate) fn sort_order(&self) -> SortOrder {
        self.order.unwrap_or_default()
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color.unwrap_or_default() {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// History location: CLI, then config, then ~/.liftlog/history
    pub(crate) fn history_path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(Config::default_history_path)
    }
}
