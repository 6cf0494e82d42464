//! CLI subcommand definitions

use clap::Subcommand;
use liftlog::core::Period;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show the most recently completed workout (default)
    Recent,
    /// List every completion, newest first
    History,
    /// Show totals per workout
    Workouts,
    /// Show completions per day
    Daily,
    /// Show completions per week
    Weekly,
    /// Show completions per month
    Monthly,
    /// Check a username or password against the configured rules
    Check {
        #[command(subcommand)]
        field: CheckField,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum CheckField {
    /// Check a username
    Username { value: String },
    /// Check a password
    Password { value: String },
}

impl Commands {
    /// Calendar period for the period-based commands
    pub(crate) fn period(&self) -> Option<Period> {
        match self {
            Commands::Daily => Some(Period::Day),
            Commands::Weekly => Some(Period::Week),
            Commands::Monthly => Some(Period::Month),
            _ => None,
        }
    }
}
