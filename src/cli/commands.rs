//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "little-memories")]
#[command(about = "Journal of your children's favorites, measurements and milestones", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the active profile's entries, newest first
    Timeline {
        /// Scenario file describing profiles and entries
        scenario: PathBuf,
    },

    /// Show entry totals and the most recent entry
    Dashboard {
        /// Scenario file describing profiles and entries
        scenario: PathBuf,
    },

    /// List profiles with their ages
    Profiles {
        /// Scenario file describing profiles and entries
        scenario: PathBuf,

        /// Date to compute ages on (default: the scenario's today)
        #[arg(long)]
        today: Option<String>,
    },

    /// List favorites of the active profile
    Favorites {
        /// Scenario file describing profiles and entries
        scenario: PathBuf,

        /// Profile key to show instead of the active profile
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// List entry types and the suggested categories and measurements
    Suggestions,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
