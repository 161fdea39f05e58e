//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use haulplan_types::{InterleavingPattern, OutputFormat};

#[derive(Parser)]
#[command(name = "haulplan")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle load planning for car carrier fleets")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan fleets for an order, a vehicle manifest, or the built-in sample
    Plan {
        /// Order book file (TOML or JSON)
        #[arg(long, requires = "order", conflicts_with = "manifest")]
        orders: Option<PathBuf>,

        /// Order id within the order book
        #[arg(long, requires = "orders")]
        order: Option<String>,

        /// Pre-sequenced vehicle manifest (CSV: vin,model,destination)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Fleet capacity in m³. Uses config value if not specified.
        #[arg(long, short = 'c')]
        capacity: Option<String>,

        /// Interleaving pattern (overrides the order's own pattern)
        #[arg(long, short = 'p', conflicts_with = "manifest")]
        pattern: Option<InterleavingPattern>,

        /// Reject bad capacities, duplicate VINs and fleet overflow
        #[arg(long)]
        strict: bool,

        /// Write the fleet assignment handoff as JSON
        #[arg(long)]
        handoff: Option<PathBuf>,

        /// Export the load manifest to Excel
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// List the orders in an order book
    Orders {
        /// Order book file (TOML or JSON)
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default fleet capacity (m³)
        #[arg(long)]
        set_capacity: Option<f64>,

        /// Set default interleaving pattern
        #[arg(long)]
        set_pattern: Option<InterleavingPattern>,

        /// Enable or disable strict validation
        #[arg(long)]
        set_strict: Option<bool>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
