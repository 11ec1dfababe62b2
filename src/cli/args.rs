//! Command line argument parsing for the Vitrine CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Vitrine - relevance and faceted filtering for price-comparison results
#[derive(Parser, Debug, Clone)]
#[command(name = "vitrine")]
#[command(about = "Filter and facet price-comparison search results")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VitrineArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VitrineArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a product dataset and apply facet filters
    Search(SearchArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Product dataset (JSON array or `{sucesso, produtos}` envelope)
    #[arg(short, long, value_name = "DATA_FILE", env = "VITRINE_DATA")]
    pub data: PathBuf,

    /// Restrict results to a store (repeatable, case-insensitive)
    #[arg(long = "store", value_name = "STORE")]
    pub stores: Vec<String>,

    /// Restrict results to a brand (repeatable, case-insensitive)
    #[arg(long = "brand", value_name = "BRAND")]
    pub brands: Vec<String>,

    /// Restrict results to a price band key, e.g. 1000-2500 (repeatable;
    /// an upper bound of 0 means unbounded)
    #[arg(long = "price", value_name = "RANGE")]
    pub prices: Vec<String>,

    /// Sort order: relevance, price-asc or price-desc
    #[arg(short, long, default_value = "relevance")]
    pub sort: String,

    /// Maximum number of results to print
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}
