//! Command line argument parsing for Synoptic CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::query::Operator;

/// Synoptic - Synonym-aware query rewriting
#[derive(Parser, Debug, Clone)]
#[command(name = "synoptic")]
#[command(about = "Rewrite search queries so they also match synonyms")]
#[command(version = crate::VERSION)]
#[command(author = "Synoptic Contributors")]
#[command(long_about = None)]
pub struct SynopticArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SYNOPTIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynopticArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rewrite a query with its synonyms
    Rewrite(RewriteArgs),

    /// Show the result of every rewrite stage
    Inspect(InspectArgs),

    /// Normalize query text
    Normalize(NormalizeArgs),
}

/// Arguments for rewriting a query
#[derive(Parser, Debug, Clone)]
pub struct RewriteArgs {
    /// Query text, or a JSON search query with --json
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Treat QUERY as a JSON search query
    #[arg(long)]
    pub json: bool,

    /// Synonym dictionary file (JSON)
    #[arg(short, long, value_name = "SYNONYMS_FILE")]
    pub synonyms: Option<PathBuf>,

    /// Fields to search (comma-separated or repeated)
    #[arg(long = "field", value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Analyzer name to carry over
    #[arg(long)]
    pub analyzer: Option<String>,

    /// Default operator of the query (AND or OR)
    #[arg(long, default_value = "OR")]
    pub operator: Operator,

    /// The target index does not support synonyms
    #[arg(long)]
    pub no_synonym_support: bool,
}

/// Arguments for inspecting the rewrite stages
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Synonym dictionary file (JSON)
    #[arg(short, long, value_name = "SYNONYMS_FILE")]
    pub synonyms: Option<PathBuf>,
}

/// Arguments for normalizing text
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Text to normalize
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
