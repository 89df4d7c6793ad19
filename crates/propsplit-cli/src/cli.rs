use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Split a bookmarked grant proposal PDF into per-section submission files.
#[derive(Debug, Parser)]
#[command(name = "propsplit", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split the proposal into submit-<section>.pdf files
    Split {
        /// Path to the proposal PDF
        #[arg(value_name = "FILE", default_value = "main.pdf")]
        file: PathBuf,

        /// Directory the section files are written to (must exist)
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Also bundle the section files into this zip archive
        #[arg(long, value_name = "PATH")]
        zip: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,

        /// Treat warnings (e.g. bookmarks that cannot be written) as errors
        #[arg(long)]
        strict: bool,
    },

    /// Show where each section would be cut without writing anything
    Sections {
        /// Path to the proposal PDF
        #[arg(value_name = "FILE", default_value = "main.pdf")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,
    },

    /// Print the bookmark tree with page spans
    Bookmarks {
        /// Path to the proposal PDF
        #[arg(value_name = "FILE", default_value = "main.pdf")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,
    },
}

/// Output format for all subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON output
    Json,
}
