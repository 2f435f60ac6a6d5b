use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logseg")]
#[command(about = "Tokenize log records the way the result table renders them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding the tokenization budgets
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tokenize records against a field schema and print the tokens
    Tokenize {
        /// Field schema (JSON array of field descriptors)
        #[arg(long)]
        fields: PathBuf,

        /// Records as JSON Lines, or a single JSON object; `-` reads stdin
        #[arg(long)]
        row: PathBuf,

        /// Restrict output to one field name
        #[arg(long)]
        field: Option<String>,

        /// Emit tokens as JSON instead of rendered text
        #[arg(long)]
        json: bool,
    },

    /// Print the schema after dotted-path expansion
    Expand {
        /// Field schema (JSON array of field descriptors)
        #[arg(long)]
        fields: PathBuf,

        /// Emit the expanded descriptors as JSON
        #[arg(long)]
        json: bool,
    },
}
