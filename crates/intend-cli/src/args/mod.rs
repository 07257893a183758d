// Subcommands are namespaced by the record they act on (patient, session,
// lexicon); one-shot analysis and reporting stay at the top level.

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "intend")]
#[command(about = "Analyze counseling session transcripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $INTEND_PATH, then the platform data dir, then ~/.intend)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Lexicon file to use instead of the configured one
    #[arg(long, global = true)]
    pub lexicon: Option<PathBuf>,

    /// Number of top words to report
    #[arg(long, global = true)]
    pub top: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}
