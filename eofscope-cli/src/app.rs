use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eofscope::Revision;

/// eofscope - EOF container validation and inspection
#[derive(Debug, Parser)]
#[command(name = "eofscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where the container bytes come from, and which rules apply to them.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to a file holding the raw container bytes.
    #[arg(value_name = "FILE", required_unless_present = "hex")]
    pub path: Option<PathBuf>,

    /// Container bytes as hex text (whitespace allowed, optional 0x prefix).
    #[arg(long, value_name = "HEX", conflicts_with = "path")]
    pub hex: Option<String>,

    /// Rule revision to validate against.
    #[arg(short, long, default_value = "shanghai")]
    pub revision: Revision,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a container and print its verdict. Exits with status 1 when rejected.
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate a container and list its sections with their offsets and sizes.
    Sections {
        #[command(flatten)]
        input: InputArgs,
    },
}
