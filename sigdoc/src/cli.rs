use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for sigdoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "sigdoc: condense generated function docs into a README"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`]). Defaults to `generate`.
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the sigdoc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Render the generator's pages and write the output file.
  Generate {
    /// Directory containing the per-function markdown pages.
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// File to write the assembled document to.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of threads to use for parallel processing.
    #[arg(short = 'p', long = "jobs")]
    jobs: Option<usize>,

    /// Language tag of the fenced signature blocks.
    #[arg(long)]
    fence_language: Option<String>,

    /// Use this file verbatim as the preamble.
    #[arg(long)]
    preamble: Option<PathBuf>,
  },

  /// Initialize a new sigdoc configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "sigdoc.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
