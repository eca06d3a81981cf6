use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use sigdoc_config::templates::{DEFAULT_JSON_TEMPLATE, DEFAULT_TOML_TEMPLATE};

/// Name of the installed binary.
const BIN_NAME: &str = "sigdoc";

const SHELLS: [Shell; 5] = [
  Shell::Bash,
  Shell::Zsh,
  Shell::Fish,
  Shell::Elvish,
  Shell::PowerShell,
];

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the files shipped alongside the sigdoc binary
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Only build these artifacts (repeatable). Builds everything by default.
    #[arg(long, value_enum)]
    only: Vec<Artifact>,
  },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Artifact {
  /// Shell completion scripts.
  Completions,
  /// `sigdoc.1` plus one page per subcommand.
  Manpages,
  /// Example `sigdoc.toml` and `sigdoc.json`.
  Config,
}

fn main() -> Result<()> {
  let Commands::Dist { output_dir, only } = Xtask::parse().command;
  let wanted = |artifact| only.is_empty() || only.contains(&artifact);

  if wanted(Artifact::Completions) {
    generate_completions(&output_dir)?;
  }
  if wanted(Artifact::Manpages) {
    generate_manpages(&output_dir)?;
  }
  if wanted(Artifact::Config) {
    write_example_configs(&output_dir)?;
  }

  Ok(())
}

fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;
  let mut cmd = sigdoc::cli::Cli::command();
  for shell in SHELLS {
    generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
  }
  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

/// Render `sigdoc.1` and a `sigdoc-<command>.1` page for every subcommand.
fn generate_manpages(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;

  let cmd = sigdoc::cli::Cli::command();
  render_manpage(cmd.clone(), &man_dir.join(format!("{BIN_NAME}.1")))?;
  for sub in cmd.get_subcommands() {
    let path = man_dir.join(format!("{BIN_NAME}-{}.1", sub.get_name()));
    render_manpage(sub.clone(), &path)?;
  }

  println!("Manpages generated in {}", man_dir.display());
  Ok(())
}

fn render_manpage(cmd: Command, path: &Path) -> Result<()> {
  let mut file = fs::File::create(path).with_context(|| {
    format!("Failed to create manpage file at {}", path.display())
  })?;
  Man::new(cmd)
    .render(&mut file)
    .with_context(|| format!("Failed to render {}", path.display()))
}

/// Ship the same commented defaults that `sigdoc init` writes.
fn write_example_configs(output_dir: &Path) -> Result<()> {
  let config_dir = output_dir.join("config");
  fs::create_dir_all(&config_dir)?;
  for (name, contents) in [
    ("sigdoc.toml", DEFAULT_TOML_TEMPLATE),
    ("sigdoc.json", DEFAULT_JSON_TEMPLATE),
  ] {
    let path = config_dir.join(name);
    fs::write(&path, contents)
      .with_context(|| format!("Failed to write {}", path.display()))?;
  }
  println!("Example configs written to {}", config_dir.display());
  Ok(())
}
