//! Resolving the effective configuration for a run.
use sigdoc_config::Config;

use crate::{
  cli::{Cli, Commands},
  error::SigdocError,
};

/// Load configuration from file(s) and overrides, then apply the `generate`
/// subcommand's flags on top.
///
/// # Errors
///
/// Returns an error if a config file or override is invalid, or if a
/// required path does not exist.
pub fn load(cli: &Cli) -> Result<Config, SigdocError> {
  let mut config = Config::load(&cli.config_files, &cli.config_overrides)?;
  merge_with_cli(&mut config, cli);
  config.validate_paths()?;
  Ok(config)
}

/// Let explicitly passed `generate` flags win over file values.
pub fn merge_with_cli(config: &mut Config, cli: &Cli) {
  let Some(Commands::Generate {
    input_dir,
    output,
    jobs,
    fence_language,
    preamble,
  }) = &cli.command
  else {
    return;
  };

  if let Some(input_dir) = input_dir {
    config.input_dir.clone_from(input_dir);
  }
  if let Some(output) = output {
    config.output.clone_from(output);
  }
  if jobs.is_some() {
    config.jobs = *jobs;
  }
  if let Some(fence_language) = fence_language {
    config.fence_language.clone_from(fence_language);
  }
  if preamble.is_some() {
    config.preamble.file.clone_from(preamble);
  }
}
