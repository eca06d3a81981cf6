use std::{env, fs};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use sigdoc::{
  cli::{Cli, Commands},
  config,
  utils,
};
use sigdoc_config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  if let Some(Commands::Init {
    output,
    format,
    force,
  }) = &cli.command
  {
    if output.exists() && !force {
      bail!(
        "Configuration file already exists: {}. Use --force to overwrite.",
        output.display()
      );
    }

    if let Some(parent) = output.parent()
      && !parent.as_os_str().is_empty()
      && !parent.exists()
    {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
      info!("Created directory: {}", parent.display());
    }

    Config::generate_default_config(format, output).wrap_err_with(|| {
      format!(
        "Failed to generate configuration file: {}",
        output.display()
      )
    })?;

    info!(
      "Configuration file created successfully. Edit it to point sigdoc at \
       your generated pages."
    );
    return Ok(());
  }

  let config = config::load(&cli)?;
  let base_dir = env::current_dir()?;

  utils::generate(&config, &base_dir).wrap_err_with(|| {
    format!("Failed to generate {}", config.output.display())
  })?;

  Ok(())
}
