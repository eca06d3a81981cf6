use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sigdoc_markdown::RenderOptions;

use crate::error::ConfigError;

/// File names probed, in order, when no config file is given explicitly.
pub const CONFIG_FILENAMES: [&str; 5] = [
  "sigdoc.toml",
  "sigdoc.json",
  ".sigdoc.toml",
  ".sigdoc.json",
  ".config/sigdoc.toml",
];

/// Command listed under the install instructions unless configured otherwise.
pub const DEFAULT_QA_COMMAND: &str = "npm qa";

/// Configuration for the sigdoc README generator.
///
/// Fields are typically loaded from a TOML or JSON config file and can be
/// overridden with `--config KEY=VALUE` or the `generate` subcommand's flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Directory containing the generator's per-function pages.
  pub input_dir: PathBuf,

  /// File the assembled document is written to.
  pub output: PathBuf,

  /// Language tag of the fenced signature blocks.
  pub fence_language: String,

  /// Number of threads to use for parallel processing.
  pub jobs: Option<usize>,

  /// Where the preamble comes from.
  pub preamble: PreambleConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input_dir:      PathBuf::from(".aux/makeReadme/functions"),
      output:         PathBuf::from("README.md"),
      fence_language: RenderOptions::default().fence_language,
      jobs:           None,
      preamble:       PreambleConfig::default(),
    }
  }
}

/// Source of the preamble placed before the rendered summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreambleConfig {
  /// Preamble file used verbatim. Takes precedence over `manifest`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file: Option<PathBuf>,

  /// Package manifest the preamble is generated from.
  pub manifest: PathBuf,

  /// Command shown under the install instructions. An empty value drops that
  /// part of the preamble.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub qa_command: Option<String>,
}

impl Default for PreambleConfig {
  fn default() -> Self {
    Self {
      file:       None,
      manifest:   PathBuf::from("package.json"),
      qa_command: Some(DEFAULT_QA_COMMAND.to_string()),
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    Self::from_value(read_config_value(path)?, &path.display().to_string())
  }

  /// Build a config from a parsed (and possibly merged) document.
  fn from_value(value: Value, source: &str) -> Result<Self, ConfigError> {
    serde_json::from_value(value).map_err(|e| {
      ConfigError::Config(format!("Invalid configuration in {source}: {e}"))
    })
  }

  /// Load configuration from explicit files, a discovered file, or defaults,
  /// then apply `KEY=VALUE` overrides.
  ///
  /// Multiple files are merged in order. A later file only replaces the keys
  /// it actually sets; anything it leaves out keeps the earlier value.
  ///
  /// # Errors
  ///
  /// Returns an error if a config file cannot be loaded or an override is
  /// invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged = read_config_value(first)?;
      for config_path in rest {
        merge_values(&mut merged, read_config_value(config_path)?);
      }

      if !rest.is_empty() {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      let sources = config_files
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
      Self::from_value(merged, &sources)?
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load discovered config from {}: {}",
          discovered_config.display(),
          e
        ))
      })?
    } else {
      log::debug!("No config file found, using defaults");
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    Ok(config)
  }

  /// Search the current directory for a config file.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    Self::find_config_file_in(&current_dir)
  }

  /// Search `dir` for the first of [`CONFIG_FILENAMES`] that exists.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
      .iter()
      .map(|filename| dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Apply configuration overrides from `KEY=VALUE` strings.
  ///
  /// # Errors
  ///
  /// Returns an error if an override is not in `KEY=VALUE` format, names an
  /// unknown key, or has a value of the wrong type.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override. Empty values clear optional fields.
  ///
  /// # Errors
  ///
  /// Returns an error for an unknown key or an unparsable value.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "input_dir" => self.input_dir = PathBuf::from(value),
      "output" => self.output = PathBuf::from(value),
      "fence_language" => self.fence_language = value.to_string(),
      "jobs" => {
        self.jobs = if value.is_empty() {
          None
        } else {
          Some(value.parse().map_err(|e| {
            ConfigError::Config(format!(
              "Invalid value for 'jobs': '{value}': {e}"
            ))
          })?)
        };
      },
      "preamble.file" => {
        self.preamble.file = non_empty(value).map(PathBuf::from);
      },
      "preamble.manifest" => self.preamble.manifest = PathBuf::from(value),
      "preamble.qa_command" => {
        self.preamble.qa_command = non_empty(value).map(str::to_string);
      },
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }

    log::debug!("Applied config override {key}={value}");
    Ok(())
  }

  /// Validate the paths the run depends on.
  ///
  /// # Errors
  ///
  /// Returns an error listing every configured path that is missing or of the
  /// wrong kind.
  pub fn validate_paths(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if !self.input_dir.exists() {
      errors.push(format!(
        "Input directory does not exist: {}",
        self.input_dir.display()
      ));
    } else if !self.input_dir.is_dir() {
      errors.push(format!(
        "Input path is not a directory: {}",
        self.input_dir.display()
      ));
    }

    if let Some(ref file) = self.preamble.file {
      if !file.is_file() {
        errors
          .push(format!("Preamble file does not exist: {}", file.display()));
      }
    } else if !self.preamble.manifest.is_file() {
      errors.push(format!(
        "Package manifest does not exist: {}",
        self.preamble.manifest.display()
      ));
    }

    if self.fence_language.is_empty() {
      errors.push("fence_language must not be empty".to_string());
    }

    if self.jobs == Some(0) {
      errors.push("jobs must be at least 1".to_string());
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(ConfigError::Config(errors.join("\n")))
    }
  }

  /// Options for the summary renderer.
  #[must_use]
  pub fn render_options(&self) -> RenderOptions {
    RenderOptions {
      fence_language: self.fence_language.clone(),
    }
  }

  /// Generate a default configuration file with commented explanations.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

/// Read a config file into an untyped document, picking the parser by
/// extension.
fn read_config_value(path: &Path) -> Result<Value, ConfigError> {
  let content = fs::read_to_string(path).map_err(|e| {
    ConfigError::Config(format!(
      "Failed to read config file: {}: {}",
      path.display(),
      e
    ))
  })?;

  let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
    return Err(ConfigError::Config(format!(
      "Config file has no extension: {}",
      path.display()
    )));
  };

  match ext.to_lowercase().as_str() {
    "json" => {
      serde_json::from_str(&content).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to parse JSON config from {}: {}",
          path.display(),
          e
        ))
      })
    },
    "toml" => {
      toml::from_str(&content).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to parse TOML config from {}: {}",
          path.display(),
          e
        ))
      })
    },
    _ => {
      Err(ConfigError::Config(format!(
        "Unsupported config file format: {}",
        path.display()
      )))
    },
  }
}

/// Merge `overlay` into `base`. Tables are merged key by key; any other value
/// in `overlay` replaces the one in `base`.
fn merge_values(base: &mut Value, overlay: Value) {
  match (base, overlay) {
    (Value::Object(base), Value::Object(overlay)) => {
      for (key, value) in overlay {
        match base.get_mut(&key) {
          Some(existing) => merge_values(existing, value),
          None => {
            base.insert(key, value);
          },
        }
      }
    },
    (base, overlay) => *base = overlay,
  }
}

fn non_empty(value: &str) -> Option<&str> {
  (!value.is_empty()).then_some(value)
}
