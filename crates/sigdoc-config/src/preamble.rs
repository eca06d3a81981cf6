//! The static text placed before the rendered API section.
//!
//! Unless a preamble file is configured, the preamble is generated from the
//! project's `package.json`: title, description, repository and npm links,
//! install instructions and the `## API` heading the summaries follow.
use std::{
  fmt::Write,
  fs,
  path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{config::PreambleConfig, error::ConfigError};

/// Base URL of package pages on the npm registry.
pub const NPM_PACKAGE_URL: &str = "https://www.npmjs.com/package/";

/// The fields of a package manifest the preamble needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
  /// Full package name, possibly scoped (`@scope/name`).
  pub name:        String,
  pub description: String,
  pub repository:  Repository,
}

/// The `repository` field, in either of its npm forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Repository {
  Url(String),
  Detailed { url: String },
}

impl Repository {
  #[must_use]
  pub fn url(&self) -> &str {
    match self {
      Self::Url(url) | Self::Detailed { url } => url,
    }
  }
}

impl PackageManifest {
  /// Read and parse a `package.json`.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Manifest`] if the file cannot be read or lacks a
  /// required field.
  pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Manifest {
        path:    path.to_path_buf(),
        message: e.to_string(),
      }
    })?;

    serde_json::from_str(&content).map_err(|e| {
      ConfigError::Manifest {
        path:    path.to_path_buf(),
        message: e.to_string(),
      }
    })
  }

  /// Package name without its npm scope.
  #[must_use]
  pub fn short_name(&self) -> &str {
    self
      .name
      .strip_prefix('@')
      .and_then(|scoped| scoped.split_once('/'))
      .map_or(self.name.as_str(), |(_, name)| name)
  }

  /// Browsable repository URL: no `git+` prefix, no `.git` suffix.
  #[must_use]
  pub fn repo_url(&self) -> &str {
    let url = self.repository.url();
    let url = url.strip_prefix("git+").unwrap_or(url);
    url.strip_suffix(".git").unwrap_or(url)
  }

  #[must_use]
  pub fn npm_url(&self) -> String {
    format!("{NPM_PACKAGE_URL}{}", self.short_name())
  }
}

/// Markdown link to `url`, labeled with the URL minus its scheme.
#[must_use]
pub fn linkify(url: &str) -> String {
  let text = url
    .strip_prefix("https://")
    .or_else(|| url.strip_prefix("http://"))
    .unwrap_or(url);
  format!("[{text}]({url})")
}

/// Render the generated preamble for `manifest`.
#[must_use]
pub fn render_preamble(
  manifest: &PackageManifest,
  qa_command: Option<&str>,
) -> String {
  let mut install = format!("npm install {}\n", manifest.name);
  if let Some(command) = qa_command {
    let _ = write!(install, "\n# run checks and tests:\n{command}\n");
  }

  format!(
    "# {name}\n\n{description}\n\nLinks:\n* github: {github}\n* npm: \
     {npm}\n\n## Installation\n\n```bash\n{install}```\n\n---\n\n## API\n",
    name = manifest.short_name(),
    description = manifest.description,
    github = linkify(manifest.repo_url()),
    npm = linkify(&manifest.npm_url()),
  )
}

/// Resolve the configured preamble to its text.
///
/// `base_dir` anchors relative paths, normally the current directory.
///
/// # Errors
///
/// Returns an error if the preamble file or the manifest cannot be read.
pub fn load_preamble(
  config: &PreambleConfig,
  base_dir: &Path,
) -> Result<String, ConfigError> {
  if let Some(ref file) = config.file {
    let path = resolve(base_dir, file);
    log::debug!("Using preamble file {}", path.display());
    return fs::read_to_string(&path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read preamble file: {}: {}",
        path.display(),
        e
      ))
    });
  }

  let manifest_path = resolve(base_dir, &config.manifest);
  log::debug!("Generating preamble from {}", manifest_path.display());
  let manifest = PackageManifest::from_file(&manifest_path)?;
  let qa_command = config.qa_command.as_deref().filter(|c| !c.is_empty());
  Ok(render_preamble(&manifest, qa_command))
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
  if path.is_absolute() {
    path.to_path_buf()
  } else {
    base_dir.join(path)
  }
}
