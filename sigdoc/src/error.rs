use std::{io, path::PathBuf};

use sigdoc_config::ConfigError;
use sigdoc_markdown::DocumentError;
use thiserror::Error;

/// Top-level error type for the sigdoc crate.
#[derive(Debug, Error)]
pub enum SigdocError {
  #[error("Configuration error: {0}")]
  Config(#[from] ConfigError),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Failed to read {}: {source}", path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to read directory {}: {source}", path.display())]
  ReadDir {
    path:   PathBuf,
    #[source]
    source: walkdir::Error,
  },

  /// The input directory holds something other than `.md` pages.
  #[error("Unexpected entry in input directory: {}", .0.display())]
  UnexpectedFile(PathBuf),

  #[error(transparent)]
  Document(#[from] DocumentError),

  #[error("Failed to build thread pool: {0}")]
  ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
