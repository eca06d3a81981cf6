//! Error types for section parsing and block selection.
use std::path::PathBuf;

use thiserror::Error;

/// Result type for parsing a single document.
pub type ParseResult<T> = Result<T, ParseError>;

/// Ways a generated page can fail to reduce to a summary.
///
/// None of these are recoverable: a page that fails here would otherwise
/// silently drop a function from the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("invalid heading marker `{0}`: expected 1 to 4 `#` characters")]
  InvalidHeadingMarker(String),

  #[error("document has no content after preprocessing")]
  EmptyDocument,

  #[error("heading-less first section has no code block")]
  MissingPrimaryBlock,

  #[error(
    "document opens with a heading, but no `Call Signature` section carries \
     a code block"
  )]
  NoCallSignatureBlocks,

  #[error("canonical block is empty: '{0}'")]
  EmptyCanonicalBlock(String),
}

/// A failure attributed to one input document.
#[derive(Debug, Error)]
pub enum DocumentError {
  /// The document path does not name a `.md` page.
  #[error("invalid file name: {}", path.display())]
  InvalidFileName { path: PathBuf },

  /// The document contents could not be parsed.
  #[error("failed to render {}: {source}", path.display())]
  Parse {
    path:   PathBuf,
    #[source]
    source: ParseError,
  },
}

impl DocumentError {
  /// Path of the document that failed.
  #[must_use]
  pub fn path(&self) -> &std::path::Path {
    match self {
      Self::InvalidFileName { path } | Self::Parse { path, .. } => path,
    }
  }
}
