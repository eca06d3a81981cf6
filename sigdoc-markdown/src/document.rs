//! Generated pages as loaded from disk.
use std::path::{Path, PathBuf};

use crate::{
  error::DocumentError,
  nonempty::NonEmpty,
  render::{RenderOptions, RenderedUnit, render_sections},
  section::{Section, parse_sections},
};

/// File extension of generated pages.
pub const PAGE_EXTENSION: &str = "md";

/// Suffix of pages the generator reserves for internal use.
pub const RESERVED_SUFFIX: &str = "_.md";

/// One generated page: where it came from and its raw markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
  path:     PathBuf,
  contents: String,
}

impl Document {
  #[must_use]
  pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
    Self {
      path:     path.into(),
      contents: contents.into(),
    }
  }

  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  #[must_use]
  pub fn contents(&self) -> &str {
    &self.contents
  }

  /// Whether the page is one of the generator's reserved internal pages.
  #[must_use]
  pub fn is_reserved(&self) -> bool {
    is_reserved_page(&self.path)
  }

  /// Name of the documented function: the file stem of a `.md` page.
  ///
  /// # Errors
  ///
  /// Returns [`DocumentError::InvalidFileName`] if the path does not end in a
  /// non-empty stem with the `.md` extension.
  pub fn function_name(&self) -> Result<&str, DocumentError> {
    page_stem(&self.path).ok_or_else(|| {
      DocumentError::InvalidFileName {
        path: self.path.clone(),
      }
    })
  }

  /// Parse the page into its sections.
  ///
  /// # Errors
  ///
  /// Returns [`DocumentError::Parse`] carrying this page's path.
  pub fn sections(&self) -> Result<NonEmpty<Section>, DocumentError> {
    parse_sections(&self.contents).map_err(|source| self.parse_error(source))
  }

  /// Parse and render the page into its summary.
  ///
  /// # Errors
  ///
  /// Returns [`DocumentError::InvalidFileName`] for a path without a page
  /// stem, or [`DocumentError::Parse`] if the contents cannot be reduced to a
  /// summary.
  pub fn render(
    &self,
    options: &RenderOptions,
  ) -> Result<RenderedUnit, DocumentError> {
    let name = self.function_name()?.to_string();
    let sections = self.sections()?;
    log::debug!(
      "Rendering `{name}` from {} sections of {}",
      sections.len(),
      self.path.display()
    );

    let body = render_sections(&sections, options)
      .map_err(|source| self.parse_error(source))?;

    Ok(RenderedUnit { name, body })
  }

  fn parse_error(&self, source: crate::ParseError) -> DocumentError {
    DocumentError::Parse {
      path: self.path.clone(),
      source,
    }
  }
}

/// Whether `path` names a reserved internal page (`*_.md`).
#[must_use]
pub fn is_reserved_page(path: &Path) -> bool {
  path
    .file_name()
    .and_then(|name| name.to_str())
    .is_some_and(|name| name.ends_with(RESERVED_SUFFIX))
}

/// The file stem of `path` if it is a `.md` page.
#[must_use]
pub fn page_stem(path: &Path) -> Option<&str> {
  if path.extension().and_then(|ext| ext.to_str()) != Some(PAGE_EXTENSION) {
    return None;
  }
  path
    .file_stem()
    .and_then(|stem| stem.to_str())
    .filter(|stem| !stem.is_empty())
}
