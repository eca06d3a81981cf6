use std::{
  fs,
  path::{Path, PathBuf},
};

use log::{debug, error, info};
use rayon::prelude::*;
use sigdoc_markdown::{
  Document,
  RenderOptions,
  RenderedUnit,
  document::{is_reserved_page, page_stem},
};
use walkdir::WalkDir;

use crate::error::SigdocError;

/// List the pages in `dir`, sorted by file name.
///
/// Only the top level of `dir` is read. Reserved internal pages (`*_.md`) are
/// skipped.
///
/// # Errors
///
/// Returns an error if `dir` cannot be listed, or if it holds anything other
/// than `.md` files.
pub fn collect_page_paths(dir: &Path) -> Result<Vec<PathBuf>, SigdocError> {
  let mut pages = Vec::new();

  let walker = WalkDir::new(dir)
    .min_depth(1)
    .max_depth(1)
    .sort_by_file_name();

  for entry in walker {
    let entry = entry.map_err(|source| {
      SigdocError::ReadDir {
        path: dir.to_path_buf(),
        source,
      }
    })?;
    let path = entry.into_path();

    if !path.is_file() || page_stem(&path).is_none() {
      return Err(SigdocError::UnexpectedFile(path));
    }

    if is_reserved_page(&path) {
      debug!("Skipping reserved page {}", path.display());
      continue;
    }

    pages.push(path);
  }

  Ok(pages)
}

/// Read every page in parallel. The result keeps the order of `paths`.
///
/// # Errors
///
/// Returns the first read failure.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<Document>, SigdocError> {
  paths
    .par_iter()
    .map(|path| {
      let contents = fs::read_to_string(path).map_err(|source| {
        SigdocError::Read {
          path: path.clone(),
          source,
        }
      })?;
      Ok::<_, SigdocError>(Document::new(path.clone(), contents))
    })
    .collect()
}

/// Render every document in parallel. The result keeps the order of `docs`.
///
/// # Errors
///
/// Returns the first document that cannot be rendered. No partial result is
/// produced.
pub fn render_documents(
  docs: &[Document],
  options: &RenderOptions,
) -> Result<Vec<RenderedUnit>, SigdocError> {
  let units = docs
    .par_iter()
    .map(|doc| {
      doc.render(options).map_err(|e| {
        error!("Failed to render {}", doc.path().display());
        SigdocError::from(e)
      })
    })
    .collect::<Result<Vec<_>, _>>()?;

  info!("Rendered {} functions", units.len());
  Ok(units)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_collect_sorts_and_skips_reserved() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["zip.md", "abs.md", "internal_.md", "Map.md"] {
      fs::write(dir.path().join(name), "").unwrap();
    }

    let names: Vec<_> = collect_page_paths(dir.path())
      .unwrap()
      .into_iter()
      .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
      .collect();
    assert_eq!(names, vec!["Map.md", "abs.md", "zip.md"]);
  }

  #[test]
  fn test_collect_rejects_foreign_entries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();
    assert!(matches!(
      collect_page_paths(dir.path()),
      Err(SigdocError::UnexpectedFile(p)) if p.ends_with("notes.txt")
    ));

    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nested.md")).unwrap();
    assert!(matches!(
      collect_page_paths(dir.path()),
      Err(SigdocError::UnexpectedFile(_))
    ));
  }

  #[test]
  fn test_collect_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
      collect_page_paths(&dir.path().join("missing")),
      Err(SigdocError::ReadDir { .. })
    ));
  }

  #[test]
  fn test_render_keeps_input_order() {
    let docs: Vec<_> = (0..32)
      .map(|i| {
        Document::new(
          format!("functions/f{i:02}.md"),
          format!("```ts\nf{i:02}(): void\n```\nNumber {i}."),
        )
      })
      .collect();

    let units = render_documents(&docs, &RenderOptions::default()).unwrap();
    let names: Vec<_> = units.iter().map(|u| u.name.as_str()).collect();
    let expected: Vec<_> = (0..32).map(|i| format!("f{i:02}")).collect();
    assert_eq!(names, expected);
  }

  #[test]
  fn test_render_fails_on_any_bad_document() {
    let docs = vec![
      Document::new("functions/good.md", "```ts\ngood()\n```\nFine."),
      Document::new("functions/bad.md", "No block here."),
    ];
    let err = render_documents(&docs, &RenderOptions::default()).unwrap_err();
    assert!(err.to_string().contains("functions/bad.md"));
  }
}
