use std::{fmt::Write, fs, path::Path};

use log::info;
use sigdoc_markdown::RenderedUnit;

use crate::error::SigdocError;

/// Join the preamble and the rendered units into the final document.
///
/// Parts are separated by one blank line and the document ends with a single
/// newline.
#[must_use]
pub fn assemble(preamble: &str, units: &[RenderedUnit]) -> String {
  let mut document = String::with_capacity(
    preamble.len() + units.iter().map(|u| u.body.len() + 64).sum::<usize>(),
  );
  document.push_str(preamble.trim_end());

  for unit in units {
    let _ = write!(document, "\n\n{unit}");
  }

  document.push('\n');
  document
}

/// Write `contents` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_output(path: &Path, contents: &str) -> Result<(), SigdocError> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent)?;
    info!("Created directory: {}", parent.display());
  }

  fs::write(path, contents)?;
  info!("{} generated successfully", path.display());
  Ok(())
}
