pub mod documents;
pub mod output;

use std::path::{Path, PathBuf};

use log::{info, warn};
use sigdoc_config::{Config, preamble::load_preamble};

pub use crate::utils::{
  documents::{collect_page_paths, load_documents, render_documents},
  output::{assemble, write_output},
};
use crate::error::SigdocError;

/// Run a full generation: read the pages, render one summary per function
/// and write the preamble followed by the summaries to the output file.
///
/// Relative paths in `config` are taken relative to `base_dir`. Nothing is
/// written if any page fails to render.
///
/// Returns the number of functions written.
///
/// # Errors
///
/// Returns an error if the input directory is malformed, any page fails to
/// parse, or the preamble or output cannot be read or written.
pub fn generate(config: &Config, base_dir: &Path) -> Result<usize, SigdocError> {
  let input_dir = resolve(base_dir, &config.input_dir);
  let output = resolve(base_dir, &config.output);
  info!("Reading function pages from {}", input_dir.display());

  let thread_count = config.jobs.unwrap_or_else(num_cpus::get);
  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(thread_count)
    .build()?;

  let options = config.render_options();
  let units = pool.install(|| {
    let paths = collect_page_paths(&input_dir)?;
    if paths.is_empty() {
      warn!("No function pages found in {}", input_dir.display());
    }
    let docs = load_documents(&paths)?;
    render_documents(&docs, &options)
  })?;

  let preamble = load_preamble(&config.preamble, base_dir)?;
  write_output(&output, &assemble(&preamble, &units))?;

  info!("Wrote {} functions to {}", units.len(), output.display());
  Ok(units.len())
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
  if path.is_absolute() {
    path.to_path_buf()
  } else {
    base_dir.join(path)
  }
}
