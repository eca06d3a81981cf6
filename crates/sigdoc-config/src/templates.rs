use std::fmt;

/// Error type for template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// The requested configuration format is not supported.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Default configuration template in TOML, commented so that a fresh
/// `sigdoc init` explains every field.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# sigdoc configuration file

# Directory holding the generator's per-function markdown pages
input_dir = ".aux/makeReadme/functions"

# File to write the assembled document to
output = "README.md"

# Language tag of the fenced signature blocks
fence_language = "ts"

# Number of threads to use for parallel processing (defaults to number of CPU cores)
# jobs = 4

[preamble]
# Use this file verbatim as the preamble instead of generating one
# file = "docs/preamble.md"

# Package manifest the preamble is generated from
manifest = "package.json"

# Command listed under the install instructions; set to "" to leave it out
qa_command = "npm qa"
"#;

/// Default configuration template in JSON format.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "input_dir": ".aux/makeReadme/functions",
  "output": "README.md",
  "fence_language": "ts",
  "preamble": {
    "manifest": "package.json",
    "qa_command": "npm qa"
  }
}
"#;

/// Get the correct configuration template based on the requested format.
///
/// # Errors
///
/// Returns an error if the requested format is not supported.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;
  use crate::Config;

  #[test]
  fn test_templates_parse_to_defaults() {
    let from_toml: Config = toml::from_str(DEFAULT_TOML_TEMPLATE).unwrap();
    let from_json: Config = serde_json::from_str(DEFAULT_JSON_TEMPLATE).unwrap();
    assert_eq!(from_toml, Config::default());
    assert_eq!(from_json, Config::default());
  }

  #[test]
  fn test_unsupported_format() {
    assert!(get_template("TOML").is_ok());
    assert!(matches!(
      get_template("yaml"),
      Err(TemplateError::UnsupportedFormat(f)) if f == "yaml"
    ));
  }
}
