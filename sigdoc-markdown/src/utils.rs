/// Create a regex that never matches anything.
///
/// Used as the fallback when one of the static patterns fails to compile.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
#[allow(clippy::unwrap_used, reason = "Pattern is guaranteed to be valid")]
pub fn never_matching_regex() -> regex::Regex {
  // Asserts something impossible, so it can never match
  regex::Regex::new(r"[^\s\S]")
    .unwrap_or_else(|_| regex::Regex::new(r"^\b$").unwrap())
}

/// Whether `c` is a regex-style word character (`[A-Za-z0-9_]`).
#[must_use]
pub const fn is_word_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}
