//! Preprocessing and splitting of a raw page into heading-delimited chunks.
use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::{
  error::{ParseError, ParseResult},
  heading::split_heading_line,
  nonempty::NonEmpty,
  utils::never_matching_regex,
};

/// Text that replaces any `Example` heading line.
pub const EXAMPLE_MARKER: &str = "example:";

static EXAMPLE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?mi)^#+[ \t]+example.*$").unwrap_or_else(|e| {
    log::error!(
      "Failed to compile EXAMPLE_HEADING_RE regex: {e}\n Falling back to \
       never matching regex."
    );
    never_matching_regex()
  })
});

static INLINE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\[(.*?)\]\(.*?\)").unwrap_or_else(|e| {
    log::error!(
      "Failed to compile INLINE_LINK_RE regex: {e}\n Falling back to never \
       matching regex."
    );
    never_matching_regex()
  })
});

/// Flatten every `Example` heading into the plain text `example:`.
///
/// The generator is inconsistent about the level it uses for example
/// headings across overloads; flattening them keeps them out of the section
/// structure entirely.
#[must_use]
pub fn flatten_example_headings(text: &str) -> String {
  EXAMPLE_HEADING_RE
    .replace_all(text, EXAMPLE_MARKER)
    .into_owned()
}

/// Rewrite `[text](url)` links into inline code containing only `text`.
///
/// Rewriting a nested link such as `[[a](b)](c)` can expose a new link, so
/// passes are repeated until nothing changes. Every pass that matches
/// shortens the text, which bounds the loop.
#[must_use]
pub fn rewrite_links(text: &str) -> String {
  let mut text = text.to_string();
  loop {
    let rewritten = INLINE_LINK_RE.replace_all(&text, "`${1}`");
    if let Cow::Owned(next) = rewritten {
      text = next;
    } else {
      return text;
    }
  }
}

/// Apply both preprocessing passes, example headings first.
#[must_use]
pub fn preprocess(text: &str) -> String {
  rewrite_links(&flatten_example_headings(text))
}

/// Split `text` at every line that starts a heading.
///
/// The returned slices are untrimmed and cover `text` exactly, so
/// concatenating them yields the input. Text before the first heading, if
/// any, is the first chunk. Empty input yields no chunks.
#[must_use]
pub fn split_chunks(text: &str) -> Vec<&str> {
  let mut chunks = Vec::new();
  let mut chunk_start = 0;
  let mut line_start = 0;

  for line in text.split_inclusive('\n') {
    let line_body = line.strip_suffix('\n').unwrap_or(line);
    if line_start > chunk_start && split_heading_line(line_body).is_some() {
      chunks.push(&text[chunk_start..line_start]);
      chunk_start = line_start;
    }
    line_start += line.len();
  }

  if chunk_start < text.len() {
    chunks.push(&text[chunk_start..]);
  }

  chunks
}

/// Preprocess a raw page and split it into trimmed chunks.
///
/// A blank lead-in before the first heading carries no content and is
/// dropped, so the first chunk of a page that opens with a heading is that
/// heading's chunk.
///
/// # Errors
///
/// Returns [`ParseError::EmptyDocument`] if nothing but whitespace remains
/// after preprocessing.
pub fn split_document(raw: &str) -> ParseResult<NonEmpty<String>> {
  let text = preprocess(raw);

  let chunks: Vec<String> = split_chunks(&text)
    .into_iter()
    .map(str::trim)
    .filter(|chunk| !chunk.is_empty())
    .map(str::to_string)
    .collect();

  log::trace!("Split document into {} chunks", chunks.len());

  NonEmpty::from_vec(chunks).ok_or(ParseError::EmptyDocument)
}
