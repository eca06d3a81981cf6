//! Parsing a single chunk into a [`Section`].
//!
//! A chunk is read as three optional fields in a fixed order: a heading line,
//! a fenced code block directly after it, and trailing prose. Each field is
//! parsed by its own small function that returns what it found together with
//! the unconsumed input.
use crate::{
  error::ParseResult,
  heading::{Heading, HeadingLevel, split_heading_line},
  nonempty::NonEmpty,
  split::split_document,
  utils::is_word_char,
};

/// Opening and closing marker of a fenced code block.
pub const FENCE: &str = "```";

/// One logical unit of a generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
  /// Heading that opened the section. Only the first section of a page can
  /// lack one.
  pub heading:  Option<Heading>,
  /// Cleaned content of the code block right after the heading.
  pub block:    Option<String>,
  /// Trimmed prose after the block, possibly empty.
  pub contents: String,
}

/// Result of looking for a fenced block at the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence<'a> {
  /// A complete block: its raw content and the input after the closing fence.
  Closed { content: &'a str, rest: &'a str },
  /// An opening fence with no matching close.
  Unterminated,
  /// The input does not open with a fence.
  Absent,
}

impl Section {
  /// Parse one trimmed chunk.
  ///
  /// # Errors
  ///
  /// Returns [`crate::ParseError::InvalidHeadingMarker`] if the chunk opens
  /// with a heading line whose marker run is longer than four characters.
  pub fn parse(chunk: &str) -> ParseResult<Self> {
    let (heading, rest) = parse_heading(chunk)?;

    let (block, rest) = match parse_fence(rest) {
      Fence::Closed { content, rest } => (Some(clean_block(content)), rest),
      Fence::Unterminated => {
        log::debug!(
          "Unterminated code fence{}, reading it as prose",
          heading
            .as_ref()
            .map(|h| format!(" under `{}`", h.title))
            .unwrap_or_default()
        );
        (None, rest)
      },
      Fence::Absent => (None, rest),
    };

    Ok(Self {
      heading,
      block,
      contents: rest.trim().to_string(),
    })
  }

  /// Whether this section documents one overload of a function.
  #[must_use]
  pub fn is_call_signature(&self) -> bool {
    self
      .heading
      .as_ref()
      .is_some_and(|h| h.title_starts_with(CALL_SIGNATURE_PREFIX))
  }
}

/// Heading title prefix the generator uses for overload sub-sections.
pub const CALL_SIGNATURE_PREFIX: &str = "call signature";

/// Parse an optional leading heading line.
///
/// Whitespace after the heading line, or at the start of a heading-less
/// chunk, is skipped.
///
/// # Errors
///
/// Returns [`crate::ParseError::InvalidHeadingMarker`] if the marker run is
/// not a valid heading level.
pub fn parse_heading(input: &str) -> ParseResult<(Option<Heading>, &str)> {
  let (first_line, rest) = input.split_once('\n').unwrap_or((input, ""));

  let Some((markers, title)) = split_heading_line(first_line) else {
    return Ok((None, input.trim_start()));
  };

  let heading = Heading {
    level: HeadingLevel::from_markers(markers)?,
    title: title.to_string(),
  };

  Ok((Some(heading), rest.trim_start()))
}

/// Parse an optional fenced block at the very start of `input`.
///
/// The opening line is the fence followed by a language tag of one or more
/// word characters. The block ends at the first line that is exactly the
/// fence, followed by a newline or the end of input.
#[must_use]
pub fn parse_fence(input: &str) -> Fence<'_> {
  let Some(after_open) = input.strip_prefix(FENCE) else {
    return Fence::Absent;
  };
  let Some((tag, body)) = after_open.split_once('\n') else {
    return Fence::Absent;
  };

  let tag = tag.strip_suffix('\r').unwrap_or(tag);
  if tag.is_empty() || !tag.chars().all(is_word_char) {
    return Fence::Absent;
  }

  let mut line_start = 0;
  for line in body.split_inclusive('\n') {
    let line_end = line_start + line.len();
    let marker = line.trim_end_matches(['\n', '\r']);
    if marker == FENCE {
      let content = body[..line_start]
        .strip_suffix('\n')
        .unwrap_or(&body[..line_start]);
      return Fence::Closed {
        content,
        rest: &body[line_end..],
      };
    }
    line_start = line_end;
  }

  Fence::Unterminated
}

/// Trim a block and strip the trailing `;` the generator appends to
/// signatures.
#[must_use]
pub fn clean_block(content: &str) -> String {
  content
    .trim()
    .trim_end_matches(|c: char| c.is_whitespace() || c == ';')
    .to_string()
}

/// Split, preprocess and parse a whole page into its sections.
///
/// # Errors
///
/// Returns [`crate::ParseError::EmptyDocument`] for a blank page and
/// [`crate::ParseError::InvalidHeadingMarker`] for an over-long heading.
pub fn parse_sections(raw: &str) -> ParseResult<NonEmpty<Section>> {
  let sections = split_document(raw)?.try_map(|chunk| Section::parse(&chunk))?;
  log::trace!("Parsed {} sections", sections.len());
  Ok(sections)
}
