use std::fmt;

use crate::error::{ParseError, ParseResult};

/// Character that introduces a markdown heading.
pub const HEADING_MARKER: char = '#';

/// Heading depth supported by the section parser.
///
/// Generated pages never nest deeper than four levels, so anything else is
/// treated as malformed input rather than prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
  H1 = 1,
  H2 = 2,
  H3 = 3,
  H4 = 4,
}

impl HeadingLevel {
  /// Classify a run of heading markers.
  ///
  /// # Errors
  ///
  /// Returns [`ParseError::InvalidHeadingMarker`] if `markers` is empty, is
  /// longer than four characters, or contains anything other than `#`.
  pub fn from_markers(markers: &str) -> ParseResult<Self> {
    if !markers.chars().all(|c| c == HEADING_MARKER) {
      return Err(ParseError::InvalidHeadingMarker(markers.to_string()));
    }

    match markers.len() {
      1 => Ok(Self::H1),
      2 => Ok(Self::H2),
      3 => Ok(Self::H3),
      4 => Ok(Self::H4),
      _ => Err(ParseError::InvalidHeadingMarker(markers.to_string())),
    }
  }

  /// Numeric depth, 1 through 4.
  #[must_use]
  pub const fn depth(self) -> u8 {
    self as u8
  }

  /// The marker run that produces this level, e.g. `###`.
  #[must_use]
  pub const fn markers(self) -> &'static str {
    match self {
      Self::H1 => "#",
      Self::H2 => "##",
      Self::H3 => "###",
      Self::H4 => "####",
    }
  }
}

impl fmt::Display for HeadingLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.markers())
  }
}

/// A heading line: its level and trimmed, non-empty title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
  pub level: HeadingLevel,
  pub title: String,
}

impl Heading {
  /// Whether the title starts with `prefix`, ignoring ASCII case.
  #[must_use]
  pub fn title_starts_with(&self, prefix: &str) -> bool {
    self
      .title
      .get(..prefix.len())
      .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
  }
}

/// Split a heading line into its marker run and trimmed title.
///
/// A heading line is one or more `#`, at least one space or tab, then a
/// non-empty title. The marker run is returned unvalidated so that callers can
/// report over-long runs instead of treating them as prose.
#[must_use]
pub fn split_heading_line(line: &str) -> Option<(&str, &str)> {
  let line = line.strip_suffix('\r').unwrap_or(line);
  let title_start = line.find(|c: char| c != HEADING_MARKER)?;
  if title_start == 0 {
    return None;
  }

  let (markers, rest) = line.split_at(title_start);
  if !rest.starts_with([' ', '\t']) {
    return None;
  }

  let title = rest.trim();
  if title.is_empty() {
    return None;
  }

  Some((markers, title))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_marker_runs() {
    assert_eq!(HeadingLevel::from_markers("#"), Ok(HeadingLevel::H1));
    assert_eq!(HeadingLevel::from_markers("##"), Ok(HeadingLevel::H2));
    assert_eq!(HeadingLevel::from_markers("###"), Ok(HeadingLevel::H3));
    assert_eq!(HeadingLevel::from_markers("####"), Ok(HeadingLevel::H4));
  }

  #[test]
  fn test_invalid_marker_runs() {
    for markers in ["", "#####", "##x", " #", "=="] {
      assert_eq!(
        HeadingLevel::from_markers(markers),
        Err(ParseError::InvalidHeadingMarker(markers.to_string())),
        "markers: {markers:?}"
      );
    }
  }

  #[test]
  fn test_level_round_trips_through_markers() {
    let level = HeadingLevel::H3;
    assert_eq!(level.depth(), 3);
    assert_eq!(HeadingLevel::from_markers(level.markers()), Ok(level));
    assert_eq!(level.to_string(), "###");
  }

  #[test]
  fn test_split_heading_line() {
    assert_eq!(
      split_heading_line("## Call Signature"),
      Some(("##", "Call Signature"))
    );
    assert_eq!(split_heading_line("#\tfoo  "), Some(("#", "foo")));
    assert_eq!(split_heading_line("##### deep"), Some(("#####", "deep")));
    assert_eq!(split_heading_line("#foo"), None);
    assert_eq!(split_heading_line("##   "), None);
    assert_eq!(split_heading_line("###"), None);
    assert_eq!(split_heading_line("text # not a heading"), None);
  }

  #[test]
  fn test_title_prefix_is_case_insensitive() {
    let heading = Heading {
      level: HeadingLevel::H2,
      title: "Call Signature".to_string(),
    };
    assert!(heading.title_starts_with("call signature"));
    assert!(!heading.title_starts_with("call signatures"));

    let short = Heading {
      level: HeadingLevel::H2,
      title: "Call".to_string(),
    };
    assert!(!short.title_starts_with("call signature"));
  }
}
