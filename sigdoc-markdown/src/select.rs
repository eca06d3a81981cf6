//! Choosing the canonical signature block of a page.
//!
//! The generator renders a function with a single signature as one unlabeled
//! code block at the top of the page. A function with several overloads gets
//! no such block; instead each overload is a `Call Signature` sub-section with
//! its own block. Both shapes are reduced to a single block here.
use crate::{
  error::{ParseError, ParseResult},
  nonempty::NonEmpty,
  section::Section,
};

/// Separator placed between overload signatures.
pub const OVERLOAD_SEPARATOR: &str = "\n\n";

/// Select the canonical block for a page's sections.
///
/// # Errors
///
/// - [`ParseError::MissingPrimaryBlock`] if the first section has no heading
///   and no block.
/// - [`ParseError::NoCallSignatureBlocks`] if the first section has a heading
///   and no call-signature section carries a block.
/// - [`ParseError::EmptyCanonicalBlock`] if the selected block is blank.
pub fn canonical_block(sections: &NonEmpty<Section>) -> ParseResult<String> {
  let first = sections.first();

  let block = if first.heading.is_none() {
    first.block.clone().ok_or(ParseError::MissingPrimaryBlock)?
  } else {
    let signatures: Vec<&str> = sections
      .iter()
      .filter(|section| section.is_call_signature())
      .filter_map(|section| section.block.as_deref())
      .collect();

    if signatures.is_empty() {
      return Err(ParseError::NoCallSignatureBlocks);
    }

    log::trace!("Joining {} call signatures", signatures.len());
    signatures.join(OVERLOAD_SEPARATOR)
  };

  if block.trim().is_empty() {
    return Err(ParseError::EmptyCanonicalBlock(block));
  }

  Ok(block)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;
  use crate::{
    heading::{Heading, HeadingLevel},
    section::parse_sections,
  };

  fn section(title: Option<&str>, block: Option<&str>) -> Section {
    Section {
      heading:  title.map(|title| {
        Heading {
          level: HeadingLevel::H2,
          title: title.to_string(),
        }
      }),
      block:    block.map(str::to_string),
      contents: String::new(),
    }
  }

  #[test]
  fn test_headingless_first_section_block() {
    let sections =
      parse_sections("```ts\nfoo(x: number): void;\n```\nDoes.").unwrap();
    assert_eq!(canonical_block(&sections).unwrap(), "foo(x: number): void");
  }

  #[test]
  fn test_missing_primary_block() {
    let sections = parse_sections("Some text").unwrap();
    assert_eq!(
      canonical_block(&sections),
      Err(ParseError::MissingPrimaryBlock)
    );
  }

  #[test]
  fn test_call_signatures_are_joined_in_order() {
    let raw = "# foo\n\n## Call Signature\n\n```ts\nA()\n```\n\n\
               ## Call Signature\n\n```ts\nB()\n```\n";
    let sections = parse_sections(raw).unwrap();
    assert_eq!(canonical_block(&sections).unwrap(), "A()\n\nB()");
  }

  #[test]
  fn test_call_signature_match_ignores_case_and_suffix() {
    let mut sections = NonEmpty::new(section(Some("Overview"), None));
    sections.push(section(Some("CALL SIGNATURE"), Some("a(): void")));
    sections.push(section(Some("Parameters"), Some("ignored")));
    sections.push(section(Some("call signature (2)"), Some("b(): void")));
    sections.push(section(Some("Call Signature"), None));

    assert_eq!(canonical_block(&sections).unwrap(), "a(): void\n\nb(): void");
  }

  #[test]
  fn test_headed_first_section_counts_as_call_signature() {
    let mut sections =
      NonEmpty::new(section(Some("Call Signature"), Some("a()")));
    sections.push(section(Some("Call Signature"), Some("b()")));
    assert_eq!(canonical_block(&sections).unwrap(), "a()\n\nb()");
  }

  #[test]
  fn test_headed_first_section_ignores_other_blocks() {
    let mut sections = NonEmpty::new(section(Some("foo"), Some("foo()")));
    sections.push(section(Some("Returns"), Some("void")));
    assert_eq!(
      canonical_block(&sections),
      Err(ParseError::NoCallSignatureBlocks)
    );
  }

  #[test]
  fn test_blank_block_is_rejected() {
    let sections = NonEmpty::new(section(None, Some("")));
    assert_eq!(
      canonical_block(&sections),
      Err(ParseError::EmptyCanonicalBlock(String::new()))
    );
  }
}
