//! Rendering the summary of one page.
use std::fmt;

use crate::{
  error::ParseResult,
  heading::HeadingLevel,
  nonempty::NonEmpty,
  section::{FENCE, Section},
  select::canonical_block,
};

/// Level of the heading that labels each rendered function.
pub const UNIT_HEADING_LEVEL: HeadingLevel = HeadingLevel::H3;

/// Options controlling how summaries are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
  /// Language tag of the fenced signature block.
  pub fence_language: String,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      fence_language: "ts".to_string(),
    }
  }
}

/// Final summary of one documented function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
  /// Function name, taken from the page's file stem.
  pub name: String,
  /// Fenced signature followed by the description.
  pub body: String,
}

impl fmt::Display for RenderedUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{UNIT_HEADING_LEVEL} `{}`\n\n{}", self.name, self.body)
  }
}

/// Wrap `block` in a fence and append `contents` unchanged.
#[must_use]
pub fn render_block(
  block: &str,
  contents: &str,
  options: &RenderOptions,
) -> String {
  let open = format!("{FENCE}{}", options.fence_language);
  [open.as_str(), block, FENCE, contents].join("\n")
}

/// Render a page's sections.
///
/// The description always comes from the first section, even when the
/// signature is assembled from later call-signature sections.
///
/// # Errors
///
/// Returns any error from [`canonical_block`].
pub fn render_sections(
  sections: &NonEmpty<Section>,
  options: &RenderOptions,
) -> ParseResult<String> {
  let block = canonical_block(sections)?;
  Ok(render_block(&block, &sections.first().contents, options))
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;
  use crate::section::parse_sections;

  #[test]
  fn test_render_block_layout() {
    let rendered =
      render_block("foo(): void", "Does a thing.", &RenderOptions::default());
    assert_eq!(rendered, "```ts\nfoo(): void\n```\nDoes a thing.");
  }

  #[test]
  fn test_render_block_custom_language() {
    let options = RenderOptions {
      fence_language: "typescript".to_string(),
    };
    assert_eq!(render_block("x", "", &options), "```typescript\nx\n```\n");
  }

  #[test]
  fn test_overloads_use_first_section_description() {
    let raw = "# foo\n\nOverall description.\n\n## Call Signature\n\n```ts\n\
               A()\n```\n\nFirst overload.\n\n## Call Signature\n\n```ts\nB()\
               \n```\n\nSecond overload.";
    let sections = parse_sections(raw).unwrap();
    let rendered =
      render_sections(&sections, &RenderOptions::default()).unwrap();
    assert_eq!(rendered, "```ts\nA()\n\nB()\n```\nOverall description.");
  }

  #[test]
  fn test_rendered_unit_display() {
    let unit = RenderedUnit {
      name: "isDefined".to_string(),
      body: "```ts\nisDefined(x)\n```\nChecks.".to_string(),
    };
    assert_eq!(
      unit.to_string(),
      "### `isDefined`\n\n```ts\nisDefined(x)\n```\nChecks."
    );
  }
}
