//! # sigdoc-markdown
//!
//! Reduces the per-function markdown pages produced by a documentation
//! generator (TypeDoc with its markdown plugin, for example) to compact
//! summaries: one canonical signature block followed by the function's
//! description.
//!
//! Each page goes through the same stages, each consuming the previous one's
//! output:
//!
//! 1. [`split`]: flatten `Example` headings, rewrite links to inline code and
//!    cut the page at heading lines.
//! 2. [`section`]: read every chunk as an optional heading, an optional fenced
//!    block and trailing prose.
//! 3. [`select`]: pick the canonical block, joining overload signatures.
//! 4. [`render`]: wrap the block in a fence and append the description.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigdoc_markdown::{Document, RenderOptions};
//!
//! let doc = Document::new(
//!   "functions/isEmpty.md",
//!   "```ts\nfunction isEmpty(xs: unknown[]): boolean;\n```\n\nTrue for `[]`.",
//! );
//! let unit = doc.render(&RenderOptions::default()).unwrap();
//!
//! assert_eq!(unit.name, "isEmpty");
//! assert_eq!(
//!   unit.to_string(),
//!   "### `isEmpty`\n\n```ts\nfunction isEmpty(xs: unknown[]): boolean\n```\nTrue for `[]`."
//! );
//! ```
//!
//! Every failure is fatal for its page: a summary with a silently dropped
//! function is worse than none.

pub mod document;
pub mod error;
pub mod heading;
pub mod nonempty;
pub mod render;
pub mod section;
pub mod select;
pub mod split;
mod utils;

pub use crate::{
  document::Document,
  error::{DocumentError, ParseError, ParseResult},
  heading::{Heading, HeadingLevel},
  nonempty::NonEmpty,
  render::{RenderOptions, RenderedUnit, render_sections},
  section::{Section, parse_sections},
  select::canonical_block,
};
