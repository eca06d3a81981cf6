#![allow(clippy::unwrap_used, reason = "Fine in tests")]

use sigdoc_markdown::{
  Document,
  DocumentError,
  HeadingLevel,
  ParseError,
  RenderOptions,
  canonical_block,
  parse_sections,
  split::{preprocess, split_chunks},
};

/// A single-signature page as the TypeDoc markdown plugin writes it.
const SINGLE_SIGNATURE: &str = r"```ts
function isNonEmpty<T>(arr: T[]): arr is [T, ...T[]];
```

Check if an array is non-empty. See [isEmpty](isEmpty.md).

## Type Parameters

### T

`T`

## Parameters

### arr

`T`[]

## Returns

`arr is [T, ...T[]]`

## Example

```ts
isNonEmpty([1]) // true
```
";

/// An overloaded function: no leading block, one sub-section per signature.
const OVERLOADED: &str = r"## Call Signature

```ts
function getMatch(re: RegExp, s: string): string;
```

Return the first match, or throw.

### Parameters

#### re

`RegExp`

### Example

```ts
getMatch(/a/, 'abc')
```

## Call Signature

```ts
function getMatch(re: RegExp): (s: string) => string;
```

Curried variant.

### Parameters

#### re

`RegExp`
";

#[test]
fn test_single_signature_page() {
  let sections = parse_sections(SINGLE_SIGNATURE).unwrap();
  let first = sections.first();
  assert!(first.heading.is_none());
  assert_eq!(
    first.contents,
    "Check if an array is non-empty. See `isEmpty`."
  );
  assert_eq!(
    canonical_block(&sections).unwrap(),
    "function isNonEmpty<T>(arr: T[]): arr is [T, ...T[]]"
  );
}

#[test]
fn test_example_heading_does_not_open_a_section() {
  let sections = parse_sections(SINGLE_SIGNATURE).unwrap();
  let titles: Vec<_> = sections
    .iter()
    .filter_map(|s| s.heading.as_ref())
    .map(|h| h.title.as_str())
    .collect();
  assert_eq!(titles, vec![
    "Type Parameters",
    "T",
    "Parameters",
    "arr",
    "Returns"
  ]);

  let returns = sections.iter().last().unwrap();
  assert!(returns.contents.contains("example:"));
}

#[test]
fn test_overloaded_page() {
  let doc = Document::new("functions/getMatch.md", OVERLOADED);
  let unit = doc.render(&RenderOptions::default()).unwrap();

  assert_eq!(unit.name, "getMatch");
  assert_eq!(
    unit.body,
    "```ts\nfunction getMatch(re: RegExp, s: string): string\n\nfunction \
     getMatch(re: RegExp): (s: string) => string\n```\nReturn the first \
     match, or throw."
  );
}

#[test]
fn test_overloaded_page_heading_levels() {
  let sections = parse_sections(OVERLOADED).unwrap();
  let levels: Vec<_> = sections
    .iter()
    .filter_map(|s| s.heading.as_ref())
    .map(|h| h.level)
    .collect();
  assert_eq!(levels, vec![
    HeadingLevel::H2,
    HeadingLevel::H3,
    HeadingLevel::H4,
    HeadingLevel::H2,
    HeadingLevel::H3,
    HeadingLevel::H4,
  ]);
}

#[test]
fn test_scenario_plain_text() {
  let sections = parse_sections("Some text").unwrap();
  assert_eq!(sections.len(), 1);
  let only = sections.first();
  assert_eq!(only.heading, None);
  assert_eq!(only.block, None);
  assert_eq!(only.contents, "Some text");
  assert_eq!(
    canonical_block(&sections),
    Err(ParseError::MissingPrimaryBlock)
  );
}

#[test]
fn test_scenario_headingless_block() {
  let sections =
    parse_sections("```ts\nfoo(x: number): void\n```\nDoes a thing.").unwrap();
  let only = sections.first();
  assert_eq!(only.block.as_deref(), Some("foo(x: number): void"));
  assert_eq!(only.contents, "Does a thing.");
  assert_eq!(canonical_block(&sections).unwrap(), "foo(x: number): void");
}

#[test]
fn test_scenario_two_call_signatures() {
  let raw = "# foo\n\n## Call Signature\n\n```ts\nA()\n```\n\n## Call \
             Signature\n\n```ts\nB()\n```";
  let sections = parse_sections(raw).unwrap();
  assert_eq!(canonical_block(&sections).unwrap(), "A()\n\nB()");
}

#[test]
fn test_scenario_overlong_heading() {
  assert_eq!(
    parse_sections("```ts\nf()\n```\n\n##### Deep\n\ntext").unwrap_err(),
    ParseError::InvalidHeadingMarker("#####".to_string())
  );
}

#[test]
fn test_headed_page_without_signatures() {
  let doc = Document::new("functions/odd.md", "# odd\n\nNo signatures.");
  let err = doc.render(&RenderOptions::default()).unwrap_err();
  assert!(matches!(err, DocumentError::Parse {
    source: ParseError::NoCallSignatureBlocks,
    ..
  }));
}

#[test]
fn test_blank_page() {
  let doc = Document::new("functions/blank.md", "\n  \n");
  let err = doc.render(&RenderOptions::default()).unwrap_err();
  assert!(matches!(err, DocumentError::Parse {
    source: ParseError::EmptyDocument,
    ..
  }));
}

#[test]
fn test_chunks_reconstruct_preprocessed_page() {
  for page in [SINGLE_SIGNATURE, OVERLOADED] {
    let text = preprocess(page);
    assert_eq!(split_chunks(&text).concat(), text);
  }
}
