//! A sequence that always holds at least one element.

/// Ordered sequence with a guaranteed first element.
///
/// Every stage that works on "the sections of a document" takes this type, so
/// the first section can be read without re-checking the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmpty<T> {
  head: T,
  tail: Vec<T>,
}

impl<T> NonEmpty<T> {
  /// Create a sequence holding a single element.
  #[must_use]
  pub const fn new(head: T) -> Self {
    Self {
      head,
      tail: Vec::new(),
    }
  }

  /// Build from a vector, returning `None` if it is empty.
  #[must_use]
  pub fn from_vec(mut items: Vec<T>) -> Option<Self> {
    if items.is_empty() {
      return None;
    }
    let tail = items.split_off(1);
    let head = items.pop()?;
    Some(Self { head, tail })
  }

  /// The first element.
  #[must_use]
  pub const fn first(&self) -> &T {
    &self.head
  }

  /// Number of elements, never zero.
  #[must_use]
  pub fn len(&self) -> usize {
    self.tail.len() + 1
  }

  /// Always `false`; present for API symmetry with slices.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    false
  }

  /// Append an element to the end.
  pub fn push(&mut self, item: T) {
    self.tail.push(item);
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    std::iter::once(&self.head).chain(self.tail.iter())
  }

  /// Apply `f` to every element, preserving order and non-emptiness.
  #[must_use]
  pub fn map<U, F>(self, mut f: F) -> NonEmpty<U>
  where
    F: FnMut(T) -> U,
  {
    NonEmpty {
      head: f(self.head),
      tail: self.tail.into_iter().map(f).collect(),
    }
  }

  /// Fallible [`Self::map`]; stops at the first error.
  ///
  /// # Errors
  ///
  /// Returns the first error produced by `f`.
  pub fn try_map<U, E, F>(self, mut f: F) -> Result<NonEmpty<U>, E>
  where
    F: FnMut(T) -> Result<U, E>,
  {
    let head = f(self.head)?;
    let tail = self.tail.into_iter().map(f).collect::<Result<_, _>>()?;
    Ok(NonEmpty { head, tail })
  }

  #[must_use]
  pub fn into_vec(self) -> Vec<T> {
    let mut items = Vec::with_capacity(self.tail.len() + 1);
    items.push(self.head);
    items.extend(self.tail);
    items
  }
}

impl<T> IntoIterator for NonEmpty<T> {
  type IntoIter = std::vec::IntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.into_vec().into_iter()
  }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
  type IntoIter =
    std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    std::iter::once(&self.head).chain(self.tail.iter())
  }
}
