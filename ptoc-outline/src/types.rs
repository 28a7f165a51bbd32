//! Types for the ptoc-outline public API.
use std::fmt;

/// Prefix of anchor identifiers derived from numbering paths.
pub const LABEL_ANCHOR_PREFIX: &str = "toc-heading-";

/// Classification of an outline-relevant node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
  /// A leaf heading region.
  Heading,
  /// A structural section wrapper grouping further markers.
  SectionContainer,
}

/// A node in the assembled document recognized as outline-relevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
  /// Whether this marker is a leaf heading or a section container.
  pub kind: MarkerKind,

  /// Heading rank (1-6); for containers, the rank of the title heading.
  pub level: u8,

  /// Target anchor identifier. Non-empty for every retained marker.
  pub id: String,

  /// First text content of the heading, trailing decoration excluded.
  pub text: String,

  /// Precomputed dotted numbering carried by the assembly step, when
  /// present and well-formed.
  pub number: Option<String>,

  /// Nested markers; populated only for `SectionContainer`.
  pub children: Vec<Marker>,
}

/// Dotted numbering path assigned to a retained marker.
///
/// Renders dot-joined (`1.2.3`); [`NumberPath::anchor_id`] substitutes the
/// dots with dashes, which keeps the derivation injective for valid paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPath(Vec<u32>);

impl NumberPath {
  /// The empty path prefix at the top of the document.
  #[must_use]
  pub const fn root() -> Self {
    Self(Vec::new())
  }

  /// Parse a dotted path such as `2.1.3`.
  ///
  /// Returns `None` for anything that is not a dot-joined sequence of
  /// positive integers.
  #[must_use]
  pub fn parse(raw: &str) -> Option<Self> {
    let components = raw
      .split('.')
      .map(|part| part.parse::<u32>().ok().filter(|c| *c > 0))
      .collect::<Option<Vec<u32>>>()?;
    if components.is_empty() {
      return None;
    }
    Some(Self(components))
  }

  /// Path components, outermost first.
  #[must_use]
  pub fn components(&self) -> &[u32] {
    &self.0
  }

  /// Extend this path with a child ordinal.
  #[must_use]
  pub fn child(&self, ordinal: u32) -> Self {
    let mut components = self.0.clone();
    components.push(ordinal);
    Self(components)
  }

  /// Derive the anchor identifier scoping this path's label rule.
  #[must_use]
  pub fn anchor_id(&self) -> String {
    format!("{LABEL_ANCHOR_PREFIX}{}", self.to_string().replace('.', "-"))
  }
}

impl fmt::Display for NumberPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut components = self.0.iter();
    if let Some(first) = components.next() {
      write!(f, "{first}")?;
      for component in components {
        write!(f, ".{component}")?;
      }
    }
    Ok(())
  }
}

/// A retained marker enriched with its numbering path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedMarker {
  /// Whether this marker is a leaf heading or a section container.
  pub kind: MarkerKind,

  /// Heading rank (1-6); for containers, the rank of the title heading.
  pub level: u8,

  /// Target anchor identifier.
  pub id: String,

  /// Entry text, taken verbatim from the marker.
  pub text: String,

  /// Effective numbering path of this marker.
  pub path: NumberPath,

  /// Numbered children; populated only for `SectionContainer`.
  pub children: Vec<NumberedMarker>,
}

/// The two write-once artifacts of a synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
  /// Nested outline list markup.
  pub outline: String,

  /// Concatenated label rules for the generated style block.
  pub stylesheet: String,
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Tests can unwrap")]

  use super::*;

  #[test]
  fn parses_dotted_paths() {
    let path = NumberPath::parse("2.1.3").unwrap();
    assert_eq!(path.components(), &[2, 1, 3]);
    assert_eq!(path.to_string(), "2.1.3");
  }

  #[test]
  fn rejects_malformed_paths() {
    assert_eq!(NumberPath::parse(""), None);
    assert_eq!(NumberPath::parse("1..2"), None);
    assert_eq!(NumberPath::parse("1.a"), None);
    assert_eq!(NumberPath::parse("0.1"), None);
    assert_eq!(NumberPath::parse("1.2."), None);
  }

  #[test]
  fn anchor_ids_substitute_only_dots() {
    let path = NumberPath::root().child(1).child(12);
    assert_eq!(path.anchor_id(), "toc-heading-1-12");
  }

  #[test]
  fn anchor_derivation_is_injective_across_neighbors() {
    // 1.2 / 12 must not collide after substitution
    let nested = NumberPath::parse("1.2").unwrap();
    let flat = NumberPath::parse("12").unwrap();
    assert_ne!(nested.anchor_id(), flat.anchor_id());
  }
}
