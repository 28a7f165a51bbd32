//! Marker extraction from the assembled print page.
//!
//! Scans the printable regions of the document for outline candidates and
//! produces an ordered, filtered marker tree. Extraction never fails: a
//! candidate that is malformed in any way is dropped, not reported.
use std::sync::OnceLock;

use kuchikikiki::NodeRef;
use log::debug;
use markup5ever::local_name;
use regex::Regex;

use crate::types::{Marker, MarkerKind};

/// Id of the element wrapping all printable page regions.
pub const PAGE_ROOT_ID: &str = "print-site-page";

/// Class designating printable content regions.
pub const PRINT_PAGE_CLASS: &str = "print-page";

/// Attribute carrying a precomputed dotted numbering path.
pub const HEADING_NUMBER_ATTR: &str = "heading-number";

/// Candidate ids containing any of these fragments belong to injected UI
/// chrome (modal dialogs), not content.
const RESERVED_MODAL_IDS: &[&str] = &["keyboardModalLabel"];

fn heading_number_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)*$").unwrap_or_else(|_| {
      // guaranteed-valid fallback that matches nothing
      Regex::new(r"[^\s\S]").unwrap()
    })
  })
}

/// Extract the ordered marker tree from the document.
///
/// Returns an empty sequence when the page root is absent; the outline then
/// degrades to an empty list rather than aborting the pass.
#[must_use]
pub fn extract_markers(document: &NodeRef) -> Vec<Marker> {
  let Ok(root) = document.select_first(&format!("#{PAGE_ROOT_ID}")) else {
    debug!("page root #{PAGE_ROOT_ID} not found; no markers extracted");
    return Vec::new();
  };
  collect_markers(root.as_node())
}

/// Walk the element children of `parent` in document order, keeping every
/// qualifying candidate and recursing into section containers.
fn collect_markers(parent: &NodeRef) -> Vec<Marker> {
  let mut markers = Vec::new();

  for child in parent.children() {
    let Some(element) = child.as_element() else {
      continue;
    };
    if !has_class(&child, PRINT_PAGE_CLASS) {
      continue;
    }

    // Grouped regions may leave the id on the title heading instead of the
    // wrapper itself.
    let resolved_id = non_empty_attr(&child, "id").or_else(|| {
      if element.name.local == local_name!("section") {
        title_heading_id(&child)
      } else {
        None
      }
    });
    let Some(id) = resolved_id else {
      debug!("dropping printable region without an id");
      continue;
    };
    if is_reserved_modal_id(&id) {
      debug!("dropping reserved modal candidate '{id}'");
      continue;
    }

    let Some((level, text)) = title_of(&child) else {
      debug!("dropping candidate '{id}' without an extractable title");
      continue;
    };
    let number = heading_number_of(&child);

    if element.name.local == local_name!("section") {
      let children = collect_markers(&child);
      if children.is_empty() {
        // All descendants filtered out; the container neither renders a
        // wrapper nor consumes a numbering ordinal.
        debug!("eliding empty section container '{id}'");
        continue;
      }
      markers.push(Marker {
        kind: MarkerKind::SectionContainer,
        level,
        id,
        text,
        number,
        children,
      });
    } else {
      markers.push(Marker {
        kind: MarkerKind::Heading,
        level,
        id,
        text,
        number,
        children: Vec::new(),
      });
    }
  }

  markers
}

/// Rank and title of a candidate, read from its first element child.
///
/// The title is the heading's leading text node only, so trailing decoration
/// elements (permalink anchors and the like) never leak into the outline.
fn title_of(candidate: &NodeRef) -> Option<(u8, String)> {
  let heading = candidate
    .children()
    .find(|child| child.as_element().is_some())?;
  let level = heading
    .as_element()
    .and_then(|element| heading_rank(element.name.local.as_ref()))?;
  let text = heading
    .first_child()
    .and_then(|first| first.as_text().map(|t| t.borrow().trim().to_string()))?;
  if text.is_empty() {
    return None;
  }
  Some((level, text))
}

/// Id carried by a container's title heading, when the wrapper has none of
/// its own.
fn title_heading_id(candidate: &NodeRef) -> Option<String> {
  let heading = candidate
    .children()
    .find(|child| child.as_element().is_some())?;
  non_empty_attr(&heading, "id")
}

fn heading_rank(tag: &str) -> Option<u8> {
  match tag {
    "h1" => Some(1),
    "h2" => Some(2),
    "h3" => Some(3),
    "h4" => Some(4),
    "h5" => Some(5),
    "h6" => Some(6),
    _ => None,
  }
}

fn is_reserved_modal_id(id: &str) -> bool {
  RESERVED_MODAL_IDS
    .iter()
    .any(|fragment| id.contains(fragment))
}

fn has_class(node: &NodeRef, class: &str) -> bool {
  let Some(element) = node.as_element() else {
    return false;
  };
  let attributes = element.attributes.borrow();
  attributes
    .get(local_name!("class"))
    .is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

fn non_empty_attr(node: &NodeRef, name: &str) -> Option<String> {
  let element = node.as_element()?;
  let attributes = element.attributes.borrow();
  attributes
    .get(name)
    .map(str::trim)
    .filter(|value| !value.is_empty())
    .map(ToOwned::to_owned)
}

/// Validated `heading-number` attribute of a candidate, if any.
fn heading_number_of(node: &NodeRef) -> Option<String> {
  let raw = non_empty_attr(node, HEADING_NUMBER_ATTR)?;
  if heading_number_pattern().is_match(&raw) {
    Some(raw)
  } else {
    debug!("ignoring malformed heading-number attribute '{raw}'");
    None
  }
}
