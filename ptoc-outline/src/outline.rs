//! Nested outline list construction.
use std::fmt::Write;

use crate::types::{MarkerKind, NumberedMarker};

/// Class prefix encoding an entry's rendering depth.
pub const LEVEL_CLASS_PREFIX: &str = "print-site-toc-level-";

/// Render the annotated marker tree as one nested list.
///
/// Output order is extraction order. A container opens a nested wrapper
/// tagged with its title rank plus the current recursion depth, emits its
/// own title entry, then recurses; headings emit a single entry carrying
/// the depth class themselves. Entries whose effective depth exceeds
/// `max_depth` are omitted (numbering is unaffected; pruning happens after
/// paths are assigned).
#[must_use]
pub fn build_outline(
  markers: &[NumberedMarker],
  max_depth: Option<u8>,
) -> String {
  let mut out = String::from("<ul>");
  render_level(markers, 0, max_depth, &mut out);
  out.push_str("</ul>");
  out
}

fn render_level(
  markers: &[NumberedMarker],
  depth: u8,
  max_depth: Option<u8>,
  out: &mut String,
) {
  for marker in markers {
    let effective = marker.level.saturating_add(depth);
    if max_depth.is_some_and(|limit| effective > limit) {
      continue;
    }

    match marker.kind {
      MarkerKind::SectionContainer => {
        let _ = write!(out, "<ul class='{LEVEL_CLASS_PREFIX}{effective}'>");
        push_entry(marker, None, out);
        render_level(&marker.children, depth + 1, max_depth, out);
        out.push_str("</ul>");
      },
      MarkerKind::Heading => push_entry(marker, Some(effective), out),
    }
  }
}

/// Emit one `<li>` entry. Container titles carry no depth class of their
/// own; the enclosing wrapper already does.
fn push_entry(
  marker: &NumberedMarker,
  depth_class: Option<u8>,
  out: &mut String,
) {
  let class = depth_class
    .map(|depth| format!("{LEVEL_CLASS_PREFIX}{depth}"))
    .unwrap_or_default();
  let _ = write!(
    out,
    "<li class='{class}'><a id='{anchor}' href='#{href}'>{text}</a></li>",
    anchor = marker.path.anchor_id(),
    href = marker.id,
    text = html_escape::encode_text(&marker.text),
  );
}
