//! Dotted numbering assignment over the retained marker tree.
use log::warn;

use crate::types::{LABEL_ANCHOR_PREFIX, Marker, NumberPath, NumberedMarker};

/// Assign a numbering path to every retained marker.
///
/// One counter is open per container depth. Every marker at a depth, heading
/// and container alike, increments that depth's counter and appends it to
/// the path inherited from the enclosing container; container children then
/// inherit the container's effective path as their prefix.
///
/// A well-formed `heading-number` attribute supplies the full path for its
/// marker, so numbering assigned upstream survives filtering and
/// re-ordering. Markers dropped during extraction never reach this walk and
/// therefore never consume an ordinal.
#[must_use]
pub fn assign_numbers(markers: Vec<Marker>) -> Vec<NumberedMarker> {
  number_level(markers, &NumberPath::root())
}

fn number_level(
  markers: Vec<Marker>,
  prefix: &NumberPath,
) -> Vec<NumberedMarker> {
  let mut ordinal = 0u32;

  markers
    .into_iter()
    .map(|marker| {
      ordinal += 1;
      let computed = prefix.child(ordinal);
      let path = marker
        .number
        .as_deref()
        .and_then(NumberPath::parse)
        .unwrap_or(computed);

      if marker.id.starts_with(LABEL_ANCHOR_PREFIX) {
        warn!(
          "marker id '{}' falls inside the generated label anchor \
           namespace; numbering lookups may target the wrong entry",
          marker.id
        );
      }

      let children = number_level(marker.children, &path);
      NumberedMarker {
        kind: marker.kind,
        level: marker.level,
        id: marker.id,
        text: marker.text,
        path,
        children,
      }
    })
    .collect()
}
