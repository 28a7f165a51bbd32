//! Generated-content label rules for heading enumeration.
//!
//! Each numbered entry gets one rule injecting its dotted path as generated
//! content, active only under the [`ENUMERATE_CLASS`] marker class. Heading
//! text is never mutated; removing the marker class removes every label.
use std::fmt::Write;

use crate::types::NumberedMarker;

/// Marker class that activates the generated numbering labels.
pub const ENUMERATE_CLASS: &str = "print-site-enumerate-headings";

/// Emit one label rule per numbered marker, container titles included.
#[must_use]
pub fn build_stylesheet(markers: &[NumberedMarker]) -> String {
  let mut rules = String::new();
  collect_rules(markers, &mut rules);
  rules
}

fn collect_rules(markers: &[NumberedMarker], rules: &mut String) {
  for marker in markers {
    let _ = writeln!(
      rules,
      ".{ENUMERATE_CLASS} #{anchor}:before {{ content: '{path} ' }}",
      anchor = marker.path.anchor_id(),
      path = marker.path,
    );
    collect_rules(&marker.children, rules);
  }
}
