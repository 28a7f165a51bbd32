//! Read-then-append synthesis against a live document.
//!
//! The read pass derives both artifacts into local buffers without touching
//! a single node; the append pass then inserts them in two places. No node
//! visited during traversal is ever mutated mid-walk.
use kuchikikiki::NodeRef;
use log::debug;
use markup5ever::local_name;
use tendril::TendrilSink;
use thiserror::Error;

use crate::{
  extract::extract_markers,
  number::assign_numbers,
  outline::build_outline,
  stylesheet::build_stylesheet,
  types::Synthesis,
};

/// Id of the outline mount point element.
pub const MOUNT_POINT_ID: &str = "print-page-toc";

/// Mount point attribute carrying the maximum outline depth.
pub const TOC_DEPTH_ATTR: &str = "data-toc-depth";

/// Attribute marking the generated style block, so repeated passes replace
/// it instead of stacking duplicates.
pub const STYLE_MARKER_ATTR: &str = "data-ptoc-styles";

/// Conditions fatal to a synthesis pass.
///
/// Marker-level problems (missing attributes, empty titles, reserved ids)
/// are not errors; those candidates are silently dropped during extraction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisError {
  /// The outline mount point is absent. Callers degrade to "no outline
  /// rendered" and leave the rest of the document intact.
  #[error("outline mount point #print-page-toc not found")]
  MissingMountPoint,
}

/// Options for a synthesis pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineOptions {
  /// Maximum outline depth applied when the mount point itself carries no
  /// `data-toc-depth` attribute.
  pub toc_depth: Option<u8>,
}

/// Synthesizes the outline list and label stylesheet for one document.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineSynthesizer {
  options: OutlineOptions,
}

impl OutlineSynthesizer {
  /// Create a synthesizer with the given options.
  #[must_use]
  pub const fn new(options: OutlineOptions) -> Self {
    Self { options }
  }

  /// Pure read pass: derive both artifacts without mutating the tree.
  ///
  /// # Errors
  ///
  /// Returns [`SynthesisError::MissingMountPoint`] when the document has no
  /// outline mount point.
  pub fn synthesize(
    &self,
    document: &NodeRef,
  ) -> Result<Synthesis, SynthesisError> {
    let mount = find_mount_point(document)
      .ok_or(SynthesisError::MissingMountPoint)?;
    let max_depth = mount_toc_depth(&mount).or(self.options.toc_depth);

    let markers = assign_numbers(extract_markers(document));
    Ok(Synthesis {
      outline: build_outline(&markers, max_depth),
      stylesheet: build_stylesheet(&markers),
    })
  }

  /// Synthesize, then append both artifacts to the document: the outline
  /// list as the final child of the mount point's `<nav>` (or of the mount
  /// point itself), and a single marked style block immediately after the
  /// first existing style element.
  ///
  /// # Errors
  ///
  /// Returns [`SynthesisError::MissingMountPoint`] when the document has no
  /// outline mount point; nothing is appended in that case.
  pub fn apply(&self, document: &NodeRef) -> Result<(), SynthesisError> {
    let synthesis = self.synthesize(document)?;
    append_outline(document, &synthesis.outline);
    insert_stylesheet(document, &synthesis.stylesheet);
    Ok(())
  }
}

fn find_mount_point(document: &NodeRef) -> Option<NodeRef> {
  document
    .select_first(&format!("#{MOUNT_POINT_ID}"))
    .ok()
    .map(|mount| mount.as_node().clone())
}

fn mount_toc_depth(mount: &NodeRef) -> Option<u8> {
  let element = mount.as_element()?;
  let attributes = element.attributes.borrow();
  let raw = attributes.get(TOC_DEPTH_ATTR)?;
  raw.trim().parse().ok().filter(|depth| (1..=6).contains(depth))
}

fn append_outline(document: &NodeRef, outline: &str) {
  let Some(mount) = find_mount_point(document) else {
    return;
  };
  let target = mount
    .select_first("nav")
    .ok()
    .map_or(mount.clone(), |nav| nav.as_node().clone());
  for node in parse_fragment_nodes(outline) {
    target.append(node);
  }
}

fn insert_stylesheet(document: &NodeRef, stylesheet: &str) {
  // Detach a previously generated block so a repeat run replaces it.
  if let Ok(existing) = document.select(&format!("style[{STYLE_MARKER_ATTR}]"))
  {
    for style in existing.collect::<Vec<_>>() {
      debug!("replacing previously generated style block");
      style.as_node().detach();
    }
  }

  let style = NodeRef::new_element(
    markup5ever::QualName::new(
      None,
      markup5ever::ns!(html),
      local_name!("style"),
    ),
    vec![(
      kuchikikiki::ExpandedName::new("", STYLE_MARKER_ATTR),
      kuchikikiki::Attribute {
        prefix: None,
        value:  String::new(),
      },
    )],
  );
  style.append(NodeRef::new_text(stylesheet));

  if let Ok(first) = document.select_first("style") {
    first.as_node().insert_after(style);
  } else if let Ok(head) = document.select_first("head") {
    head.as_node().append(style);
  } else {
    document.append(style);
  }
}

/// Parse a markup fragment and return its body-level nodes.
fn parse_fragment_nodes(markup: &str) -> Vec<NodeRef> {
  let wrapped = format!("<html><body>{markup}</body></html>");
  let fragment = kuchikikiki::parse_html().one(wrapped.as_str());
  fragment
    .select_first("body")
    .ok()
    .map(|body| body.as_node().children().collect())
    .unwrap_or_default()
}
