//! # ptoc-outline: outline synthesis for assembled print pages
//!
//! This crate builds a navigable outline for a document produced by
//! concatenating many pages into one long printable page, and derives a
//! style sheet that renders dotted section numbers in front of each outline
//! entry without mutating any heading text.
//!
//! The pipeline is a chain of pure functions over a parsed DOM: extract the
//! marker tree, assign dotted numbering paths, render the nested outline
//! list, and emit one generated-content rule per numbered entry. A thin
//! adapter ([`OutlineSynthesizer`]) performs the single read pass and the
//! single append pass against the live document.
//!
//! ## Quick Start
//!
//! ```rust
//! use ptoc_outline::{OutlineOptions, OutlineSynthesizer};
//! use tendril::TendrilSink;
//!
//! let page = r##"<html><head><style>body {}</style></head><body>
//!   <div id="print-page-toc" data-toc-depth="6"><nav></nav></div>
//!   <div id="print-site-page">
//!     <article class="print-page" id="getting-started">
//!       <h1>Getting Started<a class="headerlink" href="#getting-started">&para;</a></h1>
//!     </article>
//!   </div>
//! </body></html>"##;
//!
//! let document = kuchikikiki::parse_html().one(page);
//! let synthesizer = OutlineSynthesizer::new(OutlineOptions::default());
//! let synthesis = synthesizer.synthesize(&document).expect("mount point present");
//!
//! assert!(synthesis.outline.contains("href='#getting-started'"));
//! assert!(synthesis.stylesheet.contains("content: '1 '"));
//! ```
//!
//! ## Print-view collaborators
//!
//! Two small collaborator interfaces accompany the synthesizer for hosts
//! that render the page for printing: [`hide_navigation_chrome`] hides the
//! host theme's navigation elements in place, and
//! [`enter_print_mode`]/[`exit_print_mode`] swap the color scheme around a
//! print pass symmetrically.

pub mod chrome;
pub mod extract;
pub mod number;
pub mod outline;
pub mod stylesheet;
pub mod synthesizer;
pub mod theme;
mod types;

pub use crate::{
  chrome::hide_navigation_chrome,
  stylesheet::ENUMERATE_CLASS,
  synthesizer::{
    MOUNT_POINT_ID,
    OutlineOptions,
    OutlineSynthesizer,
    SynthesisError,
  },
  theme::{ThemeState, enter_print_mode, exit_print_mode},
  types::{Marker, MarkerKind, NumberPath, NumberedMarker, Synthesis},
};
