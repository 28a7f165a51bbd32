//! File-level processing pipeline for one assembled print page.
use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use kuchikikiki::NodeRef;
use log::{info, warn};
use markup5ever::local_name;
use ptoc_outline::{
  ENUMERATE_CLASS,
  OutlineOptions,
  OutlineSynthesizer,
  SynthesisError,
  enter_print_mode,
  extract::PAGE_ROOT_ID,
  hide_navigation_chrome,
};
use tendril::TendrilSink;

use crate::config::Config;

/// Run the full pipeline: parse the page, synthesize outline and labels,
/// apply the configured print-view adjustments, and write the result.
///
/// A page without an outline mount point is still written out; it merely
/// ships without an outline.
///
/// # Errors
///
/// Returns an error when no input is configured or when reading, parsing,
/// or writing the page fails.
pub fn process_page(config: &Config) -> Result<()> {
  let Some(input) = &config.input else {
    bail!(
      "No input page specified. Pass --input or set 'input' in the config \
       file."
    );
  };

  let html = fs::read_to_string(input).wrap_err_with(|| {
    format!("Failed to read input page: {}", input.display())
  })?;
  let document = kuchikikiki::parse_html().one(html.as_str());

  if config.enumerate_headings {
    enable_enumeration(&document);
  }

  let synthesizer = OutlineSynthesizer::new(OutlineOptions {
    toc_depth: Some(config.toc_depth),
  });
  match synthesizer.apply(&document) {
    Ok(()) => info!("outline synthesized for {}", input.display()),
    Err(SynthesisError::MissingMountPoint) => warn!(
      "no outline mount point in {}; page left without an outline",
      input.display()
    ),
  }

  if config.hide_chrome {
    hide_navigation_chrome(&document);
  }

  if config.print_theme {
    // The processed page *is* the print view; only the entry half of the
    // theme protocol applies here.
    let _previous = enter_print_mode(&document);
  }

  let output = config.output.as_ref().unwrap_or(input);
  let mut serialized = Vec::new();
  document
    .serialize(&mut serialized)
    .wrap_err("Failed to serialize processed page")?;
  fs::write(output, serialized).wrap_err_with(|| {
    format!("Failed to write output page: {}", output.display())
  })?;

  info!("Wrote print-ready page to {}", output.display());
  Ok(())
}

/// Tag the page root with the enumeration marker class so the generated
/// label rules take effect.
fn enable_enumeration(document: &NodeRef) {
  let Ok(root) = document.select_first(&format!("#{PAGE_ROOT_ID}")) else {
    return;
  };

  let mut attributes = root.attributes.borrow_mut();
  let class = attributes
    .get(local_name!("class"))
    .unwrap_or_default()
    .to_string();
  if class.split_whitespace().any(|c| c == ENUMERATE_CLASS) {
    return;
  }

  let updated = if class.is_empty() {
    ENUMERATE_CLASS.to_string()
  } else {
    format!("{class} {ENUMERATE_CLASS}")
  };
  attributes.insert(local_name!("class"), updated);
}
