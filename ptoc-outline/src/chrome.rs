//! Hiding of host-theme navigation chrome on the printable view.
use kuchikikiki::NodeRef;
use log::debug;
use markup5ever::local_name;

/// Navigational chrome hidden from the printable view, by class name.
const CHROME_CLASSES: &[&str] =
  &["md-sidebar--primary", "md-tabs", "md-search", "navbar"];

/// Hide the first element matching each known chrome class.
///
/// Elements are hidden in place, never removed, and classes with no match
/// are a no-op.
pub fn hide_navigation_chrome(document: &NodeRef) {
  for class in CHROME_CLASSES {
    hide_first(document, class);
  }
}

fn hide_first(document: &NodeRef, class: &str) {
  let Ok(found) = document.select_first(&format!(".{class}")) else {
    return;
  };

  let mut attributes = found.attributes.borrow_mut();
  let style = match attributes.get(local_name!("style")) {
    Some(existing) if !existing.trim().is_empty() => {
      format!("{}; display: none", existing.trim_end().trim_end_matches(';'))
    },
    _ => "display: none".to_string(),
  };
  attributes.insert(local_name!("style"), style);
  debug!("hid chrome element .{class}");
}
