//! Print-mode theme swapping for the host theme.
//!
//! The two phases form a symmetric protocol: the value restored on exit is
//! exactly the value observed on entry, including its absence.
use kuchikikiki::NodeRef;

/// Theme attribute toggled around a print pass.
pub const THEME_ATTR: &str = "data-md-color-scheme";

/// Color scheme forced while printing.
pub const PRINT_SCHEME: &str = "default";

/// Theme value observed immediately before entering print mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
  previous: Option<String>,
}

/// Swap the document theme to the print scheme, recording the value it
/// replaces.
#[must_use]
pub fn enter_print_mode(document: &NodeRef) -> ThemeState {
  let Ok(body) = document.select_first("body") else {
    return ThemeState { previous: None };
  };

  let mut attributes = body.attributes.borrow_mut();
  let previous = attributes.get(THEME_ATTR).map(ToOwned::to_owned);
  attributes.insert(THEME_ATTR, PRINT_SCHEME.to_string());
  ThemeState { previous }
}

/// Restore exactly the theme value recorded when print mode was entered.
pub fn exit_print_mode(document: &NodeRef, state: ThemeState) {
  let Ok(body) = document.select_first("body") else {
    return;
  };

  let mut attributes = body.attributes.borrow_mut();
  match state.previous {
    Some(value) => {
      attributes.insert(THEME_ATTR, value);
    },
    None => {
      attributes.remove(THEME_ATTR);
    },
  }
}
