#![allow(clippy::unwrap_used, reason = "Tests can unwrap")]
//! Round-trip tests for the file-level processing pipeline.

use std::fs;

use ptoc::config::Config;
use ptoc::process::process_page;

const PAGE: &str = "<html><head><style>body {}</style></head><body>\
  <div class=\"md-sidebar--primary\">sidebar</div>\
  <div id=\"print-page-toc\" data-toc-depth=\"6\"><nav></nav></div>\
  <div id=\"print-site-page\">\
    <section class=\"print-page\" id=\"sec-guide\">\
      <h1>Guide</h1>\
      <article class=\"print-page\" id=\"h-intro\"><h1>Intro</h1></article>\
    </section>\
    <article class=\"print-page\" id=\"h-app\"><h1>Appendix</h1></article>\
  </div></body></html>";

fn config_for(input: &std::path::Path, output: &std::path::Path) -> Config {
  Config {
    input: Some(input.to_path_buf()),
    output: Some(output.to_path_buf()),
    ..Config::default()
  }
}

#[test]
fn pipeline_writes_outline_labels_and_marker_class() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("page.html");
  let output = dir.path().join("out.html");
  fs::write(&input, PAGE).unwrap();

  process_page(&config_for(&input, &output)).unwrap();
  let html = fs::read_to_string(&output).unwrap();

  assert!(html.contains("print-site-enumerate-headings"));
  assert!(html.contains("href=\"#h-intro\""));
  assert!(html.contains("href=\"#h-app\""));
  assert_eq!(html.matches("data-ptoc-styles").count(), 1);
  assert!(html.contains("content: '1.1 '"));
  // Chrome stays visible unless asked otherwise.
  assert!(!html.contains("display: none"));
}

#[test]
fn pipeline_hides_chrome_and_applies_print_theme_on_request() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("page.html");
  let output = dir.path().join("out.html");
  fs::write(&input, PAGE).unwrap();

  let config = Config {
    hide_chrome: true,
    print_theme: true,
    ..config_for(&input, &output)
  };
  process_page(&config).unwrap();
  let html = fs::read_to_string(&output).unwrap();

  assert!(html.contains("display: none"));
  assert!(html.contains("sidebar"));
  assert!(html.contains("data-md-color-scheme=\"default\""));
}

#[test]
fn page_without_mount_point_is_still_written() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("page.html");
  let output = dir.path().join("out.html");
  fs::write(
    &input,
    "<html><body><div id=\"print-site-page\">\
     <article class=\"print-page\" id=\"a\"><h1>A</h1></article>\
     </div></body></html>",
  )
  .unwrap();

  process_page(&config_for(&input, &output)).unwrap();
  let html = fs::read_to_string(&output).unwrap();

  assert!(html.contains("print-site-page"));
  assert!(!html.contains("data-ptoc-styles"));
}

#[test]
fn input_is_overwritten_when_no_output_is_set() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("page.html");
  fs::write(&input, PAGE).unwrap();

  let config = Config {
    input: Some(input.clone()),
    ..Config::default()
  };
  process_page(&config).unwrap();
  let html = fs::read_to_string(&input).unwrap();

  assert!(html.contains("data-ptoc-styles"));
}

#[test]
fn missing_input_is_an_error() {
  assert!(process_page(&Config::default()).is_err());
}
