use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};

fn default_toc_depth() -> u8 {
  3
}

const fn default_true() -> bool {
  true
}

/// Default configuration template in TOML, commented so a fresh config file
/// explains itself.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# ptoc configuration file

# Path to the assembled HTML page to process
# input = "site/print_page/index.html"

# Output path for the processed page; the input is overwritten when omitted
# output = "site/print_page/index.html"

# Maximum outline depth (1-6), used when the page's mount point does not
# carry a data-toc-depth attribute
toc_depth = 3

# Tag the page root so the numbering labels render
enumerate_headings = true

# Hide host-theme navigation chrome on the processed page
hide_chrome = false

# Write the page with the print color scheme applied
print_theme = false
"#;

/// Default configuration template in JSON.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "toc_depth": 3,
  "enumerate_headings": true,
  "hide_chrome": false,
  "print_theme": false
}
"#;

/// Configuration options for ptoc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Path to the assembled HTML page to process
  #[serde(default)]
  pub input: Option<PathBuf>,

  /// Output path for the processed page; the input is overwritten when
  /// unset
  #[serde(default)]
  pub output: Option<PathBuf>,

  /// Maximum outline depth (1-6), used when the page's mount point does
  /// not specify one
  #[serde(default = "default_toc_depth")]
  pub toc_depth: u8,

  /// Whether to tag the page root so the numbering labels render
  #[serde(default = "default_true")]
  pub enumerate_headings: bool,

  /// Whether to hide host-theme navigation chrome
  #[serde(default)]
  pub hide_chrome: bool,

  /// Whether to write the page with the print color scheme applied
  #[serde(default)]
  pub print_theme: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input: None,
      output: None,
      toc_depth: default_toc_depth(),
      enumerate_headings: true,
      hide_chrome: false,
      print_theme: false,
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  ///
  /// # Errors
  ///
  /// Returns an error when the file cannot be read, has no recognized
  /// extension, or does not parse in its declared format.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).wrap_err_with(|| {
      format!("Failed to read config file: {}", path.display())
    })?;

    let Some(extension) = path.extension().and_then(|ext| ext.to_str())
    else {
      bail!("Config file has no extension: {}", path.display());
    };

    match extension.to_lowercase().as_str() {
      "json" => serde_json::from_str(&content).wrap_err_with(|| {
        format!("Failed to parse JSON config from {}", path.display())
      }),
      "toml" => toml::from_str(&content).wrap_err_with(|| {
        format!("Failed to parse TOML config from {}", path.display())
      }),
      other => bail!(
        "Unsupported config format '{}' for {}",
        other,
        path.display()
      ),
    }
  }

  /// Create the effective configuration from the CLI, loading a config
  /// file when one was given and layering CLI overrides on top.
  ///
  /// # Errors
  ///
  /// Returns an error when the config file fails to load or the merged
  /// configuration fails validation.
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = match &cli.config_file {
      Some(path) => Self::from_file(path)?,
      None => Self::default(),
    };

    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
  }

  /// Merge CLI arguments into this config, prioritizing CLI values when
  /// present
  pub fn merge_with_cli(&mut self, cli: &Cli) {
    if let Some(Commands::Process {
      input,
      output,
      toc_depth,
      enumerate_headings,
      hide_chrome,
      print_theme,
    }) = &cli.command
    {
      if let Some(input) = input {
        self.input = Some(input.clone());
      }

      if let Some(output) = output {
        self.output = Some(output.clone());
      }

      if let Some(toc_depth) = toc_depth {
        self.toc_depth = *toc_depth;
      }

      if *enumerate_headings {
        self.enumerate_headings = true;
      }

      if *hide_chrome {
        self.hide_chrome = true;
      }

      if *print_theme {
        self.print_theme = true;
      }
    }
  }

  /// Check invariants the rest of the pipeline relies on.
  ///
  /// # Errors
  ///
  /// Returns an error when `toc_depth` falls outside 1-6.
  pub fn validate(&self) -> Result<()> {
    if !(1..=6).contains(&self.toc_depth) {
      bail!(
        "toc_depth must be between 1 and 6, got {}",
        self.toc_depth
      );
    }
    Ok(())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error for an unsupported format or when the file cannot be
  /// written.
  pub fn generate_default_config(format: &str, path: &Path) -> Result<()> {
    let content = match format {
      "toml" => DEFAULT_TOML_TEMPLATE,
      "json" => DEFAULT_JSON_TEMPLATE,
      other => bail!("Unsupported config format: {other}"),
    };

    fs::write(path, content).wrap_err_with(|| {
      format!("Failed to write default config to {}", path.display())
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
