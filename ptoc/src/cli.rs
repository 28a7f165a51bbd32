use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for ptoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "ptoc: print-page outline and heading enumeration"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a configuration file (TOML or JSON)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the ptoc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new ptoc configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "ptoc.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Process one assembled HTML page into its print-ready form.
  Process {
    /// Path to the assembled HTML page.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output path for the processed page. The input is overwritten when
    /// omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum outline depth (1-6), used when the page's mount point does
    /// not specify one.
    #[arg(long = "toc-depth", value_parser = clap::value_parser!(u8))]
    toc_depth: Option<u8>,

    /// Tag the page root so the numbering labels render.
    #[arg(long = "enumerate-headings", action = clap::ArgAction::SetTrue)]
    enumerate_headings: bool,

    /// Hide host-theme navigation chrome on the processed page.
    #[arg(long = "hide-chrome", action = clap::ArgAction::SetTrue)]
    hide_chrome: bool,

    /// Write the page with the print color scheme applied.
    #[arg(long = "print-theme", action = clap::ArgAction::SetTrue)]
    print_theme: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
