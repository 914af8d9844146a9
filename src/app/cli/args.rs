//! Command-line arguments

use crate::app::cli::config::BUILD_FILE_NAME;
use crate::core::styles::palette_to_clap;
use crate::core::version::long_version;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "hdvl")]
#[command(about = "Build tool for hardware design and verification projects")]
#[command(version)]
pub struct Args {
    /// Build file
    #[arg(short = 'b', long = "build-file", value_name = "FILE", default_value = BUILD_FILE_NAME)]
    pub build_file: PathBuf,

    /// User settings file
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force coloured output
    #[arg(long = "color", overrides_with = "no_color")]
    pub color: bool,

    /// Disable coloured output
    #[arg(long = "no-color", overrides_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// More output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less output (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the registered plugins
    Plugins,
    /// List the tasks of the project
    Tasks,
    /// Print the files selected by an extension
    Files {
        /// Source set, e.g. main
        source_set: String,
        /// Extension, e.g. sv
        extension: String,
    },
    /// Run tasks and everything they depend on
    Run {
        #[arg(required = true, value_name = "TASK")]
        tasks: Vec<String>,
    },
}

impl Args {
    /// Parse the process arguments, styling help output when `color` is set
    pub fn parse_with_styles(color: bool) -> Self {
        let command = Self::command()
            .styles(palette_to_clap(color))
            .long_version(long_version());
        let matches = command.get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Explicit colour choice, if any flag was given
    pub fn color_choice(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn verbosity(&self) -> i8 {
        let verbose = i8::try_from(self.verbose).unwrap_or(i8::MAX);
        let quiet = i8::try_from(self.quiet).unwrap_or(i8::MAX);
        verbose.saturating_sub(quiet)
    }
}
