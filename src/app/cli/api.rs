//! Public API exports for the CLI module

pub use crate::app::cli::args::{Args, Command};
pub use crate::app::cli::config::{
    BuildFile, ConfigError, ConfigResult, ExtensionSection, ProjectSection, BUILD_FILE_NAME,
};
pub use crate::app::cli::settings::{default_settings_path, UserSettings};
