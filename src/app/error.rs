//! Application Error Types

use crate::app::cli::config::ConfigError;
use crate::core::error_handling::ContextualError;
use crate::plugin::api::PluginError;
use crate::task::api::TaskError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error("Cannot start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Cannot determine the project directory: {0}")]
    ProjectDir(#[source] std::io::Error),
}

impl AppError {
    /// Phase the error was raised in, used as log context
    pub fn context(&self) -> &'static str {
        match self {
            AppError::Config(_) | AppError::Plugin(_) | AppError::ProjectDir(_) => {
                "Configuration failed"
            }
            AppError::Task(_) | AppError::Runtime(_) => "Build failed",
        }
    }
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Config(e) => e.is_user_actionable(),
            AppError::Plugin(e) => e.is_user_actionable(),
            AppError::Task(e) => e.is_user_actionable(),
            AppError::Runtime(_) | AppError::ProjectDir(_) => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
