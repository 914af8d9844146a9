//! Task Error Types

use crate::core::error_handling::ContextualError;
use crate::sourceset::api::ExtensionError;
use crate::task::types::InputRole;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Task '{task}' is already registered")]
    DuplicateTask { task: String },

    #[error("Unknown task '{task}'")]
    UnknownTask { task: String },

    #[error("Task '{task}' depends on unknown task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error("Task '{task}' reads the output of '{dependency}', which declares no output")]
    MissingOutput { task: String, dependency: String },

    #[error("Tasks form a dependency cycle: {}", tasks.join(" -> "))]
    CyclicDependency { tasks: Vec<String> },

    #[error("Failed to resolve inputs of task '{task}': {source}")]
    Inputs {
        task: String,
        #[source]
        source: ExtensionError,
    },

    #[error("Task '{task}' has no {role} input")]
    MissingInput { task: String, role: InputRole },

    #[error("Task '{task}' failed: {message}")]
    ActionFailed { task: String, message: String },

    #[error("Task '{task}' could not access '{}': {source}", path.display())]
    Io {
        task: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    pub(crate) fn io(task: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io {
            task: task.to_string(),
            path: path.into(),
            source,
        }
    }

    pub(crate) fn failed(task: &str, message: impl Into<String>) -> Self {
        TaskError::ActionFailed {
            task: task.to_string(),
            message: message.into(),
        }
    }
}

impl ContextualError for TaskError {
    fn is_user_actionable(&self) -> bool {
        match self {
            TaskError::Inputs { source, .. } => source.is_user_actionable(),
            TaskError::ActionFailed { .. } | TaskError::Io { .. } => false,
            _ => true,
        }
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

/// Result type for task registration, planning and execution
pub type TaskResult<T> = Result<T, TaskError>;
