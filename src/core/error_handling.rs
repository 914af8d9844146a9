//! Generic error handling utilities
//!
//! Every subsystem error implements [`ContextualError`] so the application can
//! decide, without matching on concrete types, whether the user caused the
//! failure (bad build file, unknown plugin id) or the system did (IO, a tool
//! that exited non-zero).

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if the build file or command line can be changed to fix this error
    fn is_user_actionable(&self) -> bool;

    /// Returns the message to show the user for an actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors log their specific message. System errors log the
/// operation context at error level and keep the details at debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => {
            log::error!("FATAL: {}: {}", operation_context, user_msg);
        }
        _ => {
            log::error!("FATAL: {}", operation_context);
        }
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
