//! Shared infrastructure: error reporting, logging, glob patterns and naming

pub mod error_handling;
pub mod logging;
pub mod naming;
pub mod pattern;
pub mod styles;
pub mod version;
