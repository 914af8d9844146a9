//! Plugin System Module
//!
//! Plugins are identified by dotted ids, registered once in a process-wide
//! registry and applied to a build unit. Application only records intent
//! (extensions, tasks, input bindings, deferred actions); nothing is
//! resolved until the unit is finalized.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod error;
pub(crate) mod registry;
pub(crate) mod types;

// Public API module - the only public interface for the plugin system
pub mod api;

#[cfg(test)]
mod tests;
