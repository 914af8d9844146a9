//! Tasks
//!
//! Tasks are registered and configured by plugins while a build unit is
//! being configured, resolved into an [`api::ExecutionPlan`] when it is
//! finalized, and then run by the [`api::Executor`].

pub(crate) mod actions;
pub(crate) mod container;
pub(crate) mod error;
pub(crate) mod executor;
pub(crate) mod plan;
pub(crate) mod types;

pub mod api;
