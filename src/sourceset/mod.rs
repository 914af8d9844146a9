//! Source Set Module
//!
//! Named groupings of sources (`main`, `test`, ...) and the extensions that
//! plugins attach to them. Each extension owns one file collection.

pub(crate) mod container;
pub(crate) mod error;
pub(crate) mod extension;

pub mod api;
