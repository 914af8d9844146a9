//! File Collection Module
//!
//! Lazily resolved sets of source files with include/exclude glob filtering.

pub(crate) mod collection;
pub(crate) mod error;

pub mod api;

#[cfg(test)]
mod tests;
