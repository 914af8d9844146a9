//! Build units and their two-phase configuration

pub(crate) mod extensions;
pub(crate) mod unit;

pub mod api;
