//! CLI module containing argument parsing and configuration files

pub mod api;
pub mod args;
pub mod config;
pub mod settings;

#[cfg(test)]
mod tests;
