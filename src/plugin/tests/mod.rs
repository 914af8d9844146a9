//! Test modules for the plugin system
