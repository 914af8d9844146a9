//! CLI tests

mod config_tests;
