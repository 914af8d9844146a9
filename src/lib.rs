pub mod app;
pub mod core;
pub mod fileset;
pub mod plugin;
pub mod project;
pub mod sourceset;
pub mod task;
