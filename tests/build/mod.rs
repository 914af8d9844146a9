pub mod args_files;
pub mod compile_spec;
pub mod dependencies;
pub mod dvt;
pub mod injector;
