//! Tests for build file parsing and unit configuration

use crate::app::cli::config::*;
use crate::plugin::api::{PluginError, SvUnitPlugin, SystemVerilogPlugin};
use crate::project::api::ReapplyPolicy;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn parse(text: &str) -> BuildFile {
    BuildFile::parse(text, Path::new("hdvl.toml")).unwrap()
}

#[test]
fn test_empty_build_file() {
    let build_file = parse("");
    assert!(build_file.project.plugins.is_empty());
    assert_eq!(build_file.project.reapply, ReapplyPolicy::Ignore);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let err = BuildFile::parse("[project]\nplugin = []\n", Path::new("x/hdvl.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("x/hdvl.toml"));
}

#[test]
fn test_name_defaults_to_directory() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("uart");
    let unit = parse("").configure(&project).unwrap();
    assert_eq!(unit.name(), "uart");
}

#[test]
fn test_plugins_applied_in_order() {
    let dir = TempDir::new().unwrap();
    let unit = parse(
        r#"
        [project]
        name = "uart"
        build-dir = "out"
        plugins = ["systemverilog", "com.verificationgentleman.gradle.hdvl.svunit"]
        "#,
    )
    .configure(dir.path())
    .unwrap();

    let ids: Vec<_> = unit.applied_plugins().iter().map(|id| id.to_string()).collect();
    assert_eq!(ids, vec![SystemVerilogPlugin::ID, SvUnitPlugin::ID]);
    assert_eq!(unit.build_dir(), dir.path().join("out"));
}

#[test]
fn test_plugin_order_matters() {
    let dir = TempDir::new().unwrap();
    let err = parse("[project]\nplugins = [\"svunit-build\", \"systemverilog\"]\n")
        .configure(dir.path())
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Plugin(PluginError::MissingDependency { .. })
    ));
}

#[test]
fn test_language_plugins_bring_systemverilog() {
    for plugin in ["c", "svunit"] {
        let dir = TempDir::new().unwrap();
        let unit = parse(&format!("[project]\nplugins = [\"{}\"]\n", plugin))
            .configure(dir.path())
            .unwrap();
        assert!(unit.has_plugin(SystemVerilogPlugin::ID), "{}", plugin);
        assert!(unit.source_set("main").unwrap().sv().is_ok());
    }
}

#[test]
fn test_reapply_reject_from_build_file() {
    let dir = TempDir::new().unwrap();
    let err = parse(
        "[project]\nreapply = \"reject\"\nplugins = [\"systemverilog\", \"systemverilog\"]\n",
    )
    .configure(dir.path())
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Plugin(PluginError::AlreadyApplied { .. })
    ));
}

#[test]
fn test_extension_filters_and_order() {
    let dir = TempDir::new().unwrap();
    let sv = dir.path().join("src/main/sv");
    fs::create_dir_all(&sv).unwrap();
    for name in ["a.sv", "dummy.sv", "z_pkg.sv"] {
        fs::write(sv.join(name), "").unwrap();
    }

    let unit = parse(
        r#"
        [project]
        plugins = ["systemverilog"]

        [source-sets.main.sv]
        exclude = ["**/dummy.sv"]
        order = { first = "**/*_pkg.sv" }
        "#,
    )
    .configure(dir.path())
    .unwrap();

    let files = unit
        .source_set("main")
        .unwrap()
        .sv()
        .unwrap()
        .resolve_ordered()
        .unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["z_pkg.sv", "a.sv"]);
}

#[test]
fn test_src_dirs_replace_convention() {
    let dir = TempDir::new().unwrap();
    let unit = parse(
        r#"
        [project]
        plugins = ["systemverilog"]

        [source-sets.main.sv]
        src-dirs = ["rtl"]
        "#,
    )
    .configure(dir.path())
    .unwrap();
    let roots = unit.source_set("main").unwrap().sv().unwrap().files().roots();
    assert_eq!(roots, vec![dir.path().join("rtl")]);
}

#[test]
fn test_unknown_extension_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = parse("[project]\nplugins = [\"systemverilog\"]\n[source-sets.main.c]\ninclude = [\"*.c\"]\n")
        .configure(dir.path())
        .unwrap_err();
    assert!(matches!(err, ConfigError::Extension(_)));
    assert!(err.to_string().contains("'c'"));
}

#[test]
fn test_tool_chains_need_svunit() {
    let dir = TempDir::new().unwrap();
    let text = "[project]\nplugins = [\"systemverilog\"]\n[tool-chains.run-svunit]\nargs = [\"--uvm\"]\n";
    assert!(matches!(
        parse(text).configure(dir.path()),
        Err(ConfigError::Setting { .. })
    ));

    let text = "[project]\nplugins = [\"systemverilog\", \"svunit\"]\n[tool-chains.run-svunit]\nargs = [\"--uvm\"]\n";
    let unit = parse(text).configure(dir.path()).unwrap();
    assert_eq!(unit.tool_chains().unwrap().run_svunit.args(), &["--uvm".to_string()]);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = BuildFile::load(&dir.path().join("hdvl.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_user_settings() {
    use crate::app::cli::settings::UserSettings;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[log]\nlevel = \"debug\"\ncolor = false\n").unwrap();
    let settings = UserSettings::load(Some(&path)).unwrap();
    assert_eq!(settings.log.level.as_deref(), Some("debug"));
    assert_eq!(settings.log.color, Some(false));
    assert_eq!(settings.log.format, None);

    fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
    assert!(matches!(
        UserSettings::load(Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
}
