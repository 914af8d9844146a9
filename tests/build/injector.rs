//! Build file injection into an SVUnit checkout

use crate::common::Project;
use hdvl::app::cli::api::BuildFile;
use hdvl::task::api::TaskError;
use std::fs;
use std::path::Path;

const INJECTOR: &str = r#"
[project]
plugins = ["systemverilog", "svunit-build", "svunit-build-injector"]

[svunit]
root = "../svunit"
"#;

#[tokio::test]
async fn test_injected_build_file_loads() {
    let project = Project::new("uart", INJECTOR);
    let svunit = project.sibling("svunit", "");
    fs::remove_file(svunit.join("hdvl.toml")).unwrap();

    project.run(&["injectSvunitBuild"]).await.unwrap();

    let build_file = svunit.join("hdvl.toml");
    let unit = BuildFile::load(&build_file)
        .unwrap()
        .configure(&svunit)
        .unwrap();
    assert_eq!(unit.name(), "svunit");
    assert!(unit.tasks().contains("writeCompileSpecFile"));
    assert!(svunit.join(".hdvl/compile-spec.json").is_file());

    // Re-running overwrites its own output
    project.run(&["injectSvunitBuild"]).await.unwrap();
}

#[tokio::test]
async fn test_hand_written_build_file_is_kept() {
    let project = Project::new("uart", INJECTOR);
    let svunit = project.sibling("svunit", "[project]\nname = \"mine\"\n");

    let err = project.run(&["injectSvunitBuild"]).await.unwrap_err();
    assert!(matches!(err, TaskError::ActionFailed { .. }));
    assert_eq!(
        fs::read_to_string(Path::new(&svunit).join("hdvl.toml")).unwrap(),
        "[project]\nname = \"mine\"\n"
    );
}
