//! SVUnit build plugin compile specification

use crate::common::Project;
use hdvl::task::api::CompileSpec;
use std::path::PathBuf;

#[tokio::test]
async fn test_compile_spec_is_relative_to_project() {
    let project = Project::new(
        "svunit",
        r#"
        [project]
        plugins = ["systemverilog", "svunit-build"]
        "#,
    );
    project.write("svunit_base/svunit_pkg.sv", "");
    project.write("svunit_base/svunit_defines.svh", "");

    project.run(&["writeCompileSpecFile"]).await.unwrap();
    let spec: CompileSpec =
        serde_json::from_str(&project.read("build/.hdvl/compile-spec.json")).unwrap();

    assert_eq!(
        spec.sv_source_files,
        vec![PathBuf::from("svunit_base/svunit_pkg.sv")]
    );
    assert!(spec.sv_exported_header_dirs.contains(&PathBuf::from("svunit_base")));
    assert!(spec.c_source_files.is_empty());
}
