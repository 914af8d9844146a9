//! Argument file generation

use crate::common::Project;

const SV_ONLY: &str = r#"
[project]
plugins = ["systemverilog"]
"#;

#[tokio::test]
async fn test_main_args_file_lists_sources_in_order() {
    let project = Project::new(
        "uart",
        r#"
        [project]
        plugins = ["systemverilog"]

        [source-sets.main.sv]
        order = { first = "**/*_pkg.sv" }
        "#,
    );
    project.write("src/main/sv/uart.sv", "module uart; endmodule\n");
    project.write("src/main/sv/uart_pkg.sv", "package uart_pkg; endpackage\n");
    project.write("src/main/sv_headers/uart_defines.svh", "");

    let summary = project.run(&["genXrunArgsFile"]).await.unwrap();
    assert_eq!(summary.executed, vec!["genXrunArgsFile".to_string()]);

    let dir = project.dir().display().to_string();
    let expected = format!(
        "-incdir {dir}/src/main/sv_headers\n\
         -makelib worklib\n\
         \x20\x20-incdir {dir}/src/main/sv\n\
         \x20\x20{dir}/src/main/sv/uart_pkg.sv\n\
         \x20\x20{dir}/src/main/sv/uart.sv\n\
         -endlib\n"
    );
    assert_eq!(project.read("build/xrun_args.f"), expected);
}

#[tokio::test]
async fn test_empty_project_still_gets_a_library() {
    let project = Project::new("empty", SV_ONLY);
    project.run(&["genQrunArgsFile"]).await.unwrap();
    assert_eq!(project.read("build/qrun_args.f"), "-makelib work\n-endlib\n");
}

#[tokio::test]
async fn test_full_args_file_runs_its_dependency_first() {
    let project = Project::new("uart", SV_ONLY);
    let summary = project.run(&["genFullXrunArgsFile"]).await.unwrap();
    assert_eq!(
        summary.executed,
        vec![
            "genXrunArgsFile".to_string(),
            "genFullXrunArgsFile".to_string()
        ]
    );
    assert_eq!(
        project.read("build/full_xrun_args.f"),
        format!("-f {}\n", project.path("build/xrun_args.f").display())
    );
}

#[tokio::test]
async fn test_c_sources_follow_sv_sources() {
    let project = Project::new(
        "dpi",
        r#"
        [project]
        plugins = ["systemverilog", "c"]
        "#,
    );
    project.write("src/main/sv/top.sv", "");
    project.write("src/main/c/model.c", "");
    project.write("src/main/c/README", "");

    project.run(&["genXrunArgsFile"]).await.unwrap();
    let text = project.read("build/xrun_args.f");
    let sv = text.find("top.sv").unwrap();
    let c = text.find("model.c").unwrap();
    assert!(sv < c);
    assert!(!text.contains("README"));
}

#[tokio::test]
async fn test_custom_build_dir() {
    let project = Project::new(
        "uart",
        r#"
        [project]
        build-dir = "out"
        plugins = ["systemverilog"]
        "#,
    );
    project.run(&["genXrunArgsFile"]).await.unwrap();
    assert!(project.path("out/xrun_args.f").is_file());
    assert!(!project.path("build").exists());
}

#[tokio::test]
async fn test_test_source_set_has_its_own_args_file() {
    let project = Project::new(
        "uart",
        r#"
        [project]
        plugins = ["systemverilog", "svunit"]
        "#,
    );
    project.write("src/test/sv/uart_unit_test.sv", "");

    project.run(&["genTestXrunArgsFile"]).await.unwrap();
    let text = project.read("build/test_xrun_args.f");
    assert!(text.contains("uart_unit_test.sv"));
}
