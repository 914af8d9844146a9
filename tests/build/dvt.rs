//! DVT project generation

use crate::common::Project;

#[tokio::test]
async fn test_dvt_build_file_without_tests() {
    let project = Project::new(
        "uart",
        r#"
        [project]
        plugins = ["systemverilog", "dvt"]
        "#,
    );
    project.run(&["dvt"]).await.unwrap();
    assert!(!project.path("build/dvt").exists());
    assert_eq!(
        project.read(".dvt/default.build"),
        format!(
            "+dvt_init+xcelium.xrun\n-f {}\n",
            project.path("build/full_xrun_args.f").display()
        )
    );
}

#[tokio::test]
async fn test_dvt_build_file_with_unit_tests() {
    let project = Project::new(
        "uart",
        r#"
        [project]
        plugins = ["systemverilog", "svunit", "dvt"]
        "#,
    );
    project.write("src/test/sv/uart_unit_test.sv", "");

    project.run(&["dvt"]).await.unwrap();
    let text = project.read(".dvt/default.build");
    assert_eq!(text.matches("+dvt_init+xcelium.xrun").count(), 2);
    assert!(project.path("build/dvt/svunit").is_dir());
    assert!(text.contains(&format!("-incdir {}", project.path("src/test/sv").display())));
    assert!(text.trim_end().ends_with("uart_unit_test.sv"));
}
