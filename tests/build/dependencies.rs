//! Dependency projects

use crate::common::Project;

#[tokio::test]
async fn test_dependency_args_files_come_first() {
    let project = Project::new(
        "soc",
        r#"
        [project]
        plugins = ["systemverilog"]
        dependencies = ["../uart", "../spi"]
        "#,
    );
    let uart = project.sibling("uart", "[project]\nplugins = [\"systemverilog\"]\n");
    let spi = project.sibling("spi", "[project]\nplugins = [\"systemverilog\"]\n");

    project.run(&["genFullQrunArgsFile"]).await.unwrap();
    let expected = format!(
        "-f {}\n-f {}\n-f {}\n",
        project.dir().join("../uart/build/qrun_args.f").display(),
        project.dir().join("../spi/build/qrun_args.f").display(),
        project.path("build/qrun_args.f").display(),
    );
    assert_eq!(project.read("build/full_qrun_args.f"), expected);

    // The dependencies are separate projects and are not built here
    assert!(!uart.join("build").exists());
    assert!(!spi.join("build").exists());
}
