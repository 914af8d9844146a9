//! Running SVUnit tests
//!
//! The working directory gets a `tests` link to the test sources, then
//! `runSVUnit` is started from a shell that has sourced SVUnit's
//! `Setup.bsh`.

use crate::task::error::{TaskError, TaskResult};
use crate::task::plan::ResolvedTask;
use crate::task::types::{InputRole, Tool};
use std::path::Path;
use tokio::process::Command;

/// Quote for a POSIX shell
fn quote(arg: &str) -> String {
    if !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./+=:,@".contains(c))
    {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

pub(crate) fn command_line(
    svunit_root: &Path,
    tool: Tool,
    main_args_file: &Path,
    test_args_file: &Path,
    extra_args: &[String],
) -> String {
    let mut run = vec![
        "runSVUnit".to_string(),
        "--sim".to_string(),
        tool.to_string(),
        "-f".to_string(),
        quote(&main_args_file.display().to_string()),
        "-f".to_string(),
        quote(&test_args_file.display().to_string()),
    ];
    run.extend(extra_args.iter().map(|arg| quote(arg)));
    format!(
        "cd {} && source Setup.bsh && cd - > /dev/null && {}",
        quote(&svunit_root.display().to_string()),
        run.join(" ")
    )
}

#[cfg(unix)]
async fn link_tests(task: &ResolvedTask, link: &Path, tests_root: &Path) -> TaskResult<()> {
    if tokio::fs::symlink_metadata(link).await.is_ok() {
        tokio::fs::remove_file(link)
            .await
            .map_err(|e| TaskError::io(task.name(), link, e))?;
    }
    tokio::fs::symlink(tests_root, link)
        .await
        .map_err(|e| TaskError::io(task.name(), link, e))
}

#[cfg(not(unix))]
async fn link_tests(task: &ResolvedTask, _link: &Path, _tests_root: &Path) -> TaskResult<()> {
    Err(TaskError::failed(
        task.name(),
        "SVUnit runs need symbolic links and a bash shell",
    ))
}

pub(crate) async fn run(task: &ResolvedTask, tool: Tool, extra_args: &[String]) -> TaskResult<()> {
    let working_dir = task.required_output()?;
    let svunit_root = task.single(InputRole::SvunitRoot).map_err(|_| {
        TaskError::failed(
            task.name(),
            "no SVUnit root configured; set `root` in the [svunit] table",
        )
    })?;
    let tests_root = task.single(InputRole::TestsRoot)?;
    let main_args_file = task.single(InputRole::MainArgsFile)?;
    let test_args_file = task.single(InputRole::TestArgsFile)?;

    tokio::fs::create_dir_all(working_dir)
        .await
        .map_err(|e| TaskError::io(task.name(), working_dir, e))?;
    link_tests(task, &working_dir.join("tests"), tests_root).await?;

    let line = command_line(svunit_root, tool, main_args_file, test_args_file, extra_args);
    log::debug!("Running in {}: {}", working_dir.display(), line);
    let status = Command::new("bash")
        .arg("-c")
        .arg(&line)
        .current_dir(working_dir)
        .status()
        .await
        .map_err(|e| TaskError::io(task.name(), working_dir, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(TaskError::failed(
            task.name(),
            format!("runSVUnit exited with {}", status),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let line = command_line(
            Path::new("/opt/svunit"),
            Tool::Xrun,
            Path::new("/p/build/full_xrun_args.f"),
            Path::new("/p/build/test_xrun_args.f"),
            &["--uvm".to_string(), "-c_arg=-DFOO BAR".to_string()],
        );
        assert_eq!(
            line,
            "cd /opt/svunit && source Setup.bsh && cd - > /dev/null && \
             runSVUnit --sim xrun -f /p/build/full_xrun_args.f -f /p/build/test_xrun_args.f \
             --uvm '-c_arg=-DFOO BAR'"
        );
    }

    #[test]
    fn test_quote_escapes_single_quotes() {
        assert_eq!(quote("it's"), r"'it'\''s'");
        assert_eq!(quote(""), "''");
    }
}
