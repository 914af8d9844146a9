//! Shared fixtures for integration tests
//!
//! A [`Project`] is a throwaway project directory with a build file and
//! whatever sources a test writes into it.

#![allow(dead_code)]

use hdvl::app::cli::api::{BuildFile, BUILD_FILE_NAME};
use hdvl::project::api::BuildUnit;
use hdvl::task::api::{ExecutionPlan, Executor, RunSummary, TaskResult};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Project {
    _root: TempDir,
    dir: PathBuf,
}

impl Project {
    /// Create `<tmp>/<name>` holding `build_file` as `hdvl.toml`
    pub fn new(name: &str, build_file: &str) -> Self {
        let root = TempDir::new().unwrap();
        let dir = root.path().canonicalize().unwrap().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(BUILD_FILE_NAME), build_file).unwrap();
        Self { _root: root, dir }
    }

    /// Another project next to this one, sharing its temporary root
    pub fn sibling(&self, name: &str, build_file: &str) -> PathBuf {
        let dir = self.dir.parent().unwrap().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(BUILD_FILE_NAME), build_file).unwrap();
        dir
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn unit(&self) -> BuildUnit {
        BuildFile::load(&self.path(BUILD_FILE_NAME))
            .unwrap()
            .configure(&self.dir)
            .unwrap()
    }

    pub fn plan(&self) -> ExecutionPlan {
        self.unit().finalize().unwrap()
    }

    pub async fn run(&self, tasks: &[&str]) -> TaskResult<RunSummary> {
        let plan = self.plan();
        let tasks: Vec<String> = tasks.iter().map(|t| t.to_string()).collect();
        Executor::new().run(&plan, &tasks).await
    }
}
