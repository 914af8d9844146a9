//! Execution plan
//!
//! Produced once, when a build unit is finalized. Every task input is
//! resolved to concrete paths here and the plan is read-only from then on,
//! so executing it never observes a configuration change.

use crate::sourceset::api::SourceSetContainer;
use crate::task::container::TaskContainer;
use crate::task::error::{TaskError, TaskResult};
use crate::task::types::{InputRole, InputSource, Task, TaskAction};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// A task with every input resolved to paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTask {
    name: String,
    description: String,
    action: TaskAction,
    inputs: BTreeMap<InputRole, Vec<PathBuf>>,
    output: Option<PathBuf>,
    dependencies: Vec<String>,
    level: usize,
}

impl ResolvedTask {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn action(&self) -> &TaskAction {
        &self.action
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Zero for tasks without dependencies, otherwise one past the deepest dependency
    pub fn level(&self) -> usize {
        self.level
    }

    /// All paths bound to `role`, empty if nothing is bound
    pub fn files(&self, role: InputRole) -> &[PathBuf] {
        self.inputs.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_input(&self, role: InputRole) -> bool {
        self.inputs.contains_key(&role)
    }

    /// Exactly one path bound to `role`
    pub fn single(&self, role: InputRole) -> TaskResult<&Path> {
        match self.files(role) {
            [path] => Ok(path.as_path()),
            [] => Err(TaskError::MissingInput {
                task: self.name.clone(),
                role,
            }),
            paths => Err(TaskError::failed(
                &self.name,
                format!("expected one {} path, found {}", role, paths.len()),
            )),
        }
    }

    pub fn required_output(&self) -> TaskResult<&Path> {
        self.output()
            .ok_or_else(|| TaskError::failed(&self.name, "task declares no output"))
    }
}

/// Immutable, topologically ordered set of resolved tasks
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    project_dir: PathBuf,
    build_dir: PathBuf,
    tasks: Vec<ResolvedTask>,
}

impl ExecutionPlan {
    /// Validate the task graph and resolve every input
    pub fn build(
        project_dir: &Path,
        build_dir: &Path,
        tasks: &TaskContainer,
        source_sets: &SourceSetContainer,
    ) -> TaskResult<Self> {
        check_dependencies(tasks)?;
        let order = topological_order(tasks)?;

        let mut levels: HashMap<&str, usize> = HashMap::new();
        let mut resolved = Vec::with_capacity(order.len());
        for task in order {
            let level = task
                .dependencies()
                .iter()
                .filter_map(|dep| levels.get(dep))
                .map(|level| level + 1)
                .max()
                .unwrap_or(0);
            levels.insert(task.name(), level);
            resolved.push(resolve_task(task, level, project_dir, tasks, source_sets)?);
        }

        log::debug!("Resolved execution plan with {} task(s)", resolved.len());
        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            build_dir: build_dir.to_path_buf(),
            tasks: resolved,
        })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Tasks in dependency order
    pub fn tasks(&self) -> &[ResolvedTask] {
        &self.tasks
    }

    pub fn task(&self, name: &str) -> TaskResult<&ResolvedTask> {
        self.tasks
            .iter()
            .find(|task| task.name == name)
            .ok_or_else(|| TaskError::UnknownTask {
                task: name.to_string(),
            })
    }

    /// The requested tasks and everything they depend on, grouped by level
    ///
    /// Tasks within one level do not depend on each other.
    pub fn levels_for(&self, requested: &[String]) -> TaskResult<Vec<Vec<&ResolvedTask>>> {
        let mut needed = HashSet::new();
        let mut pending: Vec<&str> = Vec::new();
        for name in requested {
            pending.push(self.task(name)?.name());
        }
        while let Some(name) = pending.pop() {
            if needed.insert(name) {
                pending.extend(self.task(name)?.dependencies.iter().map(String::as_str));
            }
        }

        let mut levels: Vec<Vec<&ResolvedTask>> = Vec::new();
        for task in self.tasks.iter().filter(|t| needed.contains(t.name())) {
            if levels.len() <= task.level {
                levels.resize_with(task.level + 1, Vec::new);
            }
            levels[task.level].push(task);
        }
        levels.retain(|level| !level.is_empty());
        Ok(levels)
    }
}

fn check_dependencies(tasks: &TaskContainer) -> TaskResult<()> {
    for task in tasks.iter() {
        for dependency in task.dependencies() {
            let target = tasks
                .get(dependency)
                .map_err(|_| TaskError::UnknownDependency {
                    task: task.name().to_string(),
                    dependency: dependency.to_string(),
                })?;
            let reads_output = task
                .inputs()
                .iter()
                .any(|input| input.source == InputSource::TaskOutput(dependency.to_string()));
            if reads_output && target.output().is_none() {
                return Err(TaskError::MissingOutput {
                    task: task.name().to_string(),
                    dependency: dependency.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Kahn's algorithm, ties broken by registration order
fn topological_order(tasks: &TaskContainer) -> TaskResult<Vec<&Task>> {
    let mut remaining: Vec<&Task> = tasks.iter().collect();
    let mut done: HashSet<&str> = HashSet::new();
    let mut order = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let ready = remaining
            .iter()
            .position(|task| task.dependencies().iter().all(|dep| done.contains(dep)));
        match ready {
            Some(index) => {
                let task = remaining.remove(index);
                done.insert(task.name());
                order.push(task);
            }
            None => {
                return Err(TaskError::CyclicDependency {
                    tasks: find_cycle(tasks, &remaining),
                })
            }
        }
    }
    Ok(order)
}

/// Walk dependencies from the first blocked task until a name repeats
fn find_cycle(tasks: &TaskContainer, blocked: &[&Task]) -> Vec<String> {
    let blocked_names: HashSet<&str> = blocked.iter().map(|task| task.name()).collect();
    let mut path: Vec<String> = Vec::new();
    let mut current = blocked.first().map(|task| task.name().to_string());

    while let Some(name) = current {
        if let Some(start) = path.iter().position(|seen| *seen == name) {
            let mut cycle = path.split_off(start);
            cycle.push(name);
            return cycle;
        }
        current = tasks.get(&name).ok().and_then(|task| {
            task.dependencies()
                .into_iter()
                .find(|dep| blocked_names.contains(dep))
                .map(str::to_string)
        });
        path.push(name);
    }
    path
}

fn resolve_task(
    task: &Task,
    level: usize,
    project_dir: &Path,
    tasks: &TaskContainer,
    source_sets: &SourceSetContainer,
) -> TaskResult<ResolvedTask> {
    let mut inputs: BTreeMap<InputRole, Vec<PathBuf>> = BTreeMap::new();
    for input in task.inputs() {
        let paths = resolve_source(task, &input.source, project_dir, tasks, source_sets)?;
        inputs.entry(input.role).or_default().extend(paths);
    }

    Ok(ResolvedTask {
        name: task.name().to_string(),
        description: task.description().to_string(),
        action: task.action().clone(),
        inputs,
        output: task.output().map(Path::to_path_buf),
        dependencies: task.dependencies().into_iter().map(str::to_string).collect(),
        level,
    })
}

fn resolve_source(
    task: &Task,
    source: &InputSource,
    project_dir: &Path,
    tasks: &TaskContainer,
    source_sets: &SourceSetContainer,
) -> TaskResult<Vec<PathBuf>> {
    let inputs_error = |source| TaskError::Inputs {
        task: task.name().to_string(),
        source,
    };

    match source {
        InputSource::Extension(reference) => source_sets
            .get(&reference.source_set)
            .and_then(|set| set.extension(&reference.extension))
            .and_then(|extension| extension.resolve_ordered())
            .map_err(inputs_error),
        InputSource::ExtensionDirs(reference) => source_sets
            .get(&reference.source_set)
            .and_then(|set| set.extension(&reference.extension))
            .and_then(|extension| extension.source_directories())
            .map_err(inputs_error),
        InputSource::TaskOutput(name) => {
            let output = tasks.get(name)?.output().map(Path::to_path_buf);
            Ok(output.into_iter().collect())
        }
        InputSource::Paths(paths) => Ok(paths
            .iter()
            .map(|path| {
                if path.is_absolute() {
                    path.clone()
                } else {
                    project_dir.join(path)
                }
            })
            .collect()),
    }
}
