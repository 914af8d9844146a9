//! Registered tasks of a build unit

use crate::task::error::{TaskError, TaskResult};
use crate::task::types::Task;

/// Tasks in registration order, unique by name
#[derive(Debug, Clone, Default)]
pub struct TaskContainer {
    tasks: Vec<Task>,
}

impl TaskContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, task: Task) -> TaskResult<()> {
        if self.contains(task.name()) {
            return Err(TaskError::DuplicateTask {
                task: task.name().to_string(),
            });
        }
        log::debug!("Registered task '{}' ({})", task.name(), task.action().kind());
        self.tasks.push(task);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.iter().any(|task| task.name() == name)
    }

    pub fn get(&self, name: &str) -> TaskResult<&Task> {
        self.tasks
            .iter()
            .find(|task| task.name() == name)
            .ok_or_else(|| TaskError::UnknownTask {
                task: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> TaskResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.name() == name)
            .ok_or_else(|| TaskError::UnknownTask {
                task: name.to_string(),
            })
    }

    /// Run `configure` against an already registered task
    pub fn configure<F>(&mut self, name: &str, configure: F) -> TaskResult<()>
    where
        F: FnOnce(&mut Task),
    {
        configure(self.get_mut(name)?);
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.tasks.iter().map(Task::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
