//! Task execution
//!
//! Runs the requested tasks of a finalized [`ExecutionPlan`] level by level.
//! Tasks inside one level are independent and are awaited together; a level
//! starts only once the previous one finished without error.

use crate::task::actions;
use crate::task::error::TaskResult;
use crate::task::plan::{ExecutionPlan, ResolvedTask};
use async_trait::async_trait;
use futures::future::join_all;
use std::time::Instant;

/// Performs the action of one resolved task
#[async_trait]
pub trait ActionRunner: Send + Sync {
    async fn run(&self, plan: &ExecutionPlan, task: &ResolvedTask) -> TaskResult<()>;
}

/// Runs the built-in actions against the filesystem and external tools
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultActionRunner;

#[async_trait]
impl ActionRunner for DefaultActionRunner {
    async fn run(&self, plan: &ExecutionPlan, task: &ResolvedTask) -> TaskResult<()> {
        actions::run(plan, task).await
    }
}

/// Tasks that ran, in completion order of their levels
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: Vec<String>,
}

pub struct Executor<R: ActionRunner = DefaultActionRunner> {
    runner: R,
}

impl Executor<DefaultActionRunner> {
    pub fn new() -> Self {
        Self {
            runner: DefaultActionRunner,
        }
    }
}

impl Default for Executor<DefaultActionRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ActionRunner> Executor<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Execute `requested` and everything it depends on
    ///
    /// Stops at the first level containing a failed task; the first failure
    /// in that level is returned.
    pub async fn run(&self, plan: &ExecutionPlan, requested: &[String]) -> TaskResult<RunSummary> {
        let levels = plan.levels_for(requested)?;
        let mut summary = RunSummary::default();

        for (index, level) in levels.iter().enumerate() {
            log::debug!(
                "Running level {} with {} task(s): {}",
                index,
                level.len(),
                level.iter().map(|t| t.name()).collect::<Vec<_>>().join(", ")
            );

            let runs = level.iter().map(|task| async move {
                let started = Instant::now();
                let result = self.runner.run(plan, task).await;
                match &result {
                    Ok(()) => log::info!("> {} ({:.2?})", task.name(), started.elapsed()),
                    Err(e) => log::error!("> {} failed: {}", task.name(), e),
                }
                result
            });
            let results = join_all(runs).await;

            let mut first_error = None;
            for (task, result) in level.iter().zip(results) {
                match result {
                    Ok(()) => summary.executed.push(task.name().to_string()),
                    Err(e) => {
                        first_error.get_or_insert(e);
                    }
                }
            }
            if let Some(error) = first_error {
                return Err(error);
            }
        }
        Ok(summary)
    }
}
