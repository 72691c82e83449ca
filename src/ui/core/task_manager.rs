use super::actions::Action;
use crate::backend::{BackendError, BackendOperation};
use std::collections::HashMap;
use std::future::Future;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub operation: BackendOperation,
    pub description: String,
    pub started_at: Instant,
}

/// Runs backend calls off the UI loop and reports their outcome as actions.
///
/// Each operation resolves to exactly one action on the channel: the success
/// action built by the operation, or [`Action::OperationFailed`]. Nothing is
/// retried, de-duplicated or timed out.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background backend operation
    pub fn spawn_operation<F, Fut>(&mut self, operation: BackendOperation, description: String, run: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Action, BackendError>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            let action = match run().await {
                Ok(action) => {
                    log::debug!("Background: '{}' completed", desc_for_task);
                    action
                }
                Err(e) => {
                    log::error!("Background: '{}' failed: {}", desc_for_task, e);
                    Action::OperationFailed {
                        operation,
                        error: e.to_string(),
                    }
                }
            };
            let _ = action_sender.send(action);
        });

        log::debug!("Background: spawned task {} '{}'", task_id, description);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                operation,
                description,
                started_at: Instant::now(),
            },
        );
        task_id
    }

    /// Forget tasks whose handle has finished. Returns how many were removed.
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !task.handle.is_finished());
        before - self.tasks.len()
    }

    /// Wait until every spawned task has finished, in spawn order.
    pub async fn wait_for_all(&mut self) {
        let mut tasks: Vec<BackgroundTask> = self.tasks.drain().map(|(_, task)| task).collect();
        tasks.sort_by_key(|task| task.id);

        for task in tasks {
            if let Err(e) = task.handle.await {
                log::warn!("Background: task {} '{}' did not finish: {}", task.id, task.description, e);
            }
        }
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Longest-running task, for the status bar
    pub fn oldest_task(&self) -> Option<&BackgroundTask> {
        self.tasks.values().min_by_key(|task| task.started_at)
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
