use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task};

/// Repository trait for Task persistence
///
/// Defines the data access interface for tasks. Implementations can use
/// different storage backends (PostgreSQL, in-memory).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task, returning it with its assigned id
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// List every task, ordered by id ascending
    async fn list_all(&self) -> TaskResult<Vec<Task>>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i32,
    rows: BTreeMap<i32, Task>,
}

/// In-memory implementation of TaskRepository (for development/testing)
///
/// Mirrors the Postgres semantics: ids are assigned monotonically starting
/// at 1 and listing returns rows in id order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let mut state = self.state.write().await;

        state.next_id += 1;
        let task = Task {
            id: state.next_id,
            title: input.title,
            start_date: Some(input.start_date),
            end_date: input.end_date,
            completed: input.completed,
        };
        state.rows.insert(task.id, task.clone());

        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn list_all(&self) -> TaskResult<Vec<Task>> {
        let state = self.state.read().await;
        // BTreeMap iteration is already id-ascending
        Ok(state.rows.values().cloned().collect())
    }
}
