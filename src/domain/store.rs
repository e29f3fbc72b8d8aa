use super::enums::{Category, Priority};
use super::error::ValidationError;
use super::task::{Subtask, Task};
use chrono::{DateTime, Local};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Side effects requested by store transitions, drained by the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task with a due date was created (schedule its reminder)
    CreatedWithDueDate {
        task_id: Uuid,
        text: String,
        due_date: DateTime<Local>,
    },
    /// A task went from incomplete to completed (play the celebration)
    BecameCompleted { task_id: Uuid, text: String },
    /// A task was removed (cancel its reminder)
    Deleted { task_id: Uuid },
}

/// An immutable view of the store at one revision.
///
/// Tasks a transition did not touch are shared with the previous snapshot,
/// so `Arc::ptr_eq` tells whether a row needs re-rendering.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    revision: u64,
    tasks: Vec<Arc<Task>>,
}

impl Snapshot {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    pub fn get(&self, task_id: Uuid) -> Option<&Arc<Task>> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    fn position(&self, task_id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}

/// In-memory task collection. All mutation goes through the methods below.
#[derive(Debug, Default)]
pub struct TaskStore {
    current: Snapshot,
    events: Vec<StoreEvent>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot (cheap to clone and keep)
    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    pub fn get(&self, task_id: Uuid) -> Option<&Arc<Task>> {
        self.current.get(task_id)
    }

    pub fn len(&self) -> usize {
        self.current.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.tasks.is_empty()
    }

    /// Take the events emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Create a task timestamped now
    pub fn create(
        &mut self,
        text: &str,
        category: Option<Category>,
        priority: Option<Priority>,
        due_date: Option<DateTime<Local>>,
    ) -> Result<Arc<Task>, ValidationError> {
        self.create_at(text, category, priority, due_date, Local::now())
    }

    /// Create a task with an explicit creation timestamp.
    /// Category is checked before priority, then the text.
    #[tracing::instrument(skip(self, text))]
    pub fn create_at(
        &mut self,
        text: &str,
        category: Option<Category>,
        priority: Option<Priority>,
        due_date: Option<DateTime<Local>>,
        created_at: DateTime<Local>,
    ) -> Result<Arc<Task>, ValidationError> {
        let category = category.ok_or(ValidationError::MissingCategory)?;
        let priority = priority.ok_or(ValidationError::MissingPriority)?;
        let text = non_empty(text)?;

        let task = Arc::new(Task::new(text, category, priority, due_date, created_at));

        let mut tasks = self.current.tasks.clone();
        tasks.push(Arc::clone(&task));
        self.commit(tasks);

        if let Some(due_date) = task.due_date {
            self.events.push(StoreEvent::CreatedWithDueDate {
                task_id: task.id,
                text: task.text.clone(),
                due_date,
            });
        }

        info!(task_id = %task.id, "task created");
        Ok(task)
    }

    /// Flip completion of a task. Unknown ids are a no-op.
    #[tracing::instrument(skip(self))]
    pub fn toggle_completion(&mut self, task_id: Uuid) -> Option<Arc<Task>> {
        let index = self.current.position(task_id)?;
        let next = self.current.tasks[index].with_completion_toggled();
        Some(self.replace(index, next))
    }

    /// Set progress directly on a task without subtasks
    #[tracing::instrument(skip(self))]
    pub fn set_progress(
        &mut self,
        task_id: Uuid,
        progress: i32,
    ) -> Result<Option<Arc<Task>>, ValidationError> {
        let progress = u8::try_from(progress)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or(ValidationError::OutOfRangeProgress(progress))?;

        let Some(index) = self.current.position(task_id) else {
            return Ok(None);
        };
        let task = &self.current.tasks[index];
        if !task.subtasks.is_empty() {
            return Err(ValidationError::ProgressDerivedFromSubtasks);
        }

        let next = task.with_progress(progress);
        Ok(Some(self.replace(index, next)))
    }

    /// Remove a task. Deleting an absent id is a no-op.
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, task_id: Uuid) -> Option<Arc<Task>> {
        let index = self.current.position(task_id)?;

        let mut tasks = self.current.tasks.clone();
        let removed = tasks.remove(index);
        self.commit(tasks);

        self.events.push(StoreEvent::Deleted { task_id });
        info!(task_id = %task_id, "task deleted");
        Some(removed)
    }

    /// Append an incomplete subtask. Parent progress is left as is.
    #[tracing::instrument(skip(self, text))]
    pub fn add_subtask(
        &mut self,
        task_id: Uuid,
        text: &str,
    ) -> Result<Option<Arc<Task>>, ValidationError> {
        let text = non_empty(text)?;

        let Some(index) = self.current.position(task_id) else {
            return Ok(None);
        };
        let next = self.current.tasks[index].with_subtask(Subtask::new(text));
        Ok(Some(self.replace(index, next)))
    }

    /// Flip a subtask and recompute its parent. No-op if either id is unknown.
    #[tracing::instrument(skip(self))]
    pub fn toggle_subtask(&mut self, task_id: Uuid, subtask_id: Uuid) -> Option<Arc<Task>> {
        let index = self.current.position(task_id)?;
        let next = self.current.tasks[index].with_subtask_toggled(subtask_id)?;
        Some(self.replace(index, next))
    }

    /// Recompute every overdue flag at `now` and return the flagged ids.
    /// A sweep that changes no flag keeps the current snapshot.
    pub fn overdue_sweep(&mut self, now: DateTime<Local>) -> BTreeSet<Uuid> {
        let mut changed = false;
        let tasks: Vec<Arc<Task>> = self
            .current
            .tasks
            .iter()
            .map(|task| {
                let overdue = task.overdue_at(now);
                if overdue == task.is_overdue {
                    Arc::clone(task)
                } else {
                    changed = true;
                    Arc::new(task.with_overdue(overdue))
                }
            })
            .collect();

        if changed {
            debug!("overdue flags changed");
            self.commit(tasks);
        }

        self.current
            .tasks
            .iter()
            .filter(|t| t.is_overdue)
            .map(|t| t.id)
            .collect()
    }

    /// Tasks ordered by priority rank, then newest first.
    /// Stable, and never reorders the store itself.
    pub fn sorted_view(&self) -> Vec<Arc<Task>> {
        let mut view = self.snapshot().tasks().to_vec();
        view.sort_by_key(|t| (t.priority.rank(), Reverse(t.created_at)));
        view
    }

    fn replace(&mut self, index: usize, next: Task) -> Arc<Task> {
        let was_completed = self.current.tasks[index].completed;
        let next = Arc::new(next);

        let mut tasks = self.current.tasks.clone();
        tasks[index] = Arc::clone(&next);
        self.commit(tasks);

        if !was_completed && next.completed {
            info!(task_id = %next.id, "task completed");
            self.events.push(StoreEvent::BecameCompleted {
                task_id: next.id,
                text: next.text.clone(),
            });
        }
        next
    }

    fn commit(&mut self, tasks: Vec<Arc<Task>>) {
        self.current = Snapshot {
            revision: self.current.revision + 1,
            tasks,
        };
    }
}

fn non_empty(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}
