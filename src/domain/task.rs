use super::enums::{Category, Priority};
use chrono::{DateTime, Local};
use uuid::Uuid;

/// A checklist entry owned by a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtask {
    /// Unique within the parent task
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// A to-do item.
///
/// Values are never edited in place once they are in a store: every update
/// below consumes a reference and returns the next version of the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique ID across the store
    pub id: Uuid,
    /// Task text (trimmed, non-empty)
    pub text: String,
    pub completed: bool,
    /// Percentage in 0..=100, equal to 100 exactly when completed
    pub progress: u8,
    pub category: Category,
    pub priority: Priority,
    /// When the task was created
    pub created_at: DateTime<Local>,
    /// Optional deadline
    pub due_date: Option<DateTime<Local>>,
    /// Subtasks in insertion order
    pub subtasks: Vec<Subtask>,
    /// Derived by the overdue sweep
    pub is_overdue: bool,
}

impl Task {
    pub fn new(
        text: String,
        category: Category,
        priority: Priority,
        due_date: Option<DateTime<Local>>,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            progress: 0,
            category,
            priority,
            created_at,
            due_date,
            subtasks: Vec::new(),
            is_overdue: false,
        }
    }

    /// Flip completion. Progress jumps to the binary extreme and every
    /// subtask follows the new state so the subtask-derived value agrees.
    pub fn with_completion_toggled(&self) -> Task {
        let completed = !self.completed;
        let subtasks = self
            .subtasks
            .iter()
            .map(|st| Subtask {
                completed,
                ..st.clone()
            })
            .collect();

        Task {
            subtasks,
            ..self.clone()
        }
        .with_completed(completed, if completed { 100 } else { 0 })
    }

    /// Set progress directly (range already validated by the caller)
    pub fn with_progress(&self, progress: u8) -> Task {
        self.clone().with_completed(progress == 100, progress)
    }

    pub fn with_subtask(&self, subtask: Subtask) -> Task {
        let mut next = self.clone();
        next.subtasks.push(subtask);
        next
    }

    /// Flip one subtask and recompute progress over the updated set.
    /// Returns None if the subtask is not part of this task.
    pub fn with_subtask_toggled(&self, subtask_id: Uuid) -> Option<Task> {
        let position = self.subtasks.iter().position(|st| st.id == subtask_id)?;

        let mut next = self.clone();
        let subtask = &mut next.subtasks[position];
        subtask.completed = !subtask.completed;

        let progress = subtask_progress(&next.subtasks);
        Some(next.with_completed(progress == 100, progress))
    }

    /// The overdue flag this task should carry at `now`
    pub fn overdue_at(&self, now: DateTime<Local>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }

    pub fn with_overdue(&self, is_overdue: bool) -> Task {
        Task {
            is_overdue,
            ..self.clone()
        }
    }

    pub fn find_subtask(&self, subtask_id: Uuid) -> Option<&Subtask> {
        self.subtasks.iter().find(|st| st.id == subtask_id)
    }

    pub fn completed_subtask_count(&self) -> usize {
        self.subtasks.iter().filter(|st| st.completed).count()
    }

    fn with_completed(mut self, completed: bool, progress: u8) -> Task {
        self.completed = completed;
        self.progress = progress;
        // A completed task is never overdue
        if completed {
            self.is_overdue = false;
        }
        self
    }
}

/// round(100 * completed / total), rounding halves up. Zero for no subtasks.
pub fn subtask_progress(subtasks: &[Subtask]) -> u8 {
    let total = subtasks.len();
    if total == 0 {
        return 0;
    }
    let done = subtasks.iter().filter(|st| st.completed).count();
    ((200 * done + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_test_task(text: &str) -> Task {
        Task::new(
            text.to_string(),
            Category::Work,
            Priority::Medium,
            None,
            Local::now(),
        )
    }

    fn with_subtasks(task: Task, count: usize) -> Task {
        (0..count).fold(task, |t, i| t.with_subtask(Subtask::new(format!("Step {}", i + 1))))
    }

    #[test]
    fn test_task_new() {
        let task = create_test_task("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.progress, 0);
        assert!(task.subtasks.is_empty());
        assert!(!task.is_overdue);
    }

    #[test]
    fn test_toggle_completion() {
        let task = create_test_task("Test");

        let done = task.with_completion_toggled();
        assert!(done.completed);
        assert_eq!(done.progress, 100);

        let reopened = done.with_completion_toggled();
        assert!(!reopened.completed);
        assert_eq!(reopened.progress, 0);

        // Original value untouched
        assert!(!task.completed);
    }

    #[test]
    fn test_toggle_completion_cascades_to_subtasks() {
        let task = with_subtasks(create_test_task("Parent"), 3);
        let first = task.subtasks[0].id;
        let partial = task.with_subtask_toggled(first).unwrap();
        assert_eq!(partial.progress, 33);

        let done = partial.with_completion_toggled();
        assert!(done.subtasks.iter().all(|st| st.completed));
        assert_eq!(done.progress, subtask_progress(&done.subtasks));

        let reopened = done.with_completion_toggled();
        assert!(reopened.subtasks.iter().all(|st| !st.completed));
        assert_eq!(reopened.progress, 0);
    }

    #[test]
    fn test_with_progress() {
        let task = create_test_task("Test");
        let half = task.with_progress(50);
        assert_eq!(half.progress, 50);
        assert!(!half.completed);

        let full = half.with_progress(100);
        assert!(full.completed);

        let back = full.with_progress(99);
        assert!(!back.completed);
    }

    #[test]
    fn test_subtask_toggle_progress() {
        let task = with_subtasks(create_test_task("Parent"), 3);
        let ids: Vec<Uuid> = task.subtasks.iter().map(|st| st.id).collect();

        let t1 = task.with_subtask_toggled(ids[0]).unwrap();
        assert_eq!(t1.progress, 33);
        assert!(!t1.completed);

        let t2 = t1.with_subtask_toggled(ids[1]).unwrap();
        assert_eq!(t2.progress, 67);

        let t3 = t2.with_subtask_toggled(ids[2]).unwrap();
        assert_eq!(t3.progress, 100);
        assert!(t3.completed);

        let t4 = t3.with_subtask_toggled(ids[0]).unwrap();
        assert_eq!(t4.progress, 67);
        assert!(!t4.completed);
    }

    #[test]
    fn test_subtask_toggle_unknown_id() {
        let task = with_subtasks(create_test_task("Parent"), 1);
        assert!(task.with_subtask_toggled(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_subtask_progress_rounding() {
        let mut subtasks: Vec<Subtask> = (0..8).map(|i| Subtask::new(i.to_string())).collect();
        subtasks[0].completed = true;
        // 12.5 rounds up
        assert_eq!(subtask_progress(&subtasks), 13);
        assert_eq!(subtask_progress(&[]), 0);
    }

    #[test]
    fn test_overdue_at() {
        let now = Local::now();
        let mut task = create_test_task("Late");
        assert!(!task.overdue_at(now));

        task.due_date = Some(now - Duration::days(1));
        assert!(task.overdue_at(now));

        task.due_date = Some(now + Duration::days(1));
        assert!(!task.overdue_at(now));

        task.due_date = Some(now - Duration::days(1));
        let done = task.with_completion_toggled();
        assert!(!done.overdue_at(now));
    }

    #[test]
    fn test_completion_clears_overdue() {
        let task = create_test_task("Late").with_overdue(true);
        let done = task.with_completion_toggled();
        assert!(!done.is_overdue);
    }
}
