use super::task::Task;
use chrono::{DateTime, Local};
use std::sync::Arc;
use uuid::Uuid;

/// A flattened row for rendering the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatRow {
    /// Depth in the tree (0 = task, 1 = subtask)
    pub depth: usize,
    /// Whether this is the last subtask of its parent
    pub is_last: bool,
    pub task_id: Uuid,
    /// Subtask ID (None for task rows)
    pub subtask_id: Option<Uuid>,
}

/// Flatten an ordered task list into one row per task followed by its subtasks
pub fn flatten_tasks(tasks: &[Arc<Task>]) -> Vec<FlatRow> {
    let mut rows = Vec::new();

    for task in tasks {
        rows.push(FlatRow {
            depth: 0,
            is_last: false,
            task_id: task.id,
            subtask_id: None,
        });

        let subtask_count = task.subtasks.len();
        for (st_idx, subtask) in task.subtasks.iter().enumerate() {
            rows.push(FlatRow {
                depth: 1,
                is_last: st_idx == subtask_count - 1,
                task_id: task.id,
                subtask_id: Some(subtask.id),
            });
        }
    }

    rows
}

/// Render progress as a fixed-width bar, e.g. `[#####-----]`
pub fn progress_bar(progress: u8, width: usize) -> String {
    let filled = (progress.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Checkbox glyph
pub fn checkbox(completed: bool, use_emoji: bool) -> &'static str {
    match (completed, use_emoji) {
        (true, true) => "✅",
        (false, true) => "⬜",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}

/// Format a due date for list and details display
pub fn format_due_date(due: DateTime<Local>) -> String {
    due.format("%d %b %Y").to_string()
}

/// Subtask summary like "2/3"
pub fn subtask_summary(task: &Task) -> Option<String> {
    if task.subtasks.is_empty() {
        None
    } else {
        Some(format!("{}/{}", task.completed_subtask_count(), task.subtasks.len()))
    }
}

/// Get tree connector for subtasks
pub fn tree_connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{Category, Priority};
    use crate::domain::task::Subtask;

    fn create_test_task(text: &str) -> Task {
        Task::new(
            text.to_string(),
            Category::Work,
            Priority::Low,
            None,
            Local::now(),
        )
    }

    #[test]
    fn test_flatten_tasks_simple() {
        let tasks = vec![
            Arc::new(create_test_task("Task 1")),
            Arc::new(create_test_task("Task 2")),
        ];

        let rows = flatten_tasks(&tasks);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[0].task_id, tasks[0].id);
        assert_eq!(rows[1].task_id, tasks[1].id);
        assert!(rows[1].subtask_id.is_none());
    }

    #[test]
    fn test_flatten_tasks_with_subtasks() {
        let task = create_test_task("Parent")
            .with_subtask(Subtask::new("Subtask 1".to_string()))
            .with_subtask(Subtask::new("Subtask 2".to_string()));
        let tasks = vec![Arc::new(task)];

        let rows = flatten_tasks(&tasks);

        assert_eq!(rows.len(), 3); // 1 parent + 2 subtasks
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[1].subtask_id, Some(tasks[0].subtasks[0].id));
        assert!(!rows[1].is_last);
        assert!(rows[2].is_last);
        assert_eq!(rows[2].task_id, tasks[0].id);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(50, 10), "[#####-----]");
        assert_eq!(progress_bar(33, 10), "[###-------]");
        assert_eq!(progress_bar(100, 10), "[##########]");
    }

    #[test]
    fn test_checkbox_ascii() {
        assert_eq!(checkbox(true, false), "[x]");
        assert_eq!(checkbox(false, false), "[ ]");
    }

    #[test]
    fn test_subtask_summary() {
        let task = create_test_task("Parent");
        assert!(subtask_summary(&task).is_none());

        let task = task.with_subtask(Subtask::new("One".to_string()));
        assert_eq!(subtask_summary(&task).as_deref(), Some("0/1"));
    }

    #[test]
    fn test_tree_connector() {
        assert_eq!(tree_connector(false), "├─");
        assert_eq!(tree_connector(true), "└─");
    }
}
