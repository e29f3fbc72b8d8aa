use crate::app::AppState;
use crate::domain::{
    checkbox, flatten_tasks, format_due_date, progress_bar, subtask_summary, tree_connector,
    Subtask, Task,
};
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, overdue_style, rgb, selected_style,
    title_style, tree_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const BAR_WIDTH: usize = 10;

/// Render the task list pane (sorted view)
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.store.sorted_view();
    let rows = flatten_tasks(&tasks);
    let use_emoji = app.config.use_emoji;

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let task = tasks.iter().find(|t| t.id == row.task_id)?;
            let line = match row.subtask_id {
                Some(subtask_id) => {
                    create_subtask_line(task.find_subtask(subtask_id)?, row.is_last, use_emoji)
                }
                None => create_task_line(task, use_emoji),
            };
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            Some(ListItem::new(line).style(style))
        })
        .collect();

    let date = Local::now().format("%a %b %d");
    let title = format!(" Listo ✔ ({}) ", date);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.store.is_empty() {
        let hint = Paragraph::new("No tasks yet. Press 'a' to add one.")
            .style(hint_style())
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    f.render_widget(List::new(items).block(block), area);
}

/// Create the line for a task
/// Format: ✅ ↑ 💼 Write proposal  [#####-----] 50%  2/4  📅 21 Oct 2026  OVERDUE
fn create_task_line(task: &Task, use_emoji: bool) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::raw(format!("{} ", checkbox(task.completed, use_emoji))));
    spans.push(Span::styled(
        format!("{} ", task.priority.icon(use_emoji)),
        Style::default().fg(rgb(task.priority.rgb())),
    ));
    spans.push(Span::styled(
        format!("{} ", task.category.icon(use_emoji)),
        Style::default().fg(rgb(task.category.rgb())),
    ));

    let text_style = if task.completed {
        done_style()
    } else if task.is_overdue {
        overdue_style()
    } else {
        Style::default()
    };
    spans.push(Span::styled(task.text.clone(), text_style));
    spans.push(Span::raw("  ".to_string()));

    spans.push(Span::styled(
        progress_bar(task.progress, BAR_WIDTH),
        Style::default().fg(rgb(task.category.rgb())),
    ));
    spans.push(Span::raw(format!(" {:>3}%", task.progress)));

    if let Some(summary) = subtask_summary(task) {
        spans.push(Span::raw(format!("  {}", summary)));
    }

    if let Some(due) = task.due_date {
        let due_style = if task.is_overdue {
            overdue_style()
        } else {
            Style::default()
        };
        let icon = if use_emoji { "📅" } else { "due" };
        spans.push(Span::styled(
            format!("  {} {}", icon, format_due_date(due)),
            due_style,
        ));
    }

    if task.is_overdue {
        spans.push(Span::styled("  OVERDUE".to_string(), overdue_style()));
    }

    Line::from(spans)
}

/// Create the line for a subtask
fn create_subtask_line(subtask: &Subtask, is_last: bool, use_emoji: bool) -> Line<'static> {
    let text_style = if subtask.completed {
        done_style()
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled("   ".to_string(), tree_style()),
        Span::styled(tree_connector(is_last).to_string(), tree_style()),
        Span::raw(format!(" {} ", checkbox(subtask.completed, use_emoji))),
        Span::styled(subtask.text.clone(), text_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Priority};
    use chrono::Duration;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn create_test_task(text: &str) -> Task {
        Task::new(
            text.to_string(),
            Category::Work,
            Priority::High,
            None,
            Local::now(),
        )
    }

    #[test]
    fn test_create_task_line() {
        let task = create_test_task("Test task").with_progress(50);
        let text = line_text(&create_task_line(&task, false));

        assert!(text.starts_with("[ ] ^ W Test task"));
        assert!(text.contains("[#####-----]  50%"));
        assert!(!text.contains("OVERDUE"));
    }

    #[test]
    fn test_create_overdue_task_line() {
        let mut task = create_test_task("Late");
        task.due_date = Some(Local::now() - Duration::days(1));
        let task = task.with_overdue(true);

        let text = line_text(&create_task_line(&task, false));
        assert!(text.contains("due "));
        assert!(text.ends_with("OVERDUE"));
    }

    #[test]
    fn test_create_subtask_line() {
        let subtask = Subtask::new("Subtask".to_string());
        let text = line_text(&create_subtask_line(&subtask, true, false));
        assert_eq!(text, "   └─ [ ] Subtask");
    }
}
