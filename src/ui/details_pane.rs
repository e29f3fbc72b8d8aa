use crate::app::AppState;
use crate::domain::{checkbox, format_due_date};
use crate::ui::styles::{border_style, default_style, overdue_style, rgb, title_style};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let Some(task) = app
        .selected_row()
        .and_then(|row| app.store.get(row.task_id))
    else {
        f.render_widget(Paragraph::new("No task selected").block(block), area);
        return;
    };
    let use_emoji = app.config.use_emoji;

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Task: ", title_style()),
        Span::raw(task.text.clone()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Category: ", title_style()),
        Span::styled(
            format!("{} {}", task.category.icon(use_emoji), task.category.name()),
            Style::default().fg(rgb(task.category.rgb())),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Priority: ", title_style()),
        Span::styled(
            format!("{} {}", task.priority.icon(use_emoji), task.priority.name()),
            Style::default().fg(rgb(task.priority.rgb())),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Progress: ", title_style()),
        Span::raw(format!("{}%", task.progress)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Created:  ", title_style()),
        Span::raw(task.created_at.format("%d %b %Y %H:%M").to_string()),
    ]));

    if let Some(due) = task.due_date {
        let due_style = if task.is_overdue {
            overdue_style()
        } else {
            default_style()
        };
        lines.push(Line::from(vec![
            Span::styled("Due:      ", title_style()),
            Span::styled(format_due_date(due), due_style),
        ]));
    }
    lines.push(Line::raw(""));

    if task.subtasks.is_empty() {
        lines.push(Line::from(Span::styled("Subtasks: (none)", default_style())));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "Subtasks ({}/{}):",
                task.completed_subtask_count(),
                task.subtasks.len()
            ),
            title_style(),
        )));
        for subtask in &task.subtasks {
            lines.push(Line::raw(format!(
                "  {} {}",
                checkbox(subtask.completed, use_emoji),
                subtask.text
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
