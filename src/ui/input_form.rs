use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_line(value: &str, editing: bool) -> Line<'_> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ])
}

/// Render the input form for adding tasks/subtasks
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area, 14);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        let title_text = if let Some(parent) = form.parent_id.and_then(|id| app.store.get(id)) {
            lines.push(Line::raw(format!("Subtask of: {}", parent.text)));
            lines.push(Line::raw(""));
            lines.push(Line::raw("Text:"));
            lines.push(field_line(&form.text, true));
            " Add Subtask "
        } else {
            let text_label = if form.editing_field == 0 {
                "Task: (editing)"
            } else {
                "Task:"
            };
            lines.push(Line::raw(text_label));
            lines.push(field_line(&form.text, form.editing_field == 0));
            lines.push(Line::raw(""));

            let due_label = if form.editing_field == 1 {
                "Due (YYYY-MM-DD, today, tomorrow): (editing)"
            } else {
                "Due (YYYY-MM-DD, today, tomorrow):"
            };
            lines.push(Line::raw(due_label));
            lines.push(field_line(&form.due, form.editing_field == 1));
            lines.push(Line::raw(""));

            let category = app.selected_category.map_or("choose…", |c| c.name());
            let priority = app.selected_priority.map_or("choose…", |p| p.name());
            lines.push(Line::from(vec![
                Span::raw("Category: "),
                Span::styled(category, modal_title_style()),
                Span::raw("   Priority: "),
                Span::styled(priority, modal_title_style()),
            ]));
            " Add Task "
        };

        if let Some(message) = &app.status_message {
            lines.push(Line::from(Span::styled(message.as_str(), error_style())));
        }
        lines.push(Line::raw(""));

        // Instructions
        if form.is_subtask() {
            lines.push(Line::raw("Enter to submit  ·  Esc to cancel"));
        } else {
            lines.push(Line::raw(
                "Tab to switch fields  ·  Enter to submit  ·  Esc to cancel",
            ));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
