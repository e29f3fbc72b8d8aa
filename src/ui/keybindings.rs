use crate::app::AppState;
use crate::ui::styles::{error_style, hint_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Enter/Space toggle   "),
        Span::raw("+ / - progress   "),
        Span::raw("a add   "),
        Span::raw("s subtask   "),
        Span::raw("x delete   "),
        Span::raw("c category   "),
        Span::raw("p priority   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

/// Render the status line: current selections, or the last error
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(format!(" {}", message), error_style()))
    } else {
        let category = app.selected_category.map_or("none", |c| c.name());
        let priority = app.selected_priority.map_or("none", |p| p.name());
        Line::from(Span::styled(
            format!(
                " Category: {}   Priority: {}   Tasks: {}   Reminders: {}",
                category,
                priority,
                app.store.len(),
                app.reminders.pending().len()
            ),
            hint_style(),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
