use crate::app::AppState;
use crate::domain::{Category, Priority, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, rgb},
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// One picker entry: key, icon, name, color, whether it is current
fn picker_line(
    key: usize,
    icon: &str,
    name: &'static str,
    color: (u8, u8, u8),
    is_current: bool,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("  [{}] ", key), modal_title_style()),
        Span::styled(format!("{} ", icon), Style::default().fg(rgb(color))),
    ];
    if is_current {
        spans.push(Span::styled(name, modal_title_style()));
        spans.push(Span::raw(" ← Current"));
    } else {
        spans.push(Span::raw(name));
    }
    Line::from(spans)
}

fn render_picker(f: &mut Frame, area: Rect, title: &'static str, mut lines: Vec<Line<'static>>) {
    let modal_area = create_modal_area(area, lines.len() as u16 + 6);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    lines.insert(0, Line::raw(""));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Esc]", modal_title_style()),
        Span::raw(" Cancel"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the category picker
pub fn render_category_picker(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::SelectingCategory {
        return;
    }
    let use_emoji = app.config.use_emoji;

    let lines = Category::all()
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            picker_line(
                idx + 1,
                category.icon(use_emoji),
                category.name(),
                category.rgb(),
                app.selected_category == Some(*category),
            )
        })
        .collect();

    render_picker(f, area, " Choose Category ", lines);
}

/// Render the priority picker
pub fn render_priority_picker(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::SelectingPriority {
        return;
    }
    let use_emoji = app.config.use_emoji;

    let lines = Priority::all()
        .iter()
        .enumerate()
        .map(|(idx, priority)| {
            picker_line(
                idx + 1,
                priority.icon(use_emoji),
                priority.name(),
                priority.rgb(),
                app.selected_priority == Some(*priority),
            )
        })
        .collect();

    render_picker(f, area, " Choose Priority ", lines);
}
