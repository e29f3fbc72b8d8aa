use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::ui::layout::create_modal_area;

const CONFETTI_COLORS: [Color; 5] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightMagenta,
];

/// Render the confetti overlay while the celebration is playing
pub fn render_celebration(f: &mut Frame, app: &AppState, area: Rect) {
    if !app.celebration.is_playing() {
        return;
    }

    let frame = app.celebration.frame() as usize;
    let lines = confetti_frame(frame, app.config.use_emoji);
    let overlay = create_modal_area(area, lines.len() as u16 + 2);

    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🎉 Done! ")
        .style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, overlay);
}

/// One frame of falling confetti; rows shift down as frames advance
fn confetti_frame(frame: usize, use_emoji: bool) -> Vec<Line<'static>> {
    let pieces: &[&str] = if use_emoji {
        &["✦", "•", "✧", "◆", "*"]
    } else {
        &["*", "+", "o", "x", "."]
    };
    let rows = [
        "  #   #    #   #  ",
        " #  #   #    #   #",
        "#   #  #  #   #   ",
        "  #    #   #  #  #",
        " #   #   #   #  # ",
    ];

    let mut lines: Vec<Line<'static>> = (0..rows.len())
        .map(|i| {
            // Rotate rows so the pattern appears to fall
            let row = rows[(i + rows.len() - frame % rows.len()) % rows.len()];
            let spans = row
                .chars()
                .enumerate()
                .map(|(col, c)| {
                    if c == '#' {
                        let pick = (col + i + frame) % pieces.len();
                        Span::styled(
                            pieces[pick],
                            Style::default().fg(CONFETTI_COLORS[pick % CONFETTI_COLORS.len()]),
                        )
                    } else {
                        Span::raw(" ")
                    }
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Task complete",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_confetti_frame_shape() {
        let lines = confetti_frame(0, false);
        assert_eq!(lines.len(), 7);
        assert_eq!(text(&lines[6]), "Task complete");
    }

    #[test]
    fn test_confetti_falls() {
        let first = confetti_frame(0, false);
        let next = confetti_frame(1, false);
        // Row 0 of the next frame has the shape of the last row of the first
        let shape = |line: &Line| text(line).chars().map(|c| c != ' ').collect::<Vec<_>>();
        assert_eq!(shape(&next[1]), shape(&first[0]));
    }
}
