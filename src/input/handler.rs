use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::AddingSubtask => handle_input_form_mode(app, key),
        UiMode::SelectingCategory => handle_category_picker(app, key),
        UiMode::SelectingPriority => handle_priority_picker(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let step = i32::from(app.config.progress_step);

    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),

        // Toggle task or subtask
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),

        // Adjust progress
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_progress(step),
        KeyCode::Char('-') | KeyCode::Char('_') => app.adjust_progress(-step),

        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.start_add_subtask(),

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('c') | KeyCode::Char('C') => app.open_category_picker(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.open_priority_picker(),

        KeyCode::Esc => app.status_message = None,

        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while the add form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Tab | KeyCode::BackTab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Digit '1'..'9' as a zero-based picker index
fn digit_index(key: &KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| *d > 0)
            .map(|d| d as usize - 1),
        _ => None,
    }
}

fn handle_category_picker(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Esc {
        app.close_picker();
    } else if let Some(index) = digit_index(&key) {
        app.select_category(index);
    }
    Ok(false)
}

fn handle_priority_picker(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Esc {
        app.close_picker();
    } else if let Some(index) = digit_index(&key) {
        app.select_priority(index);
    }
    Ok(false)
}
