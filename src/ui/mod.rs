pub mod celebration_pane;
pub mod details_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use celebration_pane::render_celebration;
use details_pane::render_details_pane;
use input_form::render_input_form;
use keybindings::{render_keybindings, render_status_line};
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_category_picker, render_priority_picker};
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);
    render_status_line(f, app, layout.status_area);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }

    // Pickers draw over the form
    render_category_picker(f, app, size);
    render_priority_picker(f, app, size);

    render_celebration(f, app, size);
}
