use crate::celebration::Celebration;
use crate::config::Config;
use crate::domain::{
    flatten_tasks, Category, FlatRow, Priority, StoreEvent, TaskStore, UiMode, ValidationError,
};
use crate::notifications;
use crate::reminders::ReminderScheduler;
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Input form state for adding tasks and subtasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub text: String,
    /// Due date as typed (YYYY-MM-DD, "today", "tomorrow" or empty)
    pub due: String,
    /// Parent task when adding a subtask
    pub parent_id: Option<Uuid>,
    pub editing_field: usize, // 0 = text, 1 = due
}

impl InputFormState {
    pub fn is_subtask(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub reminders: ReminderScheduler,
    pub celebration: Celebration,
    pub config: Config,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    /// Category and priority stay selected across new tasks
    pub selected_category: Option<Category>,
    pub selected_priority: Option<Priority>,
    pub status_message: Option<String>,
    /// Mode to go back to when a picker closes
    picker_return: UiMode,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: TaskStore::new(),
            reminders: ReminderScheduler::new(config.reminder_hour),
            celebration: Celebration::default(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            selected_category: config.default_category,
            selected_priority: config.default_priority,
            status_message: None,
            picker_return: UiMode::Normal,
            config,
        }
    }

    /// Rows of the sorted view, each task followed by its subtasks
    pub fn rows(&self) -> Vec<FlatRow> {
        flatten_tasks(&self.store.sorted_view())
    }

    pub fn selected_row(&self) -> Option<FlatRow> {
        self.rows().get(self.selected_index).copied()
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.rows().len() {
            self.selected_index += 1;
        }
    }

    /// Move the selection onto a task's own row
    fn select_task(&mut self, task_id: Uuid) {
        if let Some(index) = self
            .rows()
            .iter()
            .position(|row| row.task_id == task_id && row.subtask_id.is_none())
        {
            self.selected_index = index;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Toggle the selected task, or the selected subtask
    pub fn toggle_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        match row.subtask_id {
            Some(subtask_id) => {
                self.store.toggle_subtask(row.task_id, subtask_id);
            }
            None => {
                self.store.toggle_completion(row.task_id);
            }
        }
        self.dispatch_events();
    }

    /// Nudge progress of the selected task by `delta` percent
    pub fn adjust_progress(&mut self, delta: i32) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let Some(task) = self.store.get(row.task_id) else {
            return;
        };

        let progress = (i32::from(task.progress) + delta).clamp(0, 100);
        match self.store.set_progress(row.task_id, progress) {
            Ok(_) => self.status_message = None,
            Err(e) => self.report(e),
        }
        self.dispatch_events();
    }

    /// Delete the selected task (subtasks go with their parent)
    pub fn delete_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            self.store.delete(row.task_id);
            self.clamp_selection();
            self.dispatch_events();
        }
    }

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            text: String::new(),
            due: String::new(),
            parent_id: None,
            editing_field: 0,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Start adding a subtask to the selected task
    pub fn start_add_subtask(&mut self) {
        let Some(row) = self.selected_row() else {
            self.status_message = Some("Select a task first".to_string());
            return;
        };
        self.input_form = Some(InputFormState {
            text: String::new(),
            due: String::new(),
            parent_id: Some(row.task_id),
            editing_field: 0,
        });
        self.ui_mode = UiMode::AddingSubtask;
    }

    /// Toggle between text and due date (task form only)
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            if !form.is_subtask() {
                form.editing_field = (form.editing_field + 1) % 2;
            }
        }
    }

    /// Add character to input form (current field)
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.push(c),
                1 => form.due.push(c),
                _ => {}
            }
        }
    }

    /// Backspace in input form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.text.pop();
                }
                1 => {
                    form.due.pop();
                }
                _ => {}
            }
        }
    }

    /// Submit input form and create the task or subtask.
    /// The form stays open on validation errors.
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.clone() else {
            return;
        };

        if let Some(parent_id) = form.parent_id {
            match self.store.add_subtask(parent_id, &form.text) {
                Ok(_) => self.close_input_form(),
                Err(e) => self.report(e),
            }
            return;
        }

        let due_date = match parse_due_date(&form.due, Local::now()) {
            Ok(due) => due,
            Err(message) => {
                self.status_message = Some(message);
                return;
            }
        };

        match self.store.create(
            &form.text,
            self.selected_category,
            self.selected_priority,
            due_date,
        ) {
            Ok(task) => {
                debug!(task_id = %task.id, "task added from form");
                self.close_input_form();
                // The new task may land above the old selection
                self.select_task(task.id);
                self.dispatch_events();
            }
            Err(ValidationError::MissingCategory) => {
                self.report(ValidationError::MissingCategory);
                self.open_category_picker();
            }
            Err(ValidationError::MissingPriority) => {
                self.report(ValidationError::MissingPriority);
                self.open_priority_picker();
            }
            Err(e) => self.report(e),
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.close_input_form();
    }

    fn close_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
        self.status_message = None;
    }

    pub fn open_category_picker(&mut self) {
        self.open_picker(UiMode::SelectingCategory);
    }

    pub fn open_priority_picker(&mut self) {
        self.open_picker(UiMode::SelectingPriority);
    }

    fn open_picker(&mut self, mode: UiMode) {
        if !matches!(self.ui_mode, UiMode::SelectingCategory | UiMode::SelectingPriority) {
            self.picker_return = self.ui_mode;
        }
        self.ui_mode = mode;
    }

    /// Pick a category by its position in the catalog
    pub fn select_category(&mut self, index: usize) {
        if let Some(category) = Category::all().get(index) {
            self.selected_category = Some(*category);
            self.status_message = None;
            self.close_picker();
        }
    }

    /// Pick a priority by its position in the catalog
    pub fn select_priority(&mut self, index: usize) {
        if let Some(priority) = Priority::all().get(index) {
            self.selected_priority = Some(*priority);
            self.status_message = None;
            self.close_picker();
        }
    }

    pub fn close_picker(&mut self) {
        self.ui_mode = self.picker_return;
        self.picker_return = UiMode::Normal;
    }

    /// Per-tick work: animation, overdue flags, due reminders
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.celebration.tick();
        self.store.overdue_sweep(now);

        for reminder in self.reminders.take_due(now) {
            info!(task_id = %reminder.task_id, "reminder due");
            notifications::notify_reminder(&reminder.message());
        }

        self.dispatch_events();
    }

    /// Route store events to the collaborators
    pub fn dispatch_events(&mut self) {
        let events = self.store.drain_events();
        if !events.is_empty() {
            debug!(
                revision = self.store.snapshot().revision(),
                count = events.len(),
                "dispatching store events"
            );
        }
        for event in events {
            match event {
                StoreEvent::CreatedWithDueDate {
                    task_id,
                    text,
                    due_date,
                } => {
                    if self
                        .reminders
                        .schedule(task_id, &text, due_date, Local::now())
                        .is_none()
                    {
                        warn!(task_id = %task_id, "no reminder scheduled for task");
                    }
                }
                StoreEvent::BecameCompleted { text, .. } => {
                    self.celebration.play(self.config.celebration_ticks());
                    notifications::notify_task_completed(&text);
                }
                StoreEvent::Deleted { task_id } => {
                    if self.reminders.cancel(task_id) {
                        debug!(task_id = %task_id, "reminder cancelled");
                    }
                }
            }
        }
    }

    fn report(&mut self, error: ValidationError) {
        debug!(%error, "rejected");
        self.status_message = Some(error.to_string());
    }
}

/// Parse the due-date field. Empty means no due date; a date means the
/// end of that day in local time.
pub fn parse_due_date(
    input: &str,
    now: DateTime<Local>,
) -> Result<Option<DateTime<Local>>, String> {
    let input = input.trim();
    let date = match input.to_lowercase().as_str() {
        "" => return Ok(None),
        "today" => now.date_naive(),
        "tomorrow" => now.date_naive() + Duration::days(1),
        _ => NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| format!("Invalid due date '{}'. Use YYYY-MM-DD", input))?,
    };

    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default();
    match Local.from_local_datetime(&date.and_time(end_of_day)) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => Ok(Some(t)),
        LocalResult::None => Err(format!("Due date '{}' does not exist locally", input)),
    }
}
