pub mod enums;
pub mod error;
pub mod store;
pub mod task;
pub mod views;

pub use enums::{Category, Priority, UiMode};
pub use error::ValidationError;
pub use store::{StoreEvent, TaskStore};
pub use task::{Subtask, Task};
pub use views::{
    checkbox, flatten_tasks, format_due_date, progress_bar, subtask_summary, tree_connector,
    FlatRow,
};
