use thiserror::Error;

/// Rejections raised by task store operations. The store is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text must not be empty")]
    EmptyText,
    #[error("choose a category first")]
    MissingCategory,
    #[error("choose a priority first")]
    MissingPriority,
    #[error("progress {0} is outside 0..=100")]
    OutOfRangeProgress(i32),
    #[error("progress follows the subtasks of this task")]
    ProgressDerivedFromSubtasks,
}
