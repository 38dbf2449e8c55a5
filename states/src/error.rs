use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Task failed: {reason}")]
    TaskFailed { reason: String },
}

impl StateError {
    pub fn task_failed(reason: impl Into<String>) -> Self {
        Self::TaskFailed {
            reason: reason.into(),
        }
    }
}
