use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("No task description provided")]
    NoTaskDescription,

    #[error("`{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RunError>;
