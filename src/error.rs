use thiserror::Error;

#[derive(Debug, Error)]
pub enum TasklistError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Standard input closed before the end command")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, TasklistError>;
