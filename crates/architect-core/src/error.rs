use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchitectError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
