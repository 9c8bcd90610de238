use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlameError {
    #[error("Failed to launch git: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    BlameFailed(String),
}
