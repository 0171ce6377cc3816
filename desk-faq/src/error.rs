use std::path::PathBuf;

use thiserror::Error;

pub type FaqResult<T> = Result<T, FaqError>;

#[derive(Debug, Error)]
pub enum FaqError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus at {path} is not valid UTF-8 text")]
    InvalidEncoding { path: PathBuf },

    #[error("uploaded corpus contains no FAQ blocks")]
    EmptyUpload,
}
