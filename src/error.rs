use thiserror::Error;

#[derive(Error, Debug)]
pub enum UmsatzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("File does not contain the expected statement section")]
    SectionNotFound,

    #[error("Malformed amount: {0}")]
    MalformedNumber(String),

    #[error("Malformed booking date: {0}")]
    BadDate(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, UmsatzError>;
