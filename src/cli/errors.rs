use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid margins: {value}. Expected one value or four comma-separated values (top,right,bottom,left)")]
    InvalidMargins { value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pdftotext(#[from] pdftotext::Error),
}
