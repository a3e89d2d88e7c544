use thiserror::Error;

/// Errors that abort server startup
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to prepare log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
