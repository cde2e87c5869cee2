use png_to_embed::FileOperationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments could not be parsed. Holds the message to show the user.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    File(#[from] FileOperationError),
}
