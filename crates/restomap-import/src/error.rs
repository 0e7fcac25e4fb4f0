use thiserror::Error;

/// Advisory shown to the user whenever an import fails, whatever the cause.
pub const IMPORT_FAILED_MESSAGE: &str =
    "Failed to read that file. Please choose an Excel spreadsheet (.xlsx or .xls).";

/// Every way an import attempt can fail.
///
/// All variants are terminal for the attempt; the caller keeps whatever
/// records it had loaded before.
#[derive(Debug, Error)]
pub enum ImportDecodeError {
    #[error("file payload is empty")]
    EmptyPayload,

    #[error("file payload is {size} bytes, over the {limit} byte import limit")]
    TooLarge { size: usize, limit: usize },

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("could not read {format} workbook: {reason}")]
    Unreadable { format: String, reason: String },

    #[error("workbook contains no sheets")]
    NoSheets,

    #[error("import task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ImportDecodeError {
    /// Static, human-readable message for the presentation layer.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        IMPORT_FAILED_MESSAGE
    }
}
