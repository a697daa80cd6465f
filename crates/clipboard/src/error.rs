use thiserror::Error;

/// Errors generated by the clipboard library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the system clipboard cannot be opened.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(#[source] arboard::Error),

    /// Error generated by the native clipboard.
    #[error(transparent)]
    Clipboard(#[from] arboard::Error),
}
