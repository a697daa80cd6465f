use passgen_clipboard::Clipboard;
use passgen_password::secrecy::{ExposeSecret, SecretString};

pub(crate) mod display;
pub(crate) mod readline;

pub use passgen_cli_helpers::messages;

use passgen_cli_helpers::messages::{fail, success, warn};

/// Status of a copy to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    /// Password was placed on the clipboard.
    Copied,
    /// No password has been generated.
    NothingToCopy,
    /// Clipboard could not be written.
    Failed,
}

impl CopyStatus {
    /// Message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Copied => "Copied!",
            Self::NothingToCopy => "Generate password first!",
            Self::Failed => "Failed to copy",
        }
    }

    /// Print the status message.
    pub fn print(&self) {
        match self {
            Self::Copied => success(self.message()),
            Self::NothingToCopy => warn(self.message()),
            Self::Failed => fail(self.message()),
        }
    }
}

/// Open the system clipboard, failure is reported and
/// treated as no clipboard.
pub(crate) fn open_clipboard(timeout_seconds: u16) -> Option<Clipboard> {
    match Clipboard::new_timeout(timeout_seconds) {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard::open");
            None
        }
    }
}

/// Copy the last generated password.
pub(crate) async fn copy_password(
    clipboard: Option<&Clipboard>,
    password: Option<&SecretString>,
) -> CopyStatus {
    let Some(password) = password else {
        return CopyStatus::NothingToCopy;
    };
    let Some(clipboard) = clipboard else {
        return CopyStatus::Failed;
    };
    match clipboard.set_text(password.expose_secret()).await {
        Ok(_) => CopyStatus::Copied,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard::copy");
            CopyStatus::Failed
        }
    }
}
