use passgen_clipboard::Clipboard;
use passgen_password::{
    secrecy::{ExposeSecret, SecretString},
    Outcome, PasswordSession, PLACEHOLDER,
};

use crate::helpers::{
    copy_password,
    display::{display_password, length_line, strength_line},
    messages::fail,
    open_clipboard, CopyStatus,
};

/// State owned by the interactive shell.
pub struct ShellState {
    session: PasswordSession,
    clipboard: Option<Clipboard>,
    clipboard_timeout: u16,
    copied: Option<SecretString>,
}

impl ShellState {
    /// Create shell state, the clipboard is opened on first copy.
    pub fn new(session: PasswordSession, clipboard_timeout: u16) -> Self {
        Self {
            session,
            clipboard: None,
            clipboard_timeout,
            copied: None,
        }
    }

    /// Generator session.
    pub fn session(&self) -> &PasswordSession {
        &self.session
    }

    /// Mutable generator session.
    pub fn session_mut(&mut self) -> &mut PasswordSession {
        &mut self.session
    }

    /// Copy the last generated password.
    pub async fn copy(&mut self) -> CopyStatus {
        if self.clipboard.is_none() && self.session.password().is_some() {
            self.clipboard = open_clipboard(self.clipboard_timeout);
        }
        let status =
            copy_password(self.clipboard.as_ref(), self.session.password())
                .await;
        if let (CopyStatus::Copied, Some(password)) =
            (status, self.session.password())
        {
            self.copied = Some(SecretString::from(
                password.expose_secret().to_owned(),
            ));
        }
        status
    }

    /// Clear the clipboard if it still holds a password
    /// copied from this shell.
    pub async fn close(&mut self) {
        if let (Some(clipboard), Some(copied)) =
            (self.clipboard.as_ref(), self.copied.take())
        {
            if let Err(e) = clipboard.clear_if(copied.expose_secret()).await {
                tracing::warn!(error = %e, "shell::clear_clipboard");
            }
        }
    }

    /// Print the password, length and strength.
    pub fn print(&self, outcome: &Outcome) {
        if outcome.generated {
            display_password("Password", self.session.display());
        } else {
            fail(PLACEHOLDER);
        }
        let classes = &self.session.request().classes;
        if classes.is_empty() {
            println!("Classes  none");
        } else {
            println!("Classes  {}", classes);
        }
        println!("{}", length_line(outcome.length, self.session.range()));
        println!("{}", strength_line(&outcome.strength));
    }
}
