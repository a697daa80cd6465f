//! Access to the native system clipboard.
use crate::{Error, Result};
use std::{borrow::Cow, sync::Arc};
use tokio::{
    sync::Mutex,
    time::{sleep, Duration},
};
use zeroize::Zeroize;

/// Default timeout in seconds before copied text is cleared.
pub const DEFAULT_TIMEOUT: u16 = 90;

/// Native system clipboard.
#[derive(Clone)]
pub struct Clipboard {
    inner: Arc<Mutex<arboard::Clipboard>>,
    timeout_seconds: u16,
}

impl Clipboard {
    /// Create a native clipboard using the default
    /// timeout of 90 seconds.
    pub fn new() -> Result<Self> {
        Self::new_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a native clipboard with a timeout.
    ///
    /// A timeout of zero never clears the clipboard.
    pub fn new_timeout(timeout_seconds: u16) -> Result<Self> {
        let inner =
            arboard::Clipboard::new().map_err(Error::ClipboardUnavailable)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(inner)),
            timeout_seconds,
        })
    }

    /// Fetches UTF-8 text from the clipboard and returns it.
    ///
    /// # Errors
    ///
    /// Returns error if clipboard is empty or contents are not UTF-8 text.
    pub async fn get_text(&self) -> Result<String> {
        let mut clipboard = self.inner.lock().await;
        Ok(clipboard.get_text()?)
    }

    /// Places the text onto the clipboard. Any valid UTF-8
    /// string is accepted.
    ///
    /// # Errors
    ///
    /// Returns error if text failed to be stored on the clipboard.
    pub async fn set_text<'a, T: Into<Cow<'a, str>>>(
        &self,
        text: T,
    ) -> Result<()> {
        let mut clipboard = self.inner.lock().await;
        Ok(clipboard.set_text(text)?)
    }

    /// Clears any contents that may be present from the
    /// platform's default clipboard, regardless of the format of the data.
    ///
    /// # Errors
    ///
    /// Returns error on Windows or Linux if clipboard cannot be cleared.
    pub async fn clear(&self) -> Result<()> {
        let mut clipboard = self.inner.lock().await;
        Ok(clipboard.clear()?)
    }

    /// Places text on to the clipboard and waits for the timeout
    /// before clearing the text from the clipboard.
    ///
    /// The text is only cleared if the clipboard contents match the
    /// initial value to allow for the user changing the clipboard
    /// content elsewhere whilst the timeout is active.
    pub async fn set_text_timeout<'a, T: Into<Cow<'a, str>>>(
        &self,
        text: T,
    ) -> Result<()> {
        let text: Cow<'a, str> = text.into();
        let mut text = text.into_owned();
        let result = self.copy_then_clear(&text).await;
        text.zeroize();
        result
    }

    async fn copy_then_clear(&self, text: &str) -> Result<()> {
        self.set_text(text).await?;
        self.clear_timeout(text).await?;
        Ok(())
    }

    /// Wait for the timeout then clear the clipboard if it
    /// still holds the given text.
    ///
    /// Returns immediately without clearing when the
    /// timeout is zero.
    pub async fn clear_timeout(&self, text: &str) -> Result<bool> {
        if self.timeout_seconds == 0 {
            return Ok(false);
        }
        sleep(Duration::from_secs(self.timeout_seconds as u64)).await;
        self.clear_if(text).await
    }

    /// Clear the clipboard only if it holds the given text.
    pub async fn clear_if(&self, text: &str) -> Result<bool> {
        // Empty or non-text contents are never ours to clear
        let mut current = self.get_text().await.unwrap_or_default();
        let matches = current == text;
        current.zeroize();
        if matches {
            self.clear().await?;
            tracing::debug!(
                timeout = self.timeout_seconds,
                "clipboard::cleared"
            );
        } else {
            tracing::debug!("clipboard::changed");
        }
        Ok(matches)
    }
}
