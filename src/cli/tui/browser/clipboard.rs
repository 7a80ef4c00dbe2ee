//! System clipboard sink for code examples.
//!
//! Clipboard failures are logged and swallowed; they never surface to the
//! user or crash the view. The only caller-visible signal is the boolean
//! return, which gates the copy-confirmation toast.

use tracing::warn;

pub struct ClipboardSink {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink {
    pub fn new() -> Self {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Self {
                inner: Some(clipboard),
            },
            Err(err) => {
                warn!("clipboard unavailable: {err}");
                Self { inner: None }
            }
        }
    }

    /// Returns true when the text reached the clipboard.
    pub fn copy(&mut self, text: &str) -> bool {
        let Some(clipboard) = self.inner.as_mut() else {
            return false;
        };
        match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(err) => {
                warn!("clipboard write failed: {err}");
                false
            }
        }
    }
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self::new()
    }
}
