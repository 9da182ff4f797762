//! Error taxonomy for the page controllers.
//!
//! Every variant stays local to the controller that produced it: callers log
//! or alert and move on, nothing here is fatal to the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure raised by a controller or by the browser surface beneath it.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A required element id is not present in the document.
    #[error("required element not found: #{0}")]
    MissingElement(String),
    /// Listeners are already bound to this element by an earlier mount.
    #[error("controller already mounted on #{0}")]
    AlreadyMounted(String),
    /// A dropped file does not carry the accepted extension.
    #[error("unsupported file type: {0}")]
    InvalidFileType(String),
    /// The form was submitted with an empty file input.
    #[error("no file selected")]
    NoFileSelected,
    /// Neither the payload attribute nor the list element yielded text.
    #[error("nothing to copy")]
    EmptyPayload,
    /// The async clipboard API rejected the write.
    #[error("clipboard write rejected: {0}")]
    Clipboard(String),
    /// The legacy `execCommand("copy")` path failed.
    #[error("legacy copy failed: {0}")]
    LegacyCopy(String),
    /// Element-id overrides could not be parsed.
    #[error("invalid controller config: {0}")]
    Config(#[from] serde_json::Error),
    /// A browser API call failed.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl UiError {
    /// Whether the user should be told to copy by hand.
    #[must_use]
    pub fn is_copy_failure(&self) -> bool {
        matches!(self, Self::EmptyPayload | Self::Clipboard(_) | Self::LegacyCopy(_))
    }
}
