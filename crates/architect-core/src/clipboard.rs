use crate::error::ArchitectError;

/// Port for exporting the rendered prompt.
pub trait ClipboardWriter {
    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ArchitectError>;
}

/// Clipboard used when no system clipboard is available. Every write fails,
/// which the session reports as a manual-copy advisory.
#[derive(Debug, Default)]
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ClipboardWriter for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ArchitectError> {
        Err(ArchitectError::Clipboard(self.reason.clone()))
    }
}
