use arboard::Clipboard;
use architect_core::clipboard::UnavailableClipboard;
use architect_core::{ArchitectError, ClipboardWriter};
use tracing::warn;

/// Arboard-based clipboard implementation.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self, ArchitectError> {
        let clipboard = Clipboard::new().map_err(|e| ArchitectError::Clipboard(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ArchitectError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| ArchitectError::Clipboard(e.to_string()))
    }
}

/// Pick the system clipboard when possible. Failing that, copying falls back to
/// the manual-copy advisory instead of aborting start-up.
pub fn system_clipboard(disabled: bool) -> Box<dyn ClipboardWriter> {
    if disabled {
        return Box::new(UnavailableClipboard::new("clipboard disabled"));
    }
    match ArboardClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            warn!("system clipboard unavailable: {e}");
            Box::new(UnavailableClipboard::new(e.to_string()))
        }
    }
}
