pub mod answers;
pub mod clipboard;
pub mod error;
pub mod preferences;
pub mod question;
pub mod session;
pub mod suggestion;
pub mod transcript;

pub use answers::AnswerStore;
pub use clipboard::ClipboardWriter;
pub use error::ArchitectError;
pub use preferences::{RenderPreferences, ReviewMode};
pub use question::{Question, CATALOG};
pub use session::{Cursor, Session, SessionView, SubmitOutcome};
pub use transcript::{Role, Transcript, TranscriptEntry};
