use serde::Serialize;
use tracing::{debug, warn};

use crate::answers::AnswerStore;
use crate::clipboard::ClipboardWriter;
use crate::error::ArchitectError;
use crate::preferences::RenderPreferences;
use crate::question::{self, Question, CATALOG};
use crate::transcript::{Role, Transcript, TranscriptEntry};

pub const INTRO_MESSAGE: &str = "Hi! I'm your prompt-building assistant. I'll ask a few quick \
     questions to understand what you need. Shall we start?";
pub const RESTART_MESSAGE: &str = "Starting over from scratch. Tell me again what you need and \
     we'll build a new tailored prompt.";
pub const CLOSING_MESSAGE: &str = "Perfect! I've gathered all the information. Check the prompt \
     preview and adjust any detail if you need to.";
pub const COPY_OK_MESSAGE: &str = "Done! Prompt copied to the clipboard. If you need variations \
     or tweaks, just ask.";
pub const COPY_FAILED_MESSAGE: &str = "I couldn't copy automatically. Copy the contents of the \
     preview panel manually.";
pub const DEFAULT_PLACEHOLDER: &str = "Describe as clearly as possible what you want to receive.";

/// Where the conversation currently points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "at", rename_all = "snake_case")]
pub enum Cursor {
    /// Walking the catalog; the question at this index is awaiting an answer.
    Sequential(usize),
    /// Overwriting the answer to this question.
    Editing(&'static str),
}

impl Cursor {
    pub fn index(&self) -> usize {
        match self {
            Cursor::Sequential(i) => *i,
            Cursor::Editing(id) => question::position(id).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// Answer stored and the next question queued.
    Advanced,
    /// Answer stored and the catalog is exhausted.
    Finished,
    /// An earlier answer was overwritten.
    Edited,
}

impl SubmitOutcome {
    pub fn accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Ignored)
    }
}

/// Conversation state for one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    answers: AnswerStore,
    transcript: Transcript,
    cursor: Cursor,
    complete: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::seeded(INTRO_MESSAGE)
    }

    fn seeded(greeting: &str) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_assistant(greeting);
        let first = &CATALOG[0];
        transcript.push(Role::Assistant, first.prompt, Some(first.id));
        Self {
            answers: AnswerStore::new(),
            transcript,
            cursor: Cursor::Sequential(0),
            complete: false,
        }
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn editing(&self) -> Option<&'static str> {
        match self.cursor {
            Cursor::Editing(id) => Some(id),
            Cursor::Sequential(_) => None,
        }
    }

    pub fn current_question(&self) -> &'static Question {
        question::by_index(self.index()).unwrap_or(&CATALOG[CATALOG.len() - 1])
    }

    /// Required questions still unanswered, in catalog order. Advisory only.
    pub fn pending_required(&self) -> Vec<&'static Question> {
        CATALOG
            .iter()
            .filter(|q| q.is_required() && !self.answers.contains(q.id))
            .collect()
    }

    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let outcome = match self.cursor {
            Cursor::Editing(id) => {
                self.answers.insert(id, trimmed);
                let rewritten = self.transcript.rewrite_user_answers(id, trimmed);
                let index = question::position(id).unwrap_or(0);
                self.cursor = Cursor::Sequential(index);
                debug!(question = id, rewritten, "answer edited");
                SubmitOutcome::Edited
            }
            Cursor::Sequential(index) => {
                let Some(current) = question::by_index(index) else {
                    return SubmitOutcome::Ignored;
                };
                self.transcript
                    .push(Role::User, trimmed, Some(current.id));
                self.answers.insert(current.id, trimmed);

                match question::by_index(index + 1) {
                    Some(next) => {
                        self.transcript
                            .push(Role::Assistant, next.prompt, Some(next.id));
                        self.cursor = Cursor::Sequential(index + 1);
                        debug!(answered = current.id, next = next.id, "advanced");
                        SubmitOutcome::Advanced
                    }
                    None => {
                        self.transcript.push_assistant(CLOSING_MESSAGE);
                        self.complete = true;
                        debug!(answered = current.id, "catalog exhausted");
                        SubmitOutcome::Finished
                    }
                }
            }
        };

        if !self.complete && self.pending_required().is_empty() {
            self.complete = true;
            debug!("all required answers collected");
        }

        outcome
    }

    /// Jump to `question_id` for editing. Returns the stored answer (or an empty
    /// string) to pre-fill the input with.
    pub fn edit(&mut self, question_id: &str) -> Result<String, ArchitectError> {
        let q = question::by_id(question_id)
            .ok_or_else(|| ArchitectError::UnknownQuestion(question_id.to_string()))?;

        self.cursor = Cursor::Editing(q.id);
        if !self.transcript.has_prompt_for(q.id) {
            self.transcript.push(Role::Assistant, q.prompt, Some(q.id));
        }
        debug!(question = q.id, "editing");

        Ok(self.answers.get(q.id).unwrap_or_default().to_string())
    }

    /// Leave edit mode without writing, keeping the cursor on the edited question.
    pub fn cancel_edit(&mut self) {
        if let Cursor::Editing(id) = self.cursor {
            self.cursor = Cursor::Sequential(question::position(id).unwrap_or(0));
        }
    }

    pub fn reset(&mut self) {
        *self = Self::seeded(RESTART_MESSAGE);
        debug!("session reset");
    }

    /// Report the outcome of a clipboard export in the transcript.
    pub fn record_copy(&mut self, result: Result<(), ArchitectError>) -> bool {
        match result {
            Ok(()) => {
                self.transcript.push_assistant(COPY_OK_MESSAGE);
                true
            }
            Err(e) => {
                warn!("clipboard write failed: {e}");
                self.transcript.push_assistant(COPY_FAILED_MESSAGE);
                false
            }
        }
    }

    pub fn copy_prompt(&mut self, clipboard: &mut dyn ClipboardWriter, prompt: &str) -> bool {
        let result = clipboard.write_text(prompt);
        self.record_copy(result)
    }

    pub fn input_label(&self) -> String {
        match self.cursor {
            Cursor::Editing(_) => "Editing previous answer".into(),
            Cursor::Sequential(_) => format!("Your answer about {}", self.current_question().title),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing().is_some() {
            "Save changes"
        } else if self.complete {
            "Add note"
        } else {
            "Send answer"
        }
    }

    pub fn placeholder(&self) -> &'static str {
        self.current_question()
            .placeholder
            .unwrap_or(DEFAULT_PLACEHOLDER)
    }

    pub fn progress_message(&self) -> String {
        match self.pending_required().len() {
            0 => "All essential answers collected. Adjust if you like!".into(),
            1 => "1 question pending to finish the perfect prompt.".into(),
            n => format!("{n} questions pending to finish the perfect prompt."),
        }
    }

    /// Snapshot handed to the display surface after each change.
    pub fn view(&self, preferences: &RenderPreferences, prompt: String) -> SessionView {
        SessionView {
            transcript: self.transcript.entries().to_vec(),
            answers: self.answers.clone(),
            pending_required: self.pending_required().iter().map(|q| q.id).collect(),
            cursor: self.cursor,
            complete: self.complete,
            preferences: preferences.clone(),
            prompt,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub transcript: Vec<TranscriptEntry>,
    pub answers: AnswerStore,
    pub pending_required: Vec<&'static str>,
    pub cursor: Cursor,
    pub complete: bool,
    pub preferences: RenderPreferences,
    pub prompt: String,
}
