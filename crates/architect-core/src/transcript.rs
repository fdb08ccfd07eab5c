use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Assistant,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Assistant => "assistant",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub question_id: Option<String>,
}

/// The visible chat log. Ids are unique within one transcript only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    #[serde(skip)]
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>, question_id: Option<&str>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TranscriptEntry {
            id,
            role,
            text: text.into(),
            question_id: question_id.map(str::to_string),
        });
        id
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> u64 {
        self.push(Role::Assistant, text, None)
    }

    /// True if the question's prompt has already been shown.
    pub fn has_prompt_for(&self, question_id: &str) -> bool {
        self.entries.iter().any(|e| {
            e.role == Role::Assistant && e.question_id.as_deref() == Some(question_id)
        })
    }

    /// Rewrite every user entry tagged with `question_id`. Returns how many changed.
    pub fn rewrite_user_answers(&mut self, question_id: &str, text: &str) -> usize {
        let mut changed = 0;
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| e.role == Role::User && e.question_id.as_deref() == Some(question_id))
        {
            entry.text = text.to_string();
            changed += 1;
        }
        changed
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut t = Transcript::new();
        let a = t.push_assistant("hello");
        let b = t.push(Role::User, "hi", Some("objective"));
        assert!(b > a);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn has_prompt_for_ignores_user_entries() {
        let mut t = Transcript::new();
        t.push(Role::User, "answer", Some("context"));
        assert!(!t.has_prompt_for("context"));
        t.push(Role::Assistant, "question?", Some("context"));
        assert!(t.has_prompt_for("context"));
    }

    #[test]
    fn rewrite_touches_only_matching_user_entries() {
        let mut t = Transcript::new();
        t.push(Role::Assistant, "q1", Some("objective"));
        t.push(Role::User, "old", Some("objective"));
        t.push(Role::User, "other", Some("context"));
        assert_eq!(t.rewrite_user_answers("objective", "new"), 1);
        assert_eq!(t.entries()[0].text, "q1");
        assert_eq!(t.entries()[1].text, "new");
        assert_eq!(t.entries()[2].text, "other");
        assert_eq!(t.rewrite_user_answers("audience", "x"), 0);
    }
}
