use std::collections::BTreeMap;

use serde::Serialize;

/// Latest trimmed answer per question id. Only non-empty answers are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: BTreeMap<String, String>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` trimmed. Blank text is ignored and returns false.
    pub fn insert(&mut self, question_id: &str, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.answers
            .insert(question_id.to_string(), trimmed.to_string());
        true
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for AnswerStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = AnswerStore::new();
        for (k, v) in iter {
            store.insert(k.as_ref(), v.as_ref());
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_trims_and_overwrites() {
        let mut store = AnswerStore::new();
        assert!(store.insert("objective", "  first  "));
        assert_eq!(store.get("objective"), Some("first"));
        assert!(store.insert("objective", "second"));
        assert_eq!(store.get("objective"), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn blank_insert_is_rejected() {
        let mut store = AnswerStore::new();
        assert!(!store.insert("objective", " \n\t "));
        assert!(!store.contains("objective"));
        assert!(store.is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let store: AnswerStore = [("tone", "calm"), ("format", "")].into_iter().collect();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("tone"), Some("calm"));
    }
}
