use serde::Serialize;

/// A single step of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    /// Short label used in the answers panel.
    pub title: &'static str,
    /// Heading used when the answer is rendered into the prompt.
    pub section_title: &'static str,
    pub prompt: &'static str,
    pub helper: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub suggestions: &'static [&'static str],
    pub optional: bool,
}

impl Question {
    pub fn is_required(&self) -> bool {
        !self.optional
    }

    /// Title as shown in listings, with the optional marker appended.
    pub fn display_title(&self) -> String {
        if self.optional {
            format!("{} (Optional)", self.title)
        } else {
            self.title.to_string()
        }
    }
}

pub const CATALOG: &[Question] = &[
    Question {
        id: "objective",
        title: "Objective",
        section_title: "Main Objective",
        prompt: "What is the main goal of the prompt? Explain what you expect the assistant to do.",
        helper: Some(
            "Example: write a 60-second video script that convinces students to study abroad.",
        ),
        placeholder: None,
        suggestions: &[
            "Write a persuasive letter",
            "Generate content ideas",
            "Create a personalised study plan",
            "Produce a detailed script",
        ],
        optional: false,
    },
    Question {
        id: "context",
        title: "Key Context",
        section_title: "Relevant Context",
        prompt: "What background information does the assistant need to know to do a good job?",
        helper: Some(
            "Include relevant data, audience, budget limits, technical restrictions or any important history.",
        ),
        placeholder: Some(
            "The product is a travel-focused mobile platform with a limited marketing budget...",
        ),
        suggestions: &[],
        optional: false,
    },
    Question {
        id: "audience",
        title: "Audience",
        section_title: "Target Audience",
        prompt: "Who is the target audience or final recipient of the result? Describe relevant traits.",
        helper: Some(
            "Age, experience level, role, preferred tone, pains and expectations help steer the answer.",
        ),
        placeholder: None,
        suggestions: &[
            "Marketing professionals",
            "Executive team",
            "Beginner programmers",
            "University students",
        ],
        optional: false,
    },
    Question {
        id: "tone",
        title: "Tone and Style",
        section_title: "Tone/Style Preference",
        prompt: "Which tone, style or voice should the assistant adopt? Are there references or models you like?",
        helper: Some(
            "Think of keywords such as 'didactic', 'analytical', 'executive', 'inspiring' or specific communication styles.",
        ),
        placeholder: None,
        suggestions: &[
            "Consultative tone with clear steps",
            "Direct and objective style",
            "Inspiring narrative with storytelling",
            "Technical tone focused on precision",
        ],
        optional: false,
    },
    Question {
        id: "constraints",
        title: "Constraints",
        section_title: "Constraints and Requirements",
        prompt: "Which requirements, limits or mandatory deliverables must go into the prompt?",
        helper: Some(
            "Include formats, structures, citations, tools to consider or limits that cannot be exceeded.",
        ),
        placeholder: Some(
            "Use bullet points, stay under 500 words, include references, cite reliable sources...",
        ),
        suggestions: &[],
        optional: false,
    },
    Question {
        id: "format",
        title: "Response Format",
        section_title: "Expected Response Format",
        prompt: "How do you want to receive the final answer? Structure, sections, table, checklist, numbered steps?",
        helper: Some(
            "Describe the desired layout: topics, Markdown table, JSON, executive summary, SWOT matrix and so on.",
        ),
        placeholder: None,
        suggestions: &[
            "Prioritised checklist",
            "Markdown table with custom columns",
            "Executive briefing summary",
            "Plan in numbered steps",
        ],
        optional: false,
    },
    Question {
        id: "additional",
        title: "Extra Details",
        section_title: "Additional Information",
        prompt: "Is there any additional detail, inspiring reference or previous result we should consider?",
        helper: Some(
            "Paste useful examples, reference links, personal preferences or material you already have.",
        ),
        placeholder: None,
        suggestions: &[],
        optional: true,
    },
];

pub fn by_id(id: &str) -> Option<&'static Question> {
    CATALOG.iter().find(|q| q.id == id)
}

pub fn by_index(index: usize) -> Option<&'static Question> {
    CATALOG.get(index)
}

pub fn position(id: &str) -> Option<usize> {
    CATALOG.iter().position(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn catalog_has_single_optional_tail() {
        assert_eq!(CATALOG.len(), 7);
        let optional: Vec<_> = CATALOG.iter().filter(|q| q.optional).collect();
        assert_eq!(optional.len(), 1);
        assert_eq!(optional[0].id, "additional");
    }

    #[test]
    fn lookup_by_id_and_index_agree() {
        for (i, q) in CATALOG.iter().enumerate() {
            assert_eq!(by_id(q.id), Some(q));
            assert_eq!(by_index(i), Some(q));
            assert_eq!(position(q.id), Some(i));
        }
        assert!(by_id("missing").is_none());
        assert!(by_index(CATALOG.len()).is_none());
    }

    #[test]
    fn display_title_marks_optional() {
        assert_eq!(by_id("additional").unwrap().display_title(), "Extra Details (Optional)");
        assert_eq!(by_id("objective").unwrap().display_title(), "Objective");
    }
}
