pub mod instructions;
pub mod preamble;
pub mod sections;

use architect_core::{AnswerStore, RenderPreferences, ReviewMode};

/// Assemble the final prompt from the collected answers and the render preferences.
///
/// Pure and total: any subset of answers (including none) yields the preamble,
/// the sections that exist, and the instruction block, separated by blank lines
/// and ending in a single newline.
pub fn assemble_prompt(
    answers: &AnswerStore,
    focus: &[String],
    language: &str,
    review_mode: ReviewMode,
) -> String {
    let mut prompt = String::new();
    preamble::append_preamble(&mut prompt);

    let sections = sections::collect_sections(answers);
    if !sections.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(&sections.join("\n\n"));
    }

    prompt.push_str("\n\n");
    instructions::append_instructions(&mut prompt, focus, language, review_mode);
    prompt.push('\n');
    prompt
}

/// Convenience wrapper taking the preference panel state as a whole.
pub fn render(answers: &AnswerStore, prefs: &RenderPreferences) -> String {
    assemble_prompt(answers, &prefs.focus, &prefs.language, prefs.review_mode)
}

#[cfg(test)]
mod tests {
    use super::instructions::{
        ASK_WHEN_MISSING, BALANCED_FOCUS, DEFAULT_LANGUAGE_LINE, VALIDATION_CHECKLIST,
    };
    use super::preamble::PREAMBLE;
    use super::*;

    fn full_answers() -> AnswerStore {
        [
            ("objective", "Write a persuasive letter"),
            ("context", "Small travel startup"),
            ("audience", "University students"),
            ("tone", "Direct and objective style"),
            ("constraints", "Under 300 words"),
            ("format", "Plan in numbered steps"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_answers_yield_preamble_and_default_instructions() {
        let out = assemble_prompt(&AnswerStore::new(), &[], "English", ReviewMode::Structured);
        let expected = format!(
            "{PREAMBLE}\n\n{BALANCED_FOCUS} {DEFAULT_LANGUAGE_LINE} {} {ASK_WHEN_MISSING} {VALIDATION_CHECKLIST}\n",
            instructions::review_line(ReviewMode::Structured)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn render_is_deterministic() {
        let answers = full_answers();
        let focus = vec!["Depth".to_string()];
        let a = assemble_prompt(&answers, &focus, "Spanish", ReviewMode::Mentor);
        let b = assemble_prompt(&answers, &focus, "Spanish", ReviewMode::Mentor);
        assert_eq!(a, b);
    }

    #[test]
    fn clarity_structured_default_language_block() {
        let focus = vec!["Clarity".to_string()];
        let out = assemble_prompt(&full_answers(), &focus, "English", ReviewMode::Structured);
        let block = out.trim_end().rsplit("\n\n").next().unwrap();
        assert!(block.starts_with(&format!(
            "Prioritize: Clarity. {DEFAULT_LANGUAGE_LINE} {}",
            instructions::review_line(ReviewMode::Structured)
        )));
        assert_eq!(block.matches("Prioritize").count(), 1);
    }

    #[test]
    fn empty_focus_never_emits_bare_prioritize() {
        let out = assemble_prompt(&full_answers(), &[], "English", ReviewMode::Critical);
        assert!(out.contains(BALANCED_FOCUS));
        assert!(!out.contains("Prioritize:"));
    }

    #[test]
    fn layout_has_blank_line_between_blocks_and_single_trailing_newline() {
        let out = assemble_prompt(&full_answers(), &[], "English", ReviewMode::Structured);
        assert!(out.starts_with(PREAMBLE));
        assert!(out.ends_with('\n'));
        assert!(!out.ends_with("\n\n"));
        assert!(out.contains("\n\nMain Objective:\nWrite a persuasive letter\n\nRelevant Context:"));
        assert!(!out.contains("Additional Information"));
    }

    #[test]
    fn render_uses_preferences() {
        let prefs = RenderPreferences::default();
        let out = render(&AnswerStore::new(), &prefs);
        assert!(out.contains("Prioritize: Clarity, Depth."));
        assert!(out.contains(DEFAULT_LANGUAGE_LINE));
    }
}
