use architect_core::preferences::DEFAULT_LANGUAGE;
use architect_core::ReviewMode;

pub const BALANCED_FOCUS: &str = "Prioritize a balance between quality, clarity and concision.";
pub const DEFAULT_LANGUAGE_LINE: &str = "Respond in clear English.";
pub const ASK_WHEN_MISSING: &str =
    "If important data is missing, ask specific questions before finalizing.";
pub const VALIDATION_CHECKLIST: &str =
    "When delivering the result, include a brief validation checklist of the items covered.";

pub fn focus_line(focus: &[String]) -> String {
    if focus.is_empty() {
        BALANCED_FOCUS.to_string()
    } else {
        format!("Prioritize: {}.", focus.join(", "))
    }
}

pub fn language_line(language: &str) -> String {
    if language == DEFAULT_LANGUAGE {
        DEFAULT_LANGUAGE_LINE.to_string()
    } else {
        format!("Produce the answer in {language}.")
    }
}

pub fn review_line(mode: ReviewMode) -> &'static str {
    match mode {
        ReviewMode::Structured => {
            "Before answering, structure the analysis into sections with clear headings."
        }
        ReviewMode::Mentor => {
            "Take the stance of an experienced mentor, briefly explain the choices and \
             suggest practical next steps."
        }
        ReviewMode::Critical => {
            "Act critically: highlight risks and information gaps, and check that the \
             constraints were met before presenting the final solution."
        }
    }
}

/// Append the closing instruction block, space-separated.
pub fn append_instructions(
    prompt: &mut String,
    focus: &[String],
    language: &str,
    review_mode: ReviewMode,
) {
    let lines = [
        focus_line(focus),
        language_line(language),
        review_line(review_mode).to_string(),
        ASK_WHEN_MISSING.to_string(),
        VALIDATION_CHECKLIST.to_string(),
    ];
    prompt.push_str(&lines.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_focus_uses_balance_line() {
        assert_eq!(focus_line(&[]), BALANCED_FOCUS);
    }

    #[test]
    fn focus_tags_are_comma_joined() {
        let focus = vec!["Clarity".to_string(), "Brevity".to_string()];
        assert_eq!(focus_line(&focus), "Prioritize: Clarity, Brevity.");
    }

    #[test]
    fn other_languages_get_explicit_instruction() {
        assert_eq!(language_line("English"), DEFAULT_LANGUAGE_LINE);
        assert_eq!(language_line("German"), "Produce the answer in German.");
    }

    #[test]
    fn review_templates_are_distinct() {
        let lines: Vec<_> = ReviewMode::ALL.iter().map(|m| review_line(*m)).collect();
        assert_ne!(lines[0], lines[1]);
        assert_ne!(lines[1], lines[2]);
        assert_ne!(lines[0], lines[2]);
    }

    #[test]
    fn block_is_single_line_in_fixed_order() {
        let mut out = String::new();
        append_instructions(&mut out, &[], "French", ReviewMode::Critical);
        assert!(!out.contains('\n'));
        let focus = out.find(BALANCED_FOCUS).unwrap();
        let lang = out.find("Produce the answer in French.").unwrap();
        let review = out.find("Act critically").unwrap();
        let ask = out.find(ASK_WHEN_MISSING).unwrap();
        let check = out.find(VALIDATION_CHECKLIST).unwrap();
        assert!(focus < lang && lang < review && review < ask && ask < check);
    }
}
