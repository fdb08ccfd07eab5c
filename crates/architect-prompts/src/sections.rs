use architect_core::{AnswerStore, CATALOG};

/// One labelled block per answered question, in catalog order.
pub fn collect_sections(answers: &AnswerStore) -> Vec<String> {
    CATALOG
        .iter()
        .filter_map(|q| {
            let answer = answers.get(q.id)?.trim();
            if answer.is_empty() {
                return None;
            }
            Some(format!("{}:\n{}", q.section_title, answer))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_catalog_order() {
        let answers: AnswerStore = [
            ("format", "A table"),
            ("objective", "Write a letter"),
            ("additional", "See the brochure"),
        ]
        .into_iter()
        .collect();
        let sections = collect_sections(&answers);
        assert_eq!(
            sections,
            vec![
                "Main Objective:\nWrite a letter",
                "Expected Response Format:\nA table",
                "Additional Information:\nSee the brochure",
            ]
        );
    }

    #[test]
    fn no_answers_no_sections() {
        assert!(collect_sections(&AnswerStore::new()).is_empty());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let answers: AnswerStore = [("favourite_colour", "blue")].into_iter().collect();
        assert!(collect_sections(&answers).is_empty());
    }
}
