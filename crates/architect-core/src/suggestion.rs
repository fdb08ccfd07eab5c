/// Merge a suggestion chip into the pending input text.
///
/// An empty input takes the suggestion as-is. Input that already contains the
/// suggestion is returned unchanged. Otherwise the suggestion is appended to the
/// trimmed input, separated by a space unless the input already ends in a comma.
pub fn append_suggestion(input: &str, suggestion: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return suggestion.to_string();
    }
    if input.contains(suggestion) {
        return input.to_string();
    }
    let sep = if trimmed.ends_with(',') { "" } else { " " };
    format!("{trimmed}{sep}{suggestion}")
}
