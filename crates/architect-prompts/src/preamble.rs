pub const PREAMBLE: &str = "You are a strategic assistant specialised in prompt engineering. \
     Use the information below to produce the best possible request for an advanced language model.";

/// Append the role-priming preamble to the prompt.
pub fn append_preamble(prompt: &mut String) {
    prompt.push_str(PREAMBLE);
}
