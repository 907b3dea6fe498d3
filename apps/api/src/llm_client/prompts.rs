/// System prompt for executor calls: answer the prompt, nothing more.
pub const EXECUTOR_SYSTEM: &str = "You are the model a prompt is being tested against. \
    Follow the user's prompt exactly as written and respond to the input that follows it. \
    Do NOT comment on the prompt itself.";

/// `<prompt>\n\nInput: <input>`
pub fn compose_prompt(prompt: &str, input: &str) -> String {
    format!("{prompt}\n\nInput: {input}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_prompt_appends_input() {
        assert_eq!(
            compose_prompt("Summarize this.", "text"),
            "Summarize this.\n\nInput: text"
        );
    }

    #[test]
    fn test_compose_prompt_keeps_empty_input_marker() {
        assert_eq!(compose_prompt("P", ""), "P\n\nInput: ");
    }
}
