// Prompt constants for the humanization pipeline.

/// Rewrite prompt template. Replace `{human_seed_text}` and `{paragraph}`
/// before sending.
pub const HUMANIZE_PROMPT_TEMPLATE: &str = r#"
Reword the following paragraph to sound natural and conversational, as if a regular person were explaining it casually.

Key Instructions:
1. Use contractions and light filler words like "you know," "well," "I guess," or "pretty much."
2. Add occasional pauses, rhetorical questions, or informal phrasing.
3. Slightly vary sentence length and structure for a relaxed feel.
4. Make it sound like it was written quickly and casually, not like it was carefully polished.
5. Avoid perfect grammar—it's fine to have minor imperfections or tone shifts.

{human_seed_text}

Original Paragraph:
{paragraph}

Rewritten Paragraph:
"#;

/// Builds the rewrite prompt for one paragraph chunk. A non-empty
/// `human_seed` is embedded as a style example for the model to imitate.
pub fn build_prompt(paragraph: &str, human_seed: &str) -> String {
    let human_seed_text = if human_seed.is_empty() {
        String::new()
    } else {
        format!("Here's how I'd put it: {human_seed}")
    };

    HUMANIZE_PROMPT_TEMPLATE
        .replace("{human_seed_text}", &human_seed_text)
        .replace("{paragraph}", paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_paragraph() {
        let prompt = build_prompt("The mitochondria is the powerhouse of the cell.", "");
        assert!(prompt.contains("The mitochondria is the powerhouse of the cell."));
        assert!(prompt.contains("Original Paragraph:"));
        assert!(prompt.contains("Rewritten Paragraph:"));
    }

    #[test]
    fn test_prompt_embeds_seed_when_present() {
        let prompt = build_prompt("Some text.", "yeah so basically");
        assert!(prompt.contains("Here's how I'd put it: yeah so basically"));
    }

    #[test]
    fn test_prompt_omits_seed_line_when_empty() {
        let prompt = build_prompt("Some text.", "");
        assert!(!prompt.contains("Here's how I'd put it:"));
    }

    #[test]
    fn test_prompt_has_no_unreplaced_placeholders() {
        let prompt = build_prompt("Some text.", "a seed");
        assert!(!prompt.contains("{paragraph}"));
        assert!(!prompt.contains("{human_seed_text}"));
    }
}
