use crate::models::question::HistoryEntry;
use serde::Serialize;

const SYSTEM_PREAMBLE: &str = "You are facilitating exciting questions for a discussion.";
const USER_PREAMBLE: &str = "Generate a new question";
const HISTORY_HEADER: &str = "\n\nPrevious questions in this session and their feedback:";
const HISTORY_FOOTER: &str = "\n\nConsider this conversation history when generating the next question. Build on previous topics or pivot based on the feedback received.";
const OUTPUT_RULE: &str = " Output only the question, no other text.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionContext<'a> {
    pub theme: Option<&'a str>,
    pub custom_instructions: Option<&'a str>,
}

pub fn build_prompts(
    context: SessionContext<'_>,
    examples: &[&str],
    history: &[HistoryEntry],
) -> PromptPair {
    PromptPair {
        system: build_system_prompt(context),
        user: build_user_prompt(examples, history),
    }
}

pub fn build_system_prompt(context: SessionContext<'_>) -> String {
    let mut prompt = String::from(SYSTEM_PREAMBLE);

    if let Some(theme) = present(context.theme) {
        prompt.push_str(&format!(" The conversation theme is: {}.", theme));
    }
    if let Some(instructions) = present(context.custom_instructions) {
        prompt.push_str(&format!(" Additional instructions: {}.", instructions));
    }

    prompt
}

pub fn build_user_prompt(examples: &[&str], history: &[HistoryEntry]) -> String {
    let mut prompt = String::from(USER_PREAMBLE);

    if !examples.is_empty() {
        prompt.push_str(" that is similar to these well-rated examples: ");
        prompt.push_str(&examples.join("\n"));
    }

    if !history.is_empty() {
        prompt.push_str(HISTORY_HEADER);
        for (index, entry) in history.iter().enumerate() {
            prompt.push_str(&format_history_entry(index + 1, entry));
        }
        prompt.push_str(HISTORY_FOOTER);
    }

    prompt.push_str(OUTPUT_RULE);
    prompt
}

fn format_history_entry(position: usize, entry: &HistoryEntry) -> String {
    let mut line = format!("\n{}. \"{}\"", position, entry.question);

    // A zero rating carries no sentiment and is left unannotated.
    if let Some(rating) = entry.rating.filter(|r| *r != 0) {
        let sentiment = if rating > 0 { "positive" } else { "negative" };
        line.push_str(&format!(" (Rating: {})", sentiment));
    }
    if let Some(text) = present(entry.feedback_text.as_deref()) {
        line.push_str(&format!(" - Feedback: \"{}\"", text));
    }

    line
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
