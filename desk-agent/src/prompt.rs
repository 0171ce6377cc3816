//! Prompt and answer text.

use desk_faq::FaqRecord;

/// Separator placed between retrieved chunks in the grounded prompt.
pub const CONTEXT_SEPARATOR: &str = "\n---\n";

/// Render a keyword hit as the final answer.
pub fn keyword_answer(record: &FaqRecord) -> String {
    format!("### {}\n\n{}", record.question, record.answer)
}

/// Prompt grounded in retrieved corpus chunks.
pub fn grounded_prompt(chunks: &[String], query: &str, support_contact: &str) -> String {
    let context = chunks.join(CONTEXT_SEPARATOR);
    format!(
        "CONTEXT:\n{context}\n\nQUESTION: {query}\n\nIf unsure, escalate to {support_contact}."
    )
}

/// Prompt used when no corpus context was found.
pub fn plain_prompt(query: &str, support_contact: &str) -> String {
    format!(
        "User asked: {query}\nIf you don't know the answer, say:\n\
         'Please contact support at {support_contact}'"
    )
}

/// Final answer when no tier produced one.
pub fn escalation_message(support_contact: &str) -> String {
    format!("I'm not sure. Please contact support at {support_contact}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grounded_prompt_separates_chunks() {
        let chunks = vec!["Q: A\nA: one".to_string(), "Q: B\nA: two".to_string()];
        let prompt = grounded_prompt(&chunks, "what?", "help@example.com");
        assert!(prompt.starts_with("CONTEXT:\nQ: A\nA: one\n---\nQ: B\nA: two"));
        assert!(prompt.contains("QUESTION: what?"));
        assert!(prompt.ends_with("If unsure, escalate to help@example.com."));
    }

    #[test]
    fn plain_prompt_has_no_context() {
        let prompt = plain_prompt("refund?", "help@example.com");
        assert!(prompt.contains("User asked: refund?"));
        assert!(prompt.contains("'Please contact support at help@example.com'"));
        assert!(!prompt.contains("CONTEXT"));
    }

    #[test]
    fn keyword_answer_uses_heading() {
        let record = FaqRecord {
            question: "Office hours?".into(),
            keywords: vec!["hours".into()],
            answer: "9am-5pm.".into(),
        };
        assert_eq!(keyword_answer(&record), "### Office hours?\n\n9am-5pm.");
    }
}
