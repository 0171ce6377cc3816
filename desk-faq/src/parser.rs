use crate::model::FaqRecord;

const QUESTION_PREFIX: &str = "Q:";
const KEYWORDS_PREFIX: &str = "K:";
const ANSWER_PREFIX: &str = "A:";

/// Parse a flat-text FAQ corpus into records, in file order.
///
/// Blocks are separated by blank (or whitespace-only) lines. The first line of
/// a block is the question, with an optional `Q:` prefix. A `K:` line holds
/// comma-separated keywords; when several appear the last one wins. An `A:`
/// line starts the answer body and every other line is appended to it as-is.
pub fn parse_faq_text(text: &str) -> Vec<FaqRecord> {
    let normalized = text.replace("\r\n", "\n");
    split_blocks(&normalized).into_iter().filter_map(|block| parse_block(&block)).collect()
}

fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_block(lines: &[&str]) -> Option<FaqRecord> {
    let (first, rest) = lines.split_first()?;
    let first = first.trim();
    let question = first.strip_prefix(QUESTION_PREFIX).unwrap_or(first).trim().to_string();
    if question.is_empty() {
        return None;
    }

    let mut keywords = Vec::new();
    let mut answer_lines = Vec::new();
    for line in rest {
        let trimmed = line.trim_start();
        if let Some(list) = trimmed.strip_prefix(KEYWORDS_PREFIX) {
            keywords = parse_keywords(list);
        } else if let Some(body) = trimmed.strip_prefix(ANSWER_PREFIX) {
            answer_lines.push(body.trim());
        } else {
            answer_lines.push(line);
        }
    }

    let answer = answer_lines.join("\n").trim().to_string();
    Some(FaqRecord { question, keywords, answer })
}

fn parse_keywords(list: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in list.split(',').map(|k| k.trim().to_lowercase()) {
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_block() {
        let text = "Q: How do I reset my password?\nK: password, Reset , login\n\
                    A: Go to Settings > Security > Reset Password.";
        let records = parse_faq_text(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "How do I reset my password?");
        assert_eq!(records[0].keywords, vec!["password", "reset", "login"]);
        assert_eq!(records[0].answer, "Go to Settings > Security > Reset Password.");
    }

    #[test]
    fn question_prefix_is_optional() {
        let records = parse_faq_text("Where is the office?\nK: office\nA: Bangalore.");
        assert_eq!(records[0].question, "Where is the office?");
    }

    #[test]
    fn block_without_keyword_line_has_no_keywords() {
        let records = parse_faq_text("Q: Refund policy?\nA: Within 7 days.");
        assert!(records[0].keywords.is_empty());
        assert!(!records[0].is_matchable());
        assert_eq!(records[0].answer, "Within 7 days.");
    }

    #[test]
    fn joins_multi_line_answers() {
        let text = "Q: Steps?\nK: steps\nA: First, log in.\n  Then open Settings.\nFinally save.";
        let records = parse_faq_text(text);
        assert_eq!(records[0].answer, "First, log in.\n  Then open Settings.\nFinally save.");
    }

    #[test]
    fn splits_on_whitespace_only_lines_and_crlf() {
        let text = "Q: One?\r\nK: one\r\nA: 1\r\n   \r\nQ: Two?\r\nK: two\r\nA: 2\r\n";
        let records = parse_faq_text(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].question, "Two?");
        assert_eq!(records[1].answer, "2");
    }

    #[test]
    fn last_keyword_line_wins_and_empties_are_dropped() {
        let records = parse_faq_text("Q: Fees?\nK: old\nK: fee, , FEE, payment\nA: 500 INR.");
        assert_eq!(records[0].keywords, vec!["fee", "payment"]);
    }

    #[test]
    fn answer_without_prefix_is_kept() {
        let records = parse_faq_text("Q: Hours?\nK: hours\n9am to 5pm");
        assert_eq!(records[0].answer, "9am to 5pm");
    }

    #[test]
    fn empty_text_yields_no_records() {
        assert!(parse_faq_text("").is_empty());
        assert!(parse_faq_text("\n\n   \n").is_empty());
    }

    #[test]
    fn bare_question_prefix_block_is_skipped() {
        let records = parse_faq_text("Q:\nK: x\nA: y\n\nQ: Real?\nA: yes");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Real?");
    }
}
