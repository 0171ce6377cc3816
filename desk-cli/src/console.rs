//! Interactive console loop.

use std::path::PathBuf;

use desk_agent::{ChatSession, ChatTurn};
use desk_faq::{DEFAULT_PREVIEW_LIMIT, FaqRecord};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::warn;

use crate::app::DeskApp;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Query(String),
    Rebuild,
    Upload(PathBuf),
    Faqs,
    History,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ConsoleInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix('/') else {
            return Self::Query(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "rebuild" => Self::Rebuild,
            "upload" if !arg.is_empty() => Self::Upload(PathBuf::from(arg)),
            "faqs" => Self::Faqs,
            "history" => Self::History,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

const HELP: &str = "\
Type a question and press Enter.
  /rebuild        rebuild the semantic index from the FAQ corpus
  /upload <file>  replace the FAQ corpus with a text file
  /faqs           show the FAQ preview
  /history        show this session's questions and answers
  /help           show this help
  /quit           leave (Ctrl+D also works)";

/// Render turns newest-first.
pub fn format_history<'a>(turns: impl Iterator<Item = &'a ChatTurn>) -> String {
    let mut out = String::new();
    for turn in turns {
        out.push_str(&format!(
            "[{}] You: {}\nAssistant:\n{}\n\n",
            turn.asked_at.format("%H:%M:%S"),
            turn.query,
            turn.answer
        ));
    }
    out
}

/// Render the FAQ preview listing.
pub fn format_preview(records: &[FaqRecord]) -> String {
    if records.is_empty() {
        return "No FAQs loaded.".to_string();
    }
    records
        .iter()
        .map(|r| format!("* {}\n  {}", r.question, r.answer.replace('\n', "\n  ")))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Run the interactive loop until `/quit` or end of input.
pub async fn run_console(mut app: DeskApp) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = ChatSession::new();

    println!("Support desk assistant ({} FAQs loaded)", app.corpus().len());
    if !app.semantic_enabled() {
        println!("Semantic search is off: no embedding credentials configured.");
    }
    println!("Type /help for commands.\n");

    loop {
        let line = match editor.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        match ConsoleInput::parse(&line) {
            ConsoleInput::Empty => {}
            ConsoleInput::Quit => break,
            ConsoleInput::Help => println!("{HELP}\n"),
            ConsoleInput::Unknown(command) => println!("Unknown command: {command}. Type /help.\n"),
            ConsoleInput::Faqs => {
                println!(
                    "Frequently Asked Questions\n\n{}\n",
                    format_preview(app.preview(DEFAULT_PREVIEW_LIMIT))
                );
            }
            ConsoleInput::History => print!("{}", format_history(session.all())),
            ConsoleInput::Rebuild => {
                if app.rebuild().await {
                    println!("Semantic index rebuilt.\n");
                } else {
                    println!(
                        "Semantic index was not rebuilt; semantic search may be unavailable.\n"
                    );
                }
            }
            ConsoleInput::Upload(path) => match app.upload(&path) {
                Ok(count) => {
                    println!(
                        "Uploaded {count} FAQ records. \
                         Run /rebuild to refresh the semantic index.\n"
                    );
                }
                Err(e) => {
                    warn!(error = %e, "upload failed");
                    println!("Upload failed: {e:#}\n");
                }
            },
            ConsoleInput::Query(query) => {
                let resolution = app.ask(&query).await;
                session.append(query, resolution.answer);
                print!("{}", format_history(session.all()));
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_queries() {
        assert_eq!(
            ConsoleInput::parse("  what are your hours? "),
            ConsoleInput::Query("what are your hours?".into())
        );
        assert_eq!(ConsoleInput::parse("/rebuild"), ConsoleInput::Rebuild);
        assert_eq!(
            ConsoleInput::parse("/upload  data/new faqs.txt"),
            ConsoleInput::Upload("data/new faqs.txt".into())
        );
        assert_eq!(ConsoleInput::parse("/upload"), ConsoleInput::Unknown("/upload".into()));
        assert_eq!(ConsoleInput::parse("/exit"), ConsoleInput::Quit);
        assert_eq!(ConsoleInput::parse("   "), ConsoleInput::Empty);
        assert_eq!(ConsoleInput::parse("/dance"), ConsoleInput::Unknown("/dance".into()));
    }

    #[test]
    fn history_is_rendered_newest_first() {
        let mut session = ChatSession::new();
        session.append("first?", "one");
        session.append("second?", "two");

        let text = format_history(session.all());
        let second = text.find("You: second?").unwrap();
        let first = text.find("You: first?").unwrap();
        assert!(second < first);
    }

    #[test]
    fn preview_lists_question_and_answer() {
        let records = vec![FaqRecord {
            question: "Office hours?".into(),
            keywords: vec![],
            answer: "9am-5pm.\nMon-Fri.".into(),
        }];
        assert_eq!(format_preview(&records), "* Office hours?\n  9am-5pm.\n  Mon-Fri.");
        assert_eq!(format_preview(&[]), "No FAQs loaded.");
    }
}
