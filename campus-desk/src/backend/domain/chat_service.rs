//! Canned-reply chatbot and the doubt log it keeps.
//!
//! Replies are picked by keyword match only. Every question asked is appended
//! to the log together with its reply and a timestamp; entries are never edited.

use shared::DoubtLogEntry;

use super::errors::DeskError;
use super::keywords::extract_keywords;
use super::record_table::escape_html;

const STOMATA_REPLY: &str =
    "Stomata are tiny pores on leaves that allow gas exchange. They help plants breathe and control water loss.";
const PHOTOSYNTHESIS_REPLY: &str =
    "Photosynthesis is the process where plants use sunlight to turn carbon dioxide and water into glucose and oxygen.";

/// Pick a reply for a question
pub fn generate_chat_reply(question: &str) -> String {
    let keywords = extract_keywords(question);
    let has = |word: &str| keywords.iter().any(|keyword| keyword == word);

    if has("stomata") {
        STOMATA_REPLY.to_string()
    } else if has("photosynthesis") {
        PHOTOSYNTHESIS_REPLY.to_string()
    } else if has("what") || has("define") {
        format!("Short answer: {}", question)
    } else {
        format!(
            "Good question! Here is a concise explanation: {}\n\n(Teachers: consider adding a short example and a 1-minute activity.)",
            question
        )
    }
}

/// Append-only log of questions and replies
#[derive(Debug, Clone, Default)]
pub struct DoubtLog {
    entries: Vec<DoubtLogEntry>,
}

impl DoubtLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[DoubtLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer a question and log it. Blank questions are rejected.
    pub fn ask(&mut self, question: &str, timestamp: String) -> Result<&DoubtLogEntry, DeskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DeskError::EmptyQuestion);
        }
        self.entries.push(DoubtLogEntry {
            question: question.to_string(),
            answer: generate_chat_reply(question),
            timestamp,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Newest-first conversation markup
    pub fn render_html(&self) -> String {
        self.entries
            .iter()
            .rev()
            .map(|entry| {
                format!(
                    "<div style=\"margin-bottom:8px\"><strong>Q:</strong> {}<br/><strong>A:</strong> {}<div class=\"muted\">{}</div></div>",
                    escape_html(&entry.question),
                    escape_html(&entry.answer),
                    entry.timestamp
                )
            })
            .collect()
    }

    /// Newest-first conversation as plain text
    pub fn render_text(&self) -> String {
        self.entries
            .iter()
            .rev()
            .map(|entry| format!("Q: {}\nA: {}\n{}", entry.question, entry.answer, entry.timestamp))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Teacher summary: count, leading keywords over all questions and a recap hint
    pub fn summarize(&self) -> Result<String, DeskError> {
        if self.entries.is_empty() {
            return Err(DeskError::NoDoubts);
        }
        let all_questions = self
            .entries
            .iter()
            .map(|entry| entry.question.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = extract_keywords(&all_questions);
        let top: Vec<&str> = keywords.iter().take(5).map(String::as_str).collect();
        let recap_topic = keywords.first().map(String::as_str).unwrap_or("key topic");

        Ok(format!(
            "Teacher Summary:\n- Total doubts: {}\n- Top keywords: {}\n- Suggestion: Include a 10-min recap on {}.",
            self.entries.len(),
            top.join(", "),
            recap_topic
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_replies() {
        assert_eq!(generate_chat_reply("Why do leaves have stomata?"), STOMATA_REPLY);
        assert_eq!(generate_chat_reply("Explain photosynthesis"), PHOTOSYNTHESIS_REPLY);
        assert_eq!(generate_chat_reply("What is a fraction?"), "Short answer: What is a fraction?");
        assert_eq!(generate_chat_reply("define osmosis"), "Short answer: define osmosis");
        assert!(generate_chat_reply("How do magnets work").starts_with("Good question! Here is a concise explanation: How do magnets work\n\n"));
    }

    #[test]
    fn test_stomata_wins_over_what() {
        assert_eq!(generate_chat_reply("What are stomata"), STOMATA_REPLY);
    }

    #[test]
    fn test_ask_rejects_blank_question() {
        let mut log = DoubtLog::new();
        assert_eq!(log.ask("   ", "t".to_string()).unwrap_err(), DeskError::EmptyQuestion);
        assert!(log.is_empty());
    }

    #[test]
    fn test_render_is_newest_first_and_escaped() {
        let mut log = DoubtLog::new();
        log.ask("first <question>", "t1".to_string()).unwrap();
        log.ask("second", "t2".to_string()).unwrap();

        let html = log.render_html();
        let second = html.find("second").unwrap();
        let first = html.find("first &lt;question&gt;").unwrap();
        assert!(second < first);
        assert!(log.render_text().starts_with("Q: second\n"));
    }

    #[test]
    fn test_summary() {
        let mut log = DoubtLog::new();
        assert_eq!(log.summarize(), Err(DeskError::NoDoubts));

        log.ask("What are stomata?", "t1".to_string()).unwrap();
        log.ask("Define photosynthesis", "t2".to_string()).unwrap();

        assert_eq!(
            log.summarize().unwrap(),
            "Teacher Summary:\n- Total doubts: 2\n- Top keywords: what, stomata, define, photosynthesis\n- Suggestion: Include a 10-min recap on what."
        );
    }
}
