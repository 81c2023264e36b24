//! Teacher assistant: lesson planner, quiz builder, doubt chatbot, resource hub
//! and the small export and panel utilities around them.
//!
//! Validation failures never change state; they are reported through the
//! host's notifier and the operation returns `None` / `false`.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, info, warn};
use shared::{DoubtLogEntry, LessonPlanRequest, Panel, QuizItem, QuizRequest};

use super::calendar::Clock;
use super::chat_service::DoubtLog;
use super::errors::DeskError;
use super::export_service::{to_csv, ExportService, PITCH_FILENAME, SAMPLE_REPORT_FILENAME};
use super::lesson_planner::generate_lesson_plan;
use super::quiz_service::{generate_quiz, grade_sample_answers, render_quiz, QuizGrade};
use super::record_table::escape_html;
use super::resource_service::ResourceHub;
use crate::backend::io::{Clipboard, Downloader, Notifier, Printer, Renderer};

pub const SUGGEST_PROMPT: &str = "Enter topic to suggest resources for";
pub const SUGGEST_DEFAULT_TOPIC: &str = "Photosynthesis";
pub const NO_SUGGESTIONS_MESSAGE: &str = "No exact matches — try adding resources tagged with topic keywords.";
pub const COPIED_MESSAGE: &str = "Copied to clipboard";

pub const SAMPLE_REPORT_ROWS: [[&str; 4]; 4] = [
    ["student", "topic", "score", "lastActive"],
    ["Aman", "Photosynthesis", "62", "2025-09-20"],
    ["Priya", "Photosynthesis", "45", "2025-09-18"],
    ["Rahul", "Fractions", "78", "2025-09-25"],
];

pub const PITCH_TEXT: &str = "AI-Based Teacher Support — Pitch\n\n\
Problem: Teachers spend hours planning and grading.\n\
Solution: AI assistant for lesson planning, quizzes, analytics, and doubt assistance.\n\
MVP: Live lesson planner, quiz builder, demo dashboard.\n\
Contact: YourTeam@example.com";

/// Printable document for a panel's text
pub fn print_document(text: &str) -> String {
    format!(
        "<pre style=\"font-family:Inter,Arial;white-space:pre-wrap\">{}</pre>",
        escape_html(text)
    )
}

fn notify<H: Notifier + ?Sized>(host: &mut H, error: DeskError) {
    warn!("Rejected request: {}", error);
    host.alert(&error.to_string());
}

pub struct AssistantService {
    doubt_log: DoubtLog,
    resources: ResourceHub,
    last_quiz: Vec<QuizItem>,
    /// Plain text currently shown in each panel
    panel_texts: HashMap<Panel, String>,
    export_service: ExportService,
    clock: Arc<dyn Clock>,
    default_lesson_duration: i64,
    default_quiz_count: i64,
}

impl AssistantService {
    pub fn new(clock: Arc<dyn Clock>, default_lesson_duration: i64, default_quiz_count: i64) -> Self {
        Self {
            doubt_log: DoubtLog::new(),
            resources: ResourceHub::new(),
            last_quiz: Vec::new(),
            panel_texts: HashMap::new(),
            export_service: ExportService::new(),
            clock,
            default_lesson_duration,
            default_quiz_count,
        }
    }

    pub fn doubt_log(&self) -> &DoubtLog {
        &self.doubt_log
    }

    pub fn resources(&self) -> &ResourceHub {
        &self.resources
    }

    pub fn last_quiz(&self) -> &[QuizItem] {
        &self.last_quiz
    }

    /// Text last shown in a panel ("" when nothing was shown yet)
    pub fn panel_text(&self, panel: Panel) -> &str {
        self.panel_texts.get(&panel).map(String::as_str).unwrap_or("")
    }

    /// Render the initial (empty) resource list
    pub fn initialize<H: Renderer + ?Sized>(&mut self, host: &mut H) {
        self.render_resources(host);
    }

    pub fn generate_lesson<H: Renderer + ?Sized>(&mut self, request: &LessonPlanRequest, host: &mut H) -> String {
        let plan = generate_lesson_plan(request, self.default_lesson_duration);
        info!("Generated lesson plan for '{}'", request.topic.trim());
        self.show_text(Panel::LessonOutput, plan.clone(), host);
        plan
    }

    pub fn generate_quiz<H: Renderer + ?Sized>(&mut self, request: &QuizRequest, host: &mut H) -> &[QuizItem] {
        self.last_quiz = generate_quiz(request, self.default_quiz_count);
        info!("Generated quiz with {} questions", self.last_quiz.len());
        self.show_text(Panel::QuizOutput, render_quiz(&self.last_quiz), host);
        &self.last_quiz
    }

    /// Grade the last quiz as if every answer was A and append the feedback
    pub fn grade_sample_answers<H: Renderer + Notifier + ?Sized>(&mut self, host: &mut H) -> Option<QuizGrade> {
        let grade = match grade_sample_answers(&self.last_quiz) {
            Ok(grade) => grade,
            Err(e) => {
                notify(host, e);
                return None;
            }
        };
        let text = format!("{}\n{}", self.panel_text(Panel::QuizOutput), grade.feedback());
        self.show_text(Panel::QuizOutput, text, host);
        Some(grade)
    }

    pub fn chat_ask<H: Renderer + Notifier + ?Sized>(&mut self, question: &str, host: &mut H) -> Option<DoubtLogEntry> {
        let timestamp = self.clock.timestamp();
        let entry = match self.doubt_log.ask(question, timestamp) {
            Ok(entry) => entry.clone(),
            Err(e) => {
                notify(host, e);
                return None;
            }
        };
        debug!("Doubt log now holds {} entries", self.doubt_log.len());
        host.render_html(Panel::ChatOutput, &self.doubt_log.render_html());
        self.panel_texts.insert(Panel::ChatOutput, self.doubt_log.render_text());
        Some(entry)
    }

    /// Replace the chat panel with the teacher summary
    pub fn summarize_doubts<H: Renderer + Notifier + ?Sized>(&mut self, host: &mut H) -> Option<String> {
        match self.doubt_log.summarize() {
            Ok(summary) => {
                self.show_text(Panel::ChatOutput, summary.clone(), host);
                Some(summary)
            }
            Err(e) => {
                notify(host, e);
                None
            }
        }
    }

    pub fn add_resource<H: Renderer + Notifier + ?Sized>(&mut self, title: &str, tags: &str, host: &mut H) -> bool {
        let added = self.clock.timestamp();
        if let Err(e) = self.resources.add(title, tags, added) {
            notify(host, e);
            return false;
        }
        info!("Added resource '{}'", title.trim());
        self.render_resources(host);
        true
    }

    /// Ask for a topic and list the resources tagged with its keywords.
    /// Returns the matching titles; a cancelled or empty prompt does nothing.
    pub fn suggest_resources<H: Notifier + ?Sized>(&self, host: &mut H) -> Vec<String> {
        let topic = host.prompt(SUGGEST_PROMPT, SUGGEST_DEFAULT_TOPIC).unwrap_or_default();
        if topic.is_empty() {
            return Vec::new();
        }
        let titles: Vec<String> = self
            .resources
            .suggest(&topic)
            .into_iter()
            .map(|resource| resource.title.clone())
            .collect();
        if titles.is_empty() {
            host.alert(NO_SUGGESTIONS_MESSAGE);
        } else {
            host.alert(&format!("Suggested resources:\n{}", titles.join("\n")));
        }
        titles
    }

    pub fn download_sample_csv<H: Downloader + Notifier + ?Sized>(&self, host: &mut H) -> Result<bool> {
        let file = self.export_service.csv_file(to_csv(SAMPLE_REPORT_ROWS), SAMPLE_REPORT_FILENAME);
        self.export_service.trigger_download(&file, host)
    }

    pub fn download_pitch<H: Downloader + Notifier + ?Sized>(&self, host: &mut H) -> Result<bool> {
        let file = self.export_service.text_file(PITCH_TEXT.to_string(), PITCH_FILENAME);
        self.export_service.trigger_download(&file, host)
    }

    /// Copy a panel's text, then confirm with a notification
    pub fn copy_panel<H: Clipboard + Notifier + ?Sized>(&self, panel: Panel, host: &mut H) -> Result<()> {
        host.write_text(self.panel_text(panel))?;
        host.alert(COPIED_MESSAGE);
        Ok(())
    }

    pub fn print_panel<H: Printer + ?Sized>(&self, panel: Panel, host: &mut H) -> Result<()> {
        debug!("Printing {:?}", panel);
        host.print_document(&print_document(self.panel_text(panel)))
    }

    fn render_resources<H: Renderer + ?Sized>(&mut self, host: &mut H) {
        host.render_html(Panel::ResourceList, &self.resources.render_html());
        let text = self
            .resources
            .resources()
            .iter()
            .enumerate()
            .map(|(index, r)| format!("{}. {}\nTags: {} • {}", index + 1, r.title, r.tags.join(", "), r.added))
            .collect::<Vec<_>>()
            .join("\n");
        self.panel_texts.insert(Panel::ResourceList, text);
    }

    fn show_text<H: Renderer + ?Sized>(&mut self, panel: Panel, text: String, host: &mut H) {
        host.render_text(panel, &text);
        self.panel_texts.insert(panel, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::calendar::FixedClock;
    use crate::backend::io::HeadlessHost;
    use chrono::NaiveDate;
    use shared::Difficulty;

    fn service() -> AssistantService {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
        AssistantService::new(Arc::new(clock), 45, 5)
    }

    fn quiz_request(topic: &str) -> QuizRequest {
        QuizRequest {
            topic: topic.to_string(),
            count: "5".to_string(),
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn test_generate_lesson_renders_panel() {
        let mut service = service();
        let mut host = HeadlessHost::new();
        let request = LessonPlanRequest {
            topic: "Photosynthesis".to_string(),
            ..Default::default()
        };

        let plan = service.generate_lesson(&request, &mut host);

        assert!(plan.starts_with("Lesson Plan — Photosynthesis"));
        assert_eq!(host.renderer.panel(Panel::LessonOutput), Some(plan.as_str()));
    }

    #[test]
    fn test_grading_appends_feedback_to_quiz() {
        let mut service = service();
        let mut host = HeadlessHost::new();

        assert_eq!(service.grade_sample_answers(&mut host), None);
        assert_eq!(host.notifier.last_alert(), Some("Generate a quiz first"));

        let quiz_len = service.generate_quiz(&quiz_request("stomata and photosynthesis"), &mut host).len();
        assert_eq!(quiz_len, 5);

        let grade = service.grade_sample_answers(&mut host).unwrap();
        assert_eq!(grade.score, 100);
        let panel = host.renderer.panel(Panel::QuizOutput).unwrap();
        assert!(panel.starts_with("1. Which statement best describes photosynthesis?"));
        assert!(panel.ends_with("\n\n\nSample Student Score: 100%\nCorrect: 5 / 5\nTeacher tip: Review questions where students chose B/C."));
    }

    #[test]
    fn test_chat_logs_with_timestamp() {
        let mut service = service();
        let mut host = HeadlessHost::new();

        assert!(service.chat_ask("  ", &mut host).is_none());
        assert_eq!(host.notifier.last_alert(), Some("Type a question"));
        assert!(service.doubt_log().is_empty());

        let entry = service.chat_ask("What are stomata?", &mut host).unwrap();
        assert_eq!(entry.timestamp, "9/20/2025, 9:30:00 AM");
        assert!(host.renderer.panel(Panel::ChatOutput).unwrap().contains("<strong>Q:</strong> What are stomata?"));
    }

    #[test]
    fn test_summary_replaces_chat_panel() {
        let mut service = service();
        let mut host = HeadlessHost::new();

        assert!(service.summarize_doubts(&mut host).is_none());
        assert_eq!(host.notifier.last_alert(), Some("No doubts yet"));

        service.chat_ask("Explain photosynthesis", &mut host);
        let summary = service.summarize_doubts(&mut host).unwrap();
        assert!(summary.contains("- Total doubts: 1"));
        assert_eq!(host.renderer.panel(Panel::ChatOutput), Some(summary.as_str()));
    }

    #[test]
    fn test_resources_and_suggestions() {
        let mut service = service();
        let mut host = HeadlessHost::new();
        service.initialize(&mut host);
        assert_eq!(
            host.renderer.panel(Panel::ResourceList),
            Some("<div class=\"muted\">No resources added yet.</div>")
        );

        assert!(!service.add_resource("", "biology", &mut host));
        assert_eq!(host.notifier.last_alert(), Some("Add a title"));

        assert!(service.add_resource("Leaf diagram", "Photosynthesis, Biology", &mut host));
        assert_eq!(service.resources().resources()[0].tags, vec!["photosynthesis", "biology"]);

        assert_eq!(service.suggest_resources(&mut host), vec!["Leaf diagram"]);
        assert_eq!(host.notifier.last_alert(), Some("Suggested resources:\nLeaf diagram"));

        host.notifier.push_prompt_answer(Some("Fractions"));
        assert!(service.suggest_resources(&mut host).is_empty());
        assert_eq!(host.notifier.last_alert(), Some(NO_SUGGESTIONS_MESSAGE));

        let alerts_before = host.notifier.alerts().len();
        host.notifier.push_prompt_answer(None);
        assert!(service.suggest_resources(&mut host).is_empty());
        assert_eq!(host.notifier.alerts().len(), alerts_before);
    }

    #[test]
    fn test_sample_csv_and_pitch_downloads() {
        let service = service();
        let mut host = HeadlessHost::new();

        assert!(service.download_sample_csv(&mut host).unwrap());
        assert!(service.download_pitch(&mut host).unwrap());

        let files = host.downloader.files();
        assert_eq!(files[0].filename, "sample_report.csv");
        assert_eq!(
            files[0].text(),
            "student,topic,score,lastActive\nAman,Photosynthesis,62,2025-09-20\nPriya,Photosynthesis,45,2025-09-18\nRahul,Fractions,78,2025-09-25"
        );
        assert_eq!(files[1].filename, "pitch.txt");
        assert_eq!(files[1].mime_type, "text/plain");
        assert!(files[1].text().ends_with("Contact: YourTeam@example.com"));
    }

    #[test]
    fn test_copy_and_print_panel() {
        let mut service = service();
        let mut host = HeadlessHost::new();
        service.generate_quiz(&quiz_request("<>"), &mut host);

        service.copy_panel(Panel::QuizOutput, &mut host).unwrap();
        assert_eq!(host.clipboard.contents(), Some(service.panel_text(Panel::QuizOutput)));
        assert_eq!(host.notifier.last_alert(), Some(COPIED_MESSAGE));

        service.print_panel(Panel::QuizOutput, &mut host).unwrap();
        let document = &host.printer.documents()[0];
        assert!(document.starts_with("<pre style=\"font-family:Inter,Arial;white-space:pre-wrap\">1. "));
        assert!(document.contains("1. Which statement best describes &lt;&gt;?"));
    }
}
