//! Rule-based quiz builder and sample grading.

use shared::{Difficulty, QuizItem, QuizRequest};

use super::errors::DeskError;
use super::keywords::extract_keywords;
use super::values::{int_or, round_half_up};

pub const DEFAULT_QUIZ_COUNT: i64 = 5;
pub const DEFAULT_QUIZ_TOPIC: &str = "General Topic";

pub fn make_question(base: &str, difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Easy => format!("What is the main idea related to {}?", base),
        Difficulty::Hard => format!("Explain in detail the process involving {} and its role.", base),
        Difficulty::Medium => format!("Which statement best describes {}?", base),
    }
}

/// The four options; the first one is always correct
pub fn make_options(base: &str) -> [String; 4] {
    [
        format!("Correct explanation about {}", base),
        format!("Partially correct statement about {}", base),
        "Irrelevant statement".to_string(),
        "Incorrect opposite statement".to_string(),
    ]
}

/// Build `count` questions. Question `i` (1-based) is about keyword
/// `i % keywords.len()`, or about the first word of the topic when the topic
/// has no keywords.
pub fn generate_quiz(request: &QuizRequest, default_count: i64) -> Vec<QuizItem> {
    let topic = match request.topic.trim() {
        "" => DEFAULT_QUIZ_TOPIC,
        topic => topic,
    };
    let count = int_or(&request.count, default_count);
    let keywords = extract_keywords(topic);
    let fallback = topic.split(' ').next().unwrap_or("");

    (1..=count.max(0))
        .map(|i| {
            let base = if keywords.is_empty() {
                fallback
            } else {
                keywords[i as usize % keywords.len()].as_str()
            };
            QuizItem {
                id: i as u32,
                question: make_question(base, request.difficulty),
                options: make_options(base),
                correct_option_index: 0,
            }
        })
        .collect()
}

/// Quiz text with options lettered A-D
pub fn render_quiz(quiz: &[QuizItem]) -> String {
    let mut out = String::new();
    for item in quiz {
        out.push_str(&format!("{}. {}\n", item.id, item.question));
        for (index, option) in item.options.iter().enumerate() {
            let letter = char::from(b'A' + index as u8);
            out.push_str(&format!("   {}. {}\n", letter, option));
        }
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizGrade {
    pub correct: usize,
    pub total: usize,
    /// Percentage, rounded half up
    pub score: u32,
}

impl QuizGrade {
    pub fn feedback(&self) -> String {
        format!(
            "Sample Student Score: {}%\nCorrect: {} / {}\nTeacher tip: Review questions where students chose B/C.",
            self.score, self.correct, self.total
        )
    }
}

/// Grade chosen option indexes against the quiz; unanswered questions are wrong
pub fn grade_answers(quiz: &[QuizItem], answers: &[usize]) -> QuizGrade {
    let correct = quiz
        .iter()
        .zip(answers)
        .filter(|(item, answer)| item.correct_option_index == **answer)
        .count();
    let total = quiz.len();
    let score = if total == 0 {
        0
    } else {
        round_half_up(correct as f64 / total as f64 * 100.0) as u32
    };
    QuizGrade { correct, total, score }
}

/// Demo grading that assumes the student answered A everywhere
pub fn grade_sample_answers(quiz: &[QuizItem]) -> Result<QuizGrade, DeskError> {
    if quiz.is_empty() {
        return Err(DeskError::NoQuizGenerated);
    }
    Ok(grade_answers(quiz, &vec![0; quiz.len()]))
}
