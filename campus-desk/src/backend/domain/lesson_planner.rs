//! Template-based lesson plan generator.
//!
//! A plan always has the same five sections with fixed shares of the lesson
//! duration. Minutes per section are rounded independently, so the total can
//! drift a minute or two from the requested duration.

use shared::LessonPlanRequest;

use super::keywords::extract_keywords;
use super::values::{int_or, round_half_up};

pub const DEFAULT_DURATION_MINUTES: i64 = 45;
pub const DEFAULT_TOPIC: &str = "Untitled Topic";

/// Section titles with their percentage of the lesson; the shares sum to 100
pub const SECTIONS: [(&str, u32); 5] = [
    ("Hook & Objectives", 10),
    ("Direct Instruction", 35),
    ("Guided Practice", 25),
    ("Formative Assessment", 20),
    ("Recap & Homework", 10),
];

#[derive(Debug, Clone, PartialEq)]
pub struct LessonSection {
    pub title: &'static str,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonPlan {
    pub topic: String,
    pub grade: String,
    pub duration: i64,
    pub focus: String,
    pub keywords: Vec<String>,
    pub sections: Vec<LessonSection>,
}

/// Minutes allotted to a section: at least one, rounded half up
pub fn section_minutes(duration: i64, percent: u32) -> i64 {
    let share = duration as f64 * f64::from(percent) / 100.0;
    (round_half_up(share) as i64).max(1)
}

/// Build the plan structure from raw form values
pub fn build_lesson_plan(request: &LessonPlanRequest, default_duration: i64) -> LessonPlan {
    let topic = match request.topic.trim() {
        "" => DEFAULT_TOPIC.to_string(),
        topic => topic.to_string(),
    };
    let duration = int_or(&request.duration, default_duration);
    let keywords = extract_keywords(&format!("{} {}", topic, request.focus));
    let sections = SECTIONS
        .iter()
        .map(|&(title, percent)| LessonSection {
            title,
            minutes: section_minutes(duration, percent),
        })
        .collect();

    LessonPlan {
        topic,
        grade: request.grade.clone(),
        duration,
        focus: request.focus.clone(),
        keywords,
        sections,
    }
}

impl LessonPlan {
    fn activity_line(&self) -> String {
        if self.keywords.is_empty() {
            "Activity idea: Think-pair-share on the topic.".to_string()
        } else {
            let first_two: Vec<&str> = self.keywords.iter().take(2).map(String::as_str).collect();
            format!(
                "Activity idea: Group students to create a poster explaining {}.",
                first_two.join(" and ")
            )
        }
    }

    fn assessment_line(&self) -> String {
        match self.keywords.first() {
            Some(keyword) => format!("Quick quiz: 3 short questions on {}.", keyword),
            None => "Quick quiz: 3 short recall questions.".to_string(),
        }
    }

    fn section_detail(&self, title: &str) -> String {
        match title {
            "Hook & Objectives" => "Hook: Ask a relatable question or show a short image/video.".to_string(),
            "Direct Instruction" => "Teach: Explain the core concept using diagrams and examples.".to_string(),
            "Guided Practice" => self.activity_line(),
            "Formative Assessment" => self.assessment_line(),
            _ => "Homework: Short worksheet + reflection prompt.".to_string(),
        }
    }

    /// Sum of the allotted minutes (may differ from `duration`)
    pub fn allotted_minutes(&self) -> i64 {
        self.sections.iter().map(|section| section.minutes).sum()
    }

    /// Full plan text as shown in the lesson output panel
    pub fn render(&self) -> String {
        let objective = if self.focus.is_empty() {
            "demonstrate understanding of the topic."
        } else {
            self.focus.as_str()
        };

        let mut out = format!(
            "Lesson Plan — {}\nGrade / Level: {}\nDuration: {} minutes\n\nObjectives:\n",
            self.topic, self.grade, self.duration
        );
        out.push_str(&format!(
            "- By the end of this lesson, students will be able to {}\n\n",
            objective
        ));
        for (index, section) in self.sections.iter().enumerate() {
            out.push_str(&format!("{}. {} — ~{} min\n", index + 1, section.title, section.minutes));
            out.push_str(&format!("   - {}\n", self.section_detail(section.title)));
        }
        out.push_str(
            "\nMaterials & Resources:\n\
             - Slides / images / short video (search recommended)\n\
             - Worksheet (create from quiz builder)\n\n\
             Differentiation:\n\
             - Provide simplified notes for struggling learners, extension task for advanced learners.\n\n\
             Notes:\n\
             - Teacher review required for accuracy. This is an AI-assisted template to speed planning.",
        );
        out
    }
}

/// Generate the lesson plan text for raw form values
pub fn generate_lesson_plan(request: &LessonPlanRequest, default_duration: i64) -> String {
    build_lesson_plan(request, default_duration).render()
}
