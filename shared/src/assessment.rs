//! Health assessment questionnaire
//!
//! Holds the twelve fixed questions and the answer buffer behind the form.
//! A request can only be built once every answer is non-blank.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const QUESTION_COUNT: usize = 12;

pub const QUESTIONS: [&str; QUESTION_COUNT] = [
    "How would you rate your overall energy levels?",
    "How many days per week do you currently exercise?",
    "What is your primary fitness goal?",
    "Do you have any chronic health conditions?",
    "How many hours of sleep do you usually get?",
    "How often do you feel stressed?",
    "Describe your typical daily activity level (sedentary/active etc.)",
    "Do you have any injuries or pain that affect exercise?",
    "How would you rate your current diet quality?",
    "Do you smoke or consume alcohol regularly?",
    "What is your preferred workout style (gym/home/outdoor/etc.)?",
    "In 3 months, what would success look like for you?",
];

/// Shown when the server accepts the assessment without a summary.
pub const DEFAULT_SUMMARY: &str = "Assessment submitted successfully.";

/// `POST /health-assessment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAssessmentRequest {
    pub user_id: Option<i64>,
    pub answers: Vec<String>,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthAssessmentResponse {
    #[serde(default)]
    pub summary: Option<String>,
}

impl HealthAssessmentResponse {
    /// Text for the summary box, or `None` when the server sent an empty
    /// summary and there is nothing to show. A missing summary falls back to
    /// the default acknowledgement.
    pub fn displayed_summary(&self) -> Option<&str> {
        match self.summary.as_deref() {
            None => Some(DEFAULT_SUMMARY),
            Some("") => None,
            Some(text) => Some(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} of {} questions are unanswered", .missing.len(), QUESTION_COUNT)]
pub struct IncompleteAssessment {
    /// Zero-based indices of the blank answers.
    pub missing: Vec<usize>,
}

/// Answer buffer, one slot per question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentAnswers {
    answers: [String; QUESTION_COUNT],
}

impl AssessmentAnswers {
    pub fn new() -> Self {
        Self {
            answers: Default::default(),
        }
    }

    /// Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn get(&self, index: usize) -> &str {
        self.answers.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn missing(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.trim().is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| !a.trim().is_empty())
    }

    /// Builds the submission, or reports which answers are still blank.
    ///
    /// Answers are sent exactly as typed.
    pub fn to_request(&self) -> Result<HealthAssessmentRequest, IncompleteAssessment> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(IncompleteAssessment { missing });
        }

        Ok(HealthAssessmentRequest {
            user_id: None,
            answers: self.answers.to_vec(),
            metadata: serde_json::Map::new(),
        })
    }
}

impl Default for AssessmentAnswers {
    fn default() -> Self {
        Self::new()
    }
}
