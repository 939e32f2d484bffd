use serde::{Deserialize, Serialize};

pub mod assessment;
pub mod chat;
pub mod nutrition;
pub mod protocol;

pub use assessment::{AssessmentAnswers, IncompleteAssessment, QUESTION_COUNT, QUESTIONS};
pub use chat::{ChatLog, ChatMessage, ChatRole, ChatSession};
pub use nutrition::{MacroField, MealSummary};

// =========================================================
// Constants
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// Auth Models
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Returned by both login and registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `GET /auth/me`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CurrentUserRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// =========================================================
// Dashboard Models
// =========================================================

/// `GET /dashboard-data`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DashboardDataRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestAssessment {
    #[serde(default)]
    pub summary: Option<String>,
}

/// Summary counters shown on the dashboard.
///
/// `Default` is the degraded value used when the fetch fails: every count
/// is zero and there is no latest assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub latest_assessment: Option<LatestAssessment>,
    #[serde(default)]
    pub total_workouts: u64,
    #[serde(default)]
    pub total_meals: u64,
    #[serde(default)]
    pub total_messages: u64,
}

impl DashboardData {
    pub fn latest_summary(&self) -> Option<&str> {
        self.latest_assessment
            .as_ref()
            .and_then(|a| a.summary.as_deref())
    }
}

/// Trims user input, returning `None` when nothing is left.
pub fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_data_tolerates_missing_fields() {
        let data: DashboardData = serde_json::from_str(r#"{"total_meals": 3}"#).unwrap();
        assert_eq!(data.total_meals, 3);
        assert_eq!(data.total_workouts, 0);
        assert_eq!(data.latest_summary(), None);
    }

    #[test]
    fn dashboard_data_reads_nested_summary() {
        let data: DashboardData = serde_json::from_str(
            r#"{
                "latest_assessment": {"id": 4, "user_id": 1, "summary": "Sleep more", "created_at": "2024-01-01T00:00:00"},
                "total_workouts": 2, "total_meals": 5, "total_messages": 9
            }"#,
        )
        .unwrap();
        assert_eq!(data.latest_summary(), Some("Sleep more"));
        assert_eq!(data.total_messages, 9);
    }

    #[test]
    fn degraded_dashboard_is_all_zero() {
        let data = DashboardData::default();
        assert_eq!(
            (data.total_workouts, data.total_meals, data.total_messages),
            (0, 0, 0)
        );
        assert!(data.latest_assessment.is_none());
    }

    #[test]
    fn non_blank_trims_and_rejects_whitespace() {
        assert_eq!(non_blank("  eggs \n"), Some("eggs".to_string()));
        assert_eq!(non_blank(" \t "), None);
        assert_eq!(non_blank(""), None);
    }
}
