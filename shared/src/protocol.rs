use crate::assessment::{HealthAssessmentRequest, HealthAssessmentResponse};
use crate::chat::{ChatRequest, ChatResponse};
use crate::nutrition::{MealAnalysisRequest, MealSummary};
use crate::{
    CurrentUserRequest, DashboardData, DashboardDataRequest, LoginRequest, RegisterRequest,
    TokenResponse, UserProfile,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// Whether the request value is sent as a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the configured base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for RegisterRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for CurrentUserRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/auth/me";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// =========================================================
// Dashboard & Panels
// =========================================================

impl ApiRequest for DashboardDataRequest {
    type Response = DashboardData;
    const PATH: &'static str = "/dashboard-data";
    const METHOD: HttpMethod = HttpMethod::Get;
}

impl ApiRequest for ChatRequest {
    type Response = ChatResponse;
    const PATH: &'static str = "/chat";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for HealthAssessmentRequest {
    type Response = HealthAssessmentResponse;
    const PATH: &'static str = "/health-assessment";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for MealAnalysisRequest {
    type Response = MealSummary;
    const PATH: &'static str = "/meal-analysis";
    const METHOD: HttpMethod = HttpMethod::Post;
}
