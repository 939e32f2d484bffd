use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::request::{HttpClient, HttpRequest};
use crate::session::{Session, TokenStore};
use arogyamitra_shared::protocol::ApiRequest;
use arogyamitra_shared::{
    CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, LoginRequest, RegisterRequest,
};

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

// =========================================================
// API Client
// =========================================================

/// Single point of HTTP egress.
///
/// Every request carries the session's bearer token when one exists. A 401
/// response clears the session before `ApiError::Unauthenticated` is
/// returned; navigating away is left to whoever watches the session.
#[derive(Debug, Clone)]
pub struct ApiClient<C, S> {
    config: ClientConfig,
    http: C,
    session: Session<S>,
}

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub fn new(config: ClientConfig, http: C, session: Session<S>) -> Self {
        Self {
            config,
            http,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub async fn send<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let url = self.config.url(R::PATH);
        let mut req = HttpRequest::new(&url, R::METHOD)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);

        if let Some(token) = self.session.token() {
            req = req.with_header(HEADER_AUTHORIZATION, &bearer(&token));
        }

        if R::METHOD.has_body() {
            let body =
                serde_json::to_string(request).map_err(|e| ApiError::Encode(e.to_string()))?;
            req = req.with_body(body);
        }

        tracing::debug!(method = R::METHOD.as_str(), path = R::PATH, "dispatching request");

        let resp = self.http.send(req).await.inspect_err(|e| {
            tracing::error!(path = R::PATH, error = %e, "request failed before a response");
        })?;

        if !resp.is_success() {
            let err = ApiError::from_status(resp.status, &resp.body);
            if err.is_unauthenticated() {
                tracing::warn!(path = R::PATH, "authorization failed, clearing session");
                self.session.clear_token();
            }
            return Err(err);
        }

        resp.json::<R::Response>()
    }

    /// Exchanges credentials for a token and stores it.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        let token = self
            .send(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        self.session.set_token(&token.access_token);
        tracing::info!("logged in");
        Ok(())
    }

    /// Creates an account and signs straight in with the returned token.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<()> {
        let token = self
            .send(&RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        self.session.set_token(&token.access_token);
        tracing::info!("registered and logged in");
        Ok(())
    }

    pub fn logout(&self) {
        self.session.clear_token();
        tracing::info!("logged out");
    }
}
