//! End-to-end dispatch over real HTTP against a wiremock server.

use arogyamitra::shared::chat::ChatRequest;
use arogyamitra::shared::protocol::HttpMethod;
use arogyamitra::shared::{CurrentUserRequest, DashboardData, DashboardDataRequest};
use arogyamitra::{
    ApiClient, ApiError, ApiResult, ClientConfig, HttpClient, HttpRequest, HttpResponse,
    MemoryTokenStore, Session,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &req.url);
        for (k, v) in req.headers {
            builder = builder.header(k, v);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn client_for(
    server: &MockServer,
    store: MemoryTokenStore,
) -> ApiClient<ReqwestHttpClient, MemoryTokenStore> {
    ApiClient::new(
        ClientConfig::new(server.uri()),
        ReqwestHttpClient::new(),
        Session::new(store),
    )
}

#[tokio::test]
async fn bearer_header_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard-data"))
        .and(header("Authorization", "Bearer tok-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latest_assessment": null,
            "total_workouts": 1,
            "total_meals": 2,
            "total_messages": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, MemoryTokenStore::with_token("tok-42"));
    let data = api.send(&DashboardDataRequest).await.unwrap();

    assert_eq!(
        data,
        DashboardData {
            latest_assessment: None,
            total_workouts: 1,
            total_meals: 2,
            total_messages: 3
        }
    );
}

#[tokio::test]
async fn chat_body_matches_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "user_id": null,
            "message": "Best post-run stretch?",
            "session_id": "local-0a1b2c3d"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "{\"assistant_reply\": \"Try a standing quad stretch.\"}",
            "tool_used": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, MemoryTokenStore::with_token("tok"));
    let resp = api
        .send(&ChatRequest::new("Best post-run stretch?", "local-0a1b2c3d"))
        .await
        .unwrap();

    assert_eq!(
        arogyamitra::shared::chat::display_content(&resp.reply),
        "Try a standing quad stretch."
    );
}

#[tokio::test]
async fn expired_token_is_cleared_on_401() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("expired");
    let api = client_for(&server, store.clone());

    let err = api.send(&CurrentUserRequest).await.unwrap_err();
    assert!(err.is_unauthenticated());
    assert_eq!(err.detail(), Some("Token expired"));
    assert!(!api.session().is_authenticated());
    assert_eq!(arogyamitra::TokenStore::load(&store), None);
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/meal-analysis"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, MemoryTokenStore::with_token("tok"));
    let err = api
        .send(&arogyamitra::shared::nutrition::MealAnalysisRequest::new("dal and rice"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(api.session().is_authenticated());
}

#[tokio::test]
async fn login_then_authenticated_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "asha@example.com", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "issued", "token_type": "bearer"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer issued"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "Asha", "email": "asha@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, MemoryTokenStore::new());
    api.login("asha@example.com", "pw").await.unwrap();
    let me = api.send(&CurrentUserRequest).await.unwrap();
    assert_eq!(me.name, "Asha");
}
