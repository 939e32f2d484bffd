//! `fetch` transport for the API client, built on `gloo-net`.

use arogyamitra::{ApiError, ApiResult, HttpClient, HttpRequest, HttpResponse};
use arogyamitra_shared::protocol::HttpMethod;
use gloo_net::http::{Method, RequestBuilder};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = RequestBuilder::new(&req.url).method(method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(transport)?;

        let resp = request.send().await.map_err(transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;

        Ok(HttpResponse { status, body })
    }
}
