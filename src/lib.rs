//! ArogyaMitra client core
//!
//! Platform-neutral half of the web client:
//! - `session`: the bearer token and its storage backend
//! - `api`: the single HTTP egress point, generic over the transport
//! - `route`: the route table and the auth gate
//! - `config`: API base URL
//!
//! The web shell supplies a browser `HttpClient` and `TokenStore`; tests
//! supply in-memory ones.

pub mod api;
pub mod config;
pub mod error;
pub mod request;
pub mod route;
pub mod session;

pub use api::ApiClient;
pub use arogyamitra_shared as shared;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use route::{AppRoute, Navigation};
pub use session::{AuthFlag, FlaggedStore, MemoryTokenStore, Session, TokenStore};
