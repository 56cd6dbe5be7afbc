use axum::{
    extract::State,
    http::{
        header::{ACCEPT, CONTENT_TYPE, COOKIE},
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use client::HttpEmployeeApi;
use shared_types::ApiConfig;
use std::sync::{Arc, Mutex};

/// Headers the mock saw on one profile request.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub accept: Option<String>,
    pub cookie: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// A running mock of the employee API.
pub struct MockApi {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockApi {
    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone())
    }

    pub fn client(&self) -> HttpEmployeeApi {
        HttpEmployeeApi::new(&self.config()).expect("mock base URL is valid")
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().expect("mock lock poisoned").clone()
    }
}

async fn profile_handler(State(state): State<MockState>, headers: HeaderMap) -> impl IntoResponse {
    let header = |name| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state
        .seen
        .lock()
        .expect("mock lock poisoned")
        .push(SeenRequest {
            accept: header(ACCEPT),
            cookie: header(COOKIE),
        });

    (state.status, [(CONTENT_TYPE, state.content_type)], state.body)
}

/// Serve `GET /api/employee/self` answering with `status` and a JSON `body`.
pub async fn serve_json(status: StatusCode, body: &str) -> MockApi {
    serve(status, "application/json", body).await
}

/// Serve `GET /api/employee/self` answering with `status` and a text `body`.
pub async fn serve_text(status: StatusCode, body: &str) -> MockApi {
    serve(status, "text/plain; charset=utf-8", body).await
}

async fn serve(status: StatusCode, content_type: &'static str, body: &str) -> MockApi {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        content_type,
        body: body.to_string(),
        seen: seen.clone(),
    };

    let app = Router::new()
        .route("/api/employee/self", get(profile_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock listener");
    let addr = listener.local_addr().expect("mock listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server crashed");
    });

    MockApi {
        base_url: format!("http://{addr}"),
        seen,
    }
}

/// Base URL of a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let port = listener.local_addr().expect("listener has an address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
