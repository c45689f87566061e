use std::sync::Arc;

use axum::{extract::State, http::StatusCode as HttpStatus, routing::post, Json, Router};
use serde_json::json;
use shared::domain::Rank;
use tokio::{net::TcpListener, sync::Mutex};

use super::*;

#[derive(Clone)]
struct StubState {
    status: HttpStatus,
    body: &'static str,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn handle_create(
    State(state): State<StubState>,
    Json(payload): Json<Value>,
) -> (HttpStatus, &'static str) {
    state.received.lock().await.push(payload);
    (state.status, state.body)
}

async fn spawn_stub(
    status: HttpStatus,
    body: &'static str,
) -> (String, Arc<Mutex<Vec<Value>>>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/investors", post(handle_create))
        .with_state(StubState {
            status,
            body,
            received: received.clone(),
        });
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/api"), received)
}

fn sample_draft() -> InvestorDraft {
    InvestorDraft {
        full_name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        rank: Some(Rank::Beginner),
        areas_of_interest: vec!["Technology".to_string()],
        ..InvestorDraft::default()
    }
}

#[test]
fn builds_investors_endpoint_from_base_url() {
    let api = HttpInvestorApi::new("http://localhost:5006/api/").expect("api");
    assert_eq!(api.endpoint().as_str(), "http://localhost:5006/api/investors");
}

#[test]
fn rejects_malformed_and_non_http_base_urls() {
    assert!(matches!(
        HttpInvestorApi::new("not a url"),
        Err(SubmissionError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        HttpInvestorApi::new("ftp://files.example/api"),
        Err(SubmissionError::UnsupportedScheme(scheme)) if scheme == "ftp"
    ));
}

#[tokio::test]
async fn posts_draft_as_json_and_returns_parsed_body() {
    let (base_url, received) = spawn_stub(HttpStatus::CREATED, r#"{"id":1}"#).await;
    let api = HttpInvestorApi::new(&base_url).expect("api");

    let body = api.create_investor(&sample_draft()).await.expect("created");

    assert_eq!(body, json!({ "id": 1 }));
    let received = received.lock().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["fullName"], "Jane Doe");
    assert_eq!(received[0]["rank"], "BEGINNER");
    assert_eq!(received[0]["gender"], "");
    assert_eq!(received[0]["aoi"], json!(["Technology"]));
}

#[tokio::test]
async fn non_success_status_is_an_error_without_retry() {
    let (base_url, received) = spawn_stub(HttpStatus::INTERNAL_SERVER_ERROR, "{}").await;
    let api = HttpInvestorApi::new(&base_url).expect("api");

    let err = api.create_investor(&sample_draft()).await.expect_err("500");

    assert!(matches!(err, SubmissionError::Status(status) if status.as_u16() == 500));
    assert_eq!(received.lock().await.len(), 1);
}

#[tokio::test]
async fn unreadable_success_body_is_an_error() {
    let (base_url, _received) = spawn_stub(HttpStatus::OK, "created").await;
    let api = HttpInvestorApi::new(&base_url).expect("api");

    let err = api.create_investor(&sample_draft()).await.expect_err("decode");

    assert!(matches!(err, SubmissionError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let api = HttpInvestorApi::new(&format!("http://{addr}/api")).expect("api");
    let err = api.create_investor(&sample_draft()).await.expect_err("refused");

    assert!(matches!(err, SubmissionError::Transport(_)));
}
