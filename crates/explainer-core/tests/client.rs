//! Client tests against a stub explanation service.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use explainer_core::config::ServiceConfig;
use explainer_core::{
    ErrorKind, Event, ExplainClient, ExplainError, ExplainRequest, ExplainResponse, Language,
    ShellState, reduce,
};

#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<(Option<String>, ExplainRequest)>>>,
}

async fn explain_ok(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(request): Json<ExplainRequest>,
) -> Json<ExplainResponse> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let explanation = format!("{} code, {} bytes", request.language, request.code.len());
    seen.requests.lock().unwrap().push((content_type, request));
    Json(ExplainResponse { explanation })
}

async fn explain_rejects() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": "No code provided"})),
    )
}

async fn explain_crashes() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "")
}

async fn explain_garbage() -> &'static str {
    "not json at all"
}

/// Starts a stub service and returns its explain URL.
async fn spawn_service(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/explain", addr)
}

fn client_for(endpoint: String) -> ExplainClient {
    ExplainClient::new(&ServiceConfig {
        endpoint,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_success_returns_explanation() {
    let seen = Seen::default();
    let app = Router::new()
        .route("/explain", post(explain_ok))
        .with_state(seen.clone());
    let client = client_for(spawn_service(app).await);

    let explanation = client
        .explain(ExplainRequest::new("print(1)", Language::Python))
        .await
        .unwrap();
    assert_eq!(explanation, "python code, 8 bytes");

    let requests = seen.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (content_type, request) = &requests[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(request.code, "print(1)");
    assert_eq!(request.language, "python");
}

#[tokio::test]
async fn test_auto_is_sent_as_unknown() {
    let seen = Seen::default();
    let app = Router::new()
        .route("/explain", post(explain_ok))
        .with_state(seen.clone());
    let client = client_for(spawn_service(app).await);

    client
        .explain(ExplainRequest::new("x", Language::Auto))
        .await
        .unwrap();

    let requests = seen.requests.lock().unwrap();
    assert_eq!(requests[0].1.language, "unknown");
}

#[tokio::test]
async fn test_error_status_carries_service_message() {
    let app = Router::new().route("/explain", post(explain_rejects));
    let client = client_for(spawn_service(app).await);

    let err = client
        .explain(ExplainRequest::new("x", Language::Java))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ExplainError::Status {
            status: 400,
            detail: Some("No code provided".into())
        }
    );
    assert_eq!(err.kind(), ErrorKind::RequestFailure);
}

#[tokio::test]
async fn test_empty_error_body() {
    let app = Router::new().route("/explain", post(explain_crashes));
    let client = client_for(spawn_service(app).await);

    let err = client
        .explain(ExplainRequest::new("x", Language::Cpp))
        .await
        .unwrap_err();
    assert_eq!(err, ExplainError::Status { status: 500, detail: None });
}

#[tokio::test]
async fn test_undecodable_body() {
    let app = Router::new().route("/explain", post(explain_garbage));
    let client = client_for(spawn_service(app).await);

    let err = client
        .explain(ExplainRequest::new("x", Language::JavaScript))
        .await
        .unwrap_err();
    assert!(matches!(err, ExplainError::Decode(_)), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::RequestFailure);
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a port, then free it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(format!("http://127.0.0.1:{}/explain", port));

    let err = client
        .explain(ExplainRequest::new("x", Language::Auto))
        .await
        .unwrap_err();
    assert!(matches!(err, ExplainError::Transport(_)), "got {err:?}");
}

/// Drives the reducer the way the UI does.
async fn submit(client: &ExplainClient, state: ShellState) -> ShellState {
    let state = reduce(state, Event::SubmitStart);
    if !state.in_flight {
        return state;
    }
    let event = match client.explain(state.request()).await {
        Ok(explanation) => Event::SubmitSuccess(explanation),
        Err(err) => Event::SubmitFailure(err),
    };
    reduce(state, event)
}

#[tokio::test]
async fn test_shell_flow_success_then_failure() {
    let ok = client_for(
        spawn_service(
            Router::new()
                .route("/explain", post(explain_ok))
                .with_state(Seen::default()),
        )
        .await,
    );
    let failing = client_for(spawn_service(Router::new().route("/explain", post(explain_crashes))).await);

    let state = reduce(ShellState::default(), Event::EditInput("abc".into()));
    let state = reduce(state, Event::SelectLanguage(Language::JavaScript));

    let state = submit(&ok, state).await;
    assert_eq!(state.explanation, "javascript code, 3 bytes");
    assert!(!state.in_flight);

    let state = submit(&failing, state).await;
    assert_eq!(state.explanation, "javascript code, 3 bytes");
    assert!(!state.in_flight);
    assert_eq!(state.alert.map(|a| a.kind), Some(ErrorKind::RequestFailure));
}

#[tokio::test]
async fn test_shell_flow_blank_never_sends() {
    let seen = Seen::default();
    let client = client_for(
        spawn_service(
            Router::new()
                .route("/explain", post(explain_ok))
                .with_state(seen.clone()),
        )
        .await,
    );

    let state = reduce(ShellState::default(), Event::EditInput("   ".into()));
    let state = submit(&client, state).await;

    assert_eq!(state.alert.map(|a| a.kind), Some(ErrorKind::Validation));
    assert!(seen.requests.lock().unwrap().is_empty());
}
