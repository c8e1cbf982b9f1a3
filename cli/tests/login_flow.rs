use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use admin_login::{FileTokenStore, HttpAuthApi};
use axum::http::{header::CONTENT_TYPE, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use shared::{
    LoginFlow, LoginState, RecordingNavigator, TokenStore, LOGIN_FAILED_MESSAGE,
    MISSING_CREDENTIALS_MESSAGE,
};

#[derive(Debug, Clone)]
struct Captured {
    content_type: Option<String>,
    body: String,
}

type Seen = Arc<Mutex<Vec<Captured>>>;

/// Starts a fake `/admin/login` endpoint that always answers with `status` and `reply`.
async fn spawn_endpoint(status: StatusCode, reply: &'static str) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));

    let handler_seen = seen.clone();
    let app = Router::new().route(
        "/admin/login",
        post(move |headers: HeaderMap, body: String| {
            let seen = handler_seen.clone();
            async move {
                seen.lock().unwrap().push(Captured {
                    content_type: headers
                        .get(CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body,
                });
                (status, reply)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}

fn temp_token_file() -> PathBuf {
    std::env::temp_dir().join(format!("admin-login-{}.json", uuid::Uuid::new_v4()))
}

#[tokio::test]
async fn test_successful_login_stores_token() {
    let (base_url, seen) = spawn_endpoint(StatusCode::OK, r#"{"token":"abc"}"#).await;
    let path = temp_token_file();
    let store = FileTokenStore::new(&path);
    let navigator = RecordingNavigator::new();
    let flow = LoginFlow::new(HttpAuthApi::new(&base_url), &store, navigator.clone());

    let attempt = flow.login("admin123", "secret").await;

    assert_eq!(
        attempt.state(),
        &LoginState::Success {
            redirect: "/admin/dashboard".to_string()
        }
    );
    assert_eq!(store.get().as_deref(), Some("abc"));
    assert_eq!(navigator.visited(), vec!["/admin/dashboard".to_string()]);

    let requests = seen.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "username": "admin123", "password": "secret" })
    );

    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let (base_url, seen) = spawn_endpoint(StatusCode::OK, r#"{"token":"abc"}"#).await;
    let store = FileTokenStore::new(temp_token_file());
    let flow = LoginFlow::new(
        HttpAuthApi::new(&format!("{}/", base_url)),
        &store,
        RecordingNavigator::new(),
    );

    let attempt = flow.login("admin123", "secret").await;

    assert!(matches!(attempt.state(), LoginState::Success { .. }));
    assert_eq!(seen.lock().unwrap().len(), 1);

    std::fs::remove_file(store.path()).unwrap();
}

#[tokio::test]
async fn test_error_statuses_leave_no_token() {
    for status in [
        StatusCode::UNAUTHORIZED,
        StatusCode::FORBIDDEN,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let (base_url, seen) = spawn_endpoint(status, "{}").await;
        let path = temp_token_file();
        let store = FileTokenStore::new(&path);
        let navigator = RecordingNavigator::new();
        let flow = LoginFlow::new(HttpAuthApi::new(&base_url), &store, navigator.clone());

        let attempt = flow.login("admin123", "wrong").await;

        assert_eq!(attempt.error_message(), Some(LOGIN_FAILED_MESSAGE));
        assert!(!attempt.is_loading());
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(!path.exists());
        assert!(navigator.visited().is_empty());
    }
}

#[tokio::test]
async fn test_unparseable_success_body_is_rejected() {
    for reply in ["ok", "{}", r#"{"token":42}"#] {
        let (base_url, _seen) = spawn_endpoint(StatusCode::OK, reply).await;
        let path = temp_token_file();
        let store = FileTokenStore::new(&path);
        let navigator = RecordingNavigator::new();
        let flow = LoginFlow::new(HttpAuthApi::new(&base_url), &store, navigator.clone());

        let attempt = flow.login("admin123", "secret").await;

        assert_eq!(attempt.error_message(), Some(LOGIN_FAILED_MESSAGE));
        assert!(!path.exists());
        assert!(navigator.visited().is_empty());
    }
}

#[tokio::test]
async fn test_connection_refused_matches_rejection() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let path = temp_token_file();
    let store = FileTokenStore::new(&path);
    let navigator = RecordingNavigator::new();
    let flow = LoginFlow::new(
        HttpAuthApi::new(&format!("http://{}", addr)),
        &store,
        navigator.clone(),
    );

    let attempt = flow.login("admin123", "secret").await;

    assert_eq!(attempt.error_message(), Some(LOGIN_FAILED_MESSAGE));
    assert!(!path.exists());
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_empty_field_sends_nothing() {
    let (base_url, seen) = spawn_endpoint(StatusCode::OK, r#"{"token":"abc"}"#).await;
    let path = temp_token_file();
    let store = FileTokenStore::new(&path);
    let flow = LoginFlow::new(HttpAuthApi::new(&base_url), &store, RecordingNavigator::new());

    let attempt = flow.login("", "secret").await;

    assert_eq!(attempt.error_message(), Some(MISSING_CREDENTIALS_MESSAGE));
    assert!(seen.lock().unwrap().is_empty());
    assert!(!path.exists());
}
