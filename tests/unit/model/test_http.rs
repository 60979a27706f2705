use crate::common::{API_KEY, BEARER, test_http_client};
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;
use yonoma_client::prelude::*;

struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("value cannot be serialized"))
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct Created {
    id: String,
}

#[tokio::test]
async fn post_sends_auth_and_json_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/things/create")
        .match_header("authorization", BEARER)
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_header("user-agent", USER_AGENT)
        .match_body(Matcher::Json(json!({"name": "x", "count": 2})))
        .with_status(201)
        .with_body(r#"{"id":"t1","nested":{"ok":true}}"#)
        .create_async()
        .await;

    let http = test_http_client(&server);
    let result = http
        .post("things/create", &json!({"name": "x", "count": 2}))
        .await
        .unwrap();

    assert_json_eq!(result, json!({"id": "t1", "nested": {"ok": true}}));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_sends_no_body_and_no_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/things/list")
        .match_header("authorization", BEARER)
        .match_header("accept", "application/json")
        .match_header("content-type", Matcher::Missing)
        .match_body("")
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let http = test_http_client(&server);
    let result = http.get("things/list").await.unwrap();

    assert_json_eq!(result, json!({"data": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn url_is_plain_concatenation() {
    let mut server = Server::new_async().await;
    // no slash is inserted between base URL and path
    let mock = server
        .mock("GET", "/v1things")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let config = Config::new(API_KEY, format!("{}/v1", server.url()));
    let http = HttpClient::new(config).unwrap();
    http.get("things").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_returns_raw_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/things/create")
        .with_status(422)
        .with_body(r#"{"message": "email is required"}"#)
        .create_async()
        .await;

    let http = test_http_client(&server);
    let err = http
        .post("things/create", &json!({}))
        .await
        .unwrap_err();

    match err {
        AppError::Api { status, body } => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body, br#"{"message": "email is required"}"#);
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn informational_and_redirect_ranges_are_not_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/moved")
        .with_status(304)
        .with_body("")
        .create_async()
        .await;

    let http = test_http_client(&server);
    let err = http.get("moved").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_MODIFIED));
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_body_is_a_decoding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/broken")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let http = test_http_client(&server);
    let err = http.get("broken").await.unwrap_err();
    assert!(matches!(err, AppError::Decoding(_)), "got {err:?}");
}

#[tokio::test]
async fn non_object_body_is_a_decoding_error() {
    let mut server = Server::new_async().await;
    let _array = server
        .mock("GET", "/array")
        .with_status(200)
        .with_body("[1,2,3]")
        .create_async()
        .await;
    let _empty = server
        .mock("GET", "/empty")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let http = test_http_client(&server);
    assert!(matches!(http.get("array").await, Err(AppError::Decoding(_))));
    assert!(matches!(http.get("empty").await, Err(AppError::Decoding(_))));
}

#[tokio::test]
async fn encoding_failure_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let http = test_http_client(&server);
    let err = http
        .post("things/create", &Unserializable)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Encoding(_)), "got {err:?}");
    mock.assert_async().await;
}

#[tokio::test]
async fn request_as_decodes_typed_responses() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/things/create")
        .with_status(201)
        .with_body(r#"{"id":"t7"}"#)
        .create_async()
        .await;

    let http = test_http_client(&server);
    let created: Created = http
        .request_as(Method::POST, "things/create", Some(&json!({"name": "y"})))
        .await
        .unwrap();

    assert_eq!(created, Created { id: "t7".into() });
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let config = Config::new(API_KEY, "http://127.0.0.1:1/").with_timeout(5);
    let http = HttpClient::new(config).unwrap();

    let err = http.get("lists/list").await.unwrap_err();

    assert!(matches!(err, AppError::Transport(_)), "got {err:?}");
    assert!(err.is_retryable_transport());
}

#[tokio::test]
async fn timed_out_post_is_sent_once() {
    // accepts connections and never answers
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            open.push(socket);
        }
    });

    let config = Config::new(API_KEY, format!("http://{addr}/"))
        .with_timeout(1)
        .with_retry(RetryConfig::with_max_retries_and_delay(2, 0));
    let client = Client::new(config).unwrap();

    let err = client
        .contacts()
        .create("g1", &json!({"email": "a@b.com"}))
        .await
        .unwrap_err();

    match &err {
        AppError::Transport(e) => assert!(e.is_timeout(), "got {e:?}"),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(!err.is_retryable_transport());
    assert_eq!(accepted.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn zero_timeout_means_no_timeout() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/things/list")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let config = crate::common::test_config(&server).with_timeout(0);
    let http = HttpClient::new(config).unwrap();

    assert!(http.get("things/list").await.unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn api_errors_are_never_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/flaky")
        .with_status(503)
        .with_body("unavailable")
        .expect(1)
        .create_async()
        .await;

    let config = crate::common::test_config(&server)
        .with_retry(RetryConfig::with_max_retries_and_delay(3, 0));
    let http = HttpClient::new(config).unwrap();

    let err = http.get("flaky").await.unwrap_err();
    assert_eq!(err.body().as_deref(), Some("unavailable"));
    mock.assert_async().await;
}

#[tokio::test]
async fn every_call_is_a_fresh_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/things/t1")
        .with_status(200)
        .with_body(r#"{"id":"t1"}"#)
        .expect(2)
        .create_async()
        .await;

    let http = test_http_client(&server);
    let first = http.get("things/t1").await.unwrap();
    let second = http.get("things/t1").await.unwrap();

    assert_eq!(first, second);
    mock.assert_async().await;
}
