use std::net::TcpListener;
use std::time::Duration;

use homework_core::ErrorKind;
use homework_engine::{FetchSettings, ReqwestStatusSource, StatusSource};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> FetchSettings {
    FetchSettings {
        endpoint: format!("{}/api/user_api/homework_statuses/", server.uri()),
        token: "practicum-secret".to_string(),
        connect_timeout: None,
        request_timeout: None,
    }
}

/// Base uri of a local port nothing listens on.
fn closed_port_uri() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn fetch_sends_token_and_cursor_and_decodes_json() {
    let server = MockServer::start().await;
    let body = json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 1000
    });
    Mock::given(method("GET"))
        .and(path("/api/user_api/homework_statuses/"))
        .and(header("Authorization", "OAuth practicum-secret"))
        .and(query_param("from_date", "900"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let source = ReqwestStatusSource::new(settings(&server)).unwrap();
    let payload = source.fetch(900).await.expect("fetch ok");
    assert_eq!(payload, body);
}

#[tokio::test]
async fn fetch_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = ReqwestStatusSource::new(settings(&server)).unwrap();
    let err = source.fetch(1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Endpoint(404));
    assert!(err.message.contains("homework_statuses"));
    assert!(!err.message.contains("practicum-secret"));
}

#[tokio::test]
async fn fetch_rejects_success_statuses_other_than_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(203).set_body_json(json!({"homeworks": []})))
        .mount(&server)
        .await;

    let source = ReqwestStatusSource::new(settings(&server)).unwrap();
    let err = source.fetch(1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Endpoint(203));
}

#[tokio::test]
async fn fetch_fails_on_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let source = ReqwestStatusSource::new(settings(&server)).unwrap();
    let err = source.fetch(1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Format);
}

#[tokio::test]
async fn service_rejection_body_is_returned_for_validation() {
    let server = MockServer::start().await;
    let body = json!({"code": "not_authenticated", "message": "Учетные данные не были предоставлены."});
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let source = ReqwestStatusSource::new(settings(&server)).unwrap();
    assert_eq!(source.fetch(1).await.unwrap(), body);
}

#[tokio::test]
async fn fetch_fails_with_network_error_when_unreachable() {
    let settings = FetchSettings {
        endpoint: format!("{}/api/user_api/homework_statuses/", closed_port_uri()),
        token: "practicum-secret".to_string(),
        connect_timeout: None,
        request_timeout: None,
    };

    let source = ReqwestStatusSource::new(settings).unwrap();
    let err = source.fetch(1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
}

#[tokio::test]
async fn fetch_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"homeworks": []})),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..settings(&server)
    };
    let source = ReqwestStatusSource::new(settings).unwrap();
    let err = source.fetch(1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
}
