//! Unit tests for the HTTP client, against a mocked API server

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, header_exists, method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
    ApiClient::new(
        format!("{}/api/", server.uri()),
        Duration::from_secs(2),
        token.map(str::to_string),
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_list_bare_array_and_envelope_agree() {
    let server = MockServer::start().await;
    let items = json!([{"id": 1}, {"id": 2}]);

    Mock::given(method("GET"))
        .and(path("/api/bare/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&items))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/paged/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"count": 2, "next": null, "results": items})),
        )
        .mount(&server)
        .await;

    let api = client(&server, None);
    let bare = api.get_list("/bare/", NO_QUERY).await.unwrap();
    let paged = api.get_list("/paged/", NO_QUERY).await.unwrap();
    assert_eq!(bare, paged);
    assert_eq!(bare.len(), 2);
}

#[tokio::test]
async fn test_token_header_is_attached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games/"))
        .and(header("authorization", "Token abc"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("abc"));
    assert!(api.get_list("/games/", NO_QUERY).await.unwrap().is_empty());
    assert!(!api.token_rejected());
}

#[tokio::test]
async fn test_read_retries_without_credentials_on_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tournaments/"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token."})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tournaments/"))
        .and(|req: &Request| !req.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("stale"));
    let items = api.get_list("/tournaments/", NO_QUERY).await.unwrap();

    assert_eq!(items.len(), 1);
    assert!(api.token_rejected());
}

#[tokio::test]
async fn test_anonymous_401_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/private/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    let err = api.get_json("/private/", NO_QUERY).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!api.token_rejected());
}

#[tokio::test]
async fn test_get_list_from_uses_first_answering_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tournaments/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tournament/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 7}])))
        .mount(&server)
        .await;

    let api = client(&server, None);
    let items = api
        .get_list_from(&[Endpoint::new("/tournaments/"), Endpoint::new("/tournament/")])
        .await
        .unwrap();
    assert_eq!(items, vec![json!({"id": 7})]);
}

#[tokio::test]
async fn test_get_list_from_sends_fixed_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/matches/"))
        .and(query_param("status", "запланирован"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 101}])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    let items = api
        .get_list_from(&[Endpoint::with_query("/matches/", &[("status", "запланирован")])])
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_write_403_is_forbidden() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/games/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "nope"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("abc"));
    let err = api.post_json("/games/", &json!({"title": "X"})).await.unwrap_err();

    assert!(matches!(err, EsportsError::Forbidden { .. }));
    assert_eq!(err.user_message(crate::error::MSG_SAVE_FAILED), "Нет прав (403).");
}

#[tokio::test]
async fn test_write_401_does_not_retry() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/games/1/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("abc"));
    let err = api.patch_json("/games/1/", &json!({})).await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_write_validation_error_carries_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/teams/"))
        .and(body_json(json!({"name": "Nova"})))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Такая команда уже есть"})),
        )
        .mount(&server)
        .await;

    let api = client(&server, Some("abc"));
    let err = api.post_json("/teams/", &json!({"name": "Nova"})).await.unwrap_err();

    match err {
        EsportsError::Rejected { status, detail, .. } => {
            assert_eq!(status, 400);
            assert_eq!(detail.as_deref(), Some("Такая команда уже есть"));
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/games/3/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("abc"));
    api.delete("/games/3/").await.unwrap();
}

#[tokio::test]
async fn test_timeout_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/slow/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let api = ApiClient::new(
        format!("{}/api", server.uri()),
        Duration::from_millis(100),
        None,
    )
    .unwrap();
    let err = api.get_json("/slow/", NO_QUERY).await.unwrap_err();
    match err {
        EsportsError::Http(e) => assert!(e.is_timeout()),
        other => panic!("Expected Http timeout, got {other:?}"),
    }
}

#[test]
fn test_url_joining() {
    let api = ApiClient::new("http://localhost:8000/api/", DEFAULT_TIMEOUT, None).unwrap();
    assert_eq!(api.base_url(), "http://localhost:8000/api");
    assert_eq!(api.url("/games/"), "http://localhost:8000/api/games/");
    assert_eq!(api.url("games/"), "http://localhost:8000/api/games/");
}

#[test]
fn test_blank_token_is_no_token() {
    let api = ApiClient::new(DEFAULT_API_BASE, DEFAULT_TIMEOUT, Some("  ".to_string())).unwrap();
    assert!(!api.has_token());
}

#[test]
fn test_error_detail_extraction() {
    assert_eq!(error_detail(r#"{"detail": "Bad"}"#).as_deref(), Some("Bad"));
    assert_eq!(
        error_detail(r#"{"non_field_errors": ["Неверный логин или пароль"]}"#).as_deref(),
        Some("Неверный логин или пароль")
    );
    assert_eq!(error_detail(r#"{"name": ["required"]}"#), None);
    assert_eq!(error_detail("<html>500</html>"), None);
}
