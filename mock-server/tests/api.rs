use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Envelope, Row};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn rows(envelope: Envelope) -> Vec<Row> {
    serde_json::from_value(envelope.data.unwrap()).unwrap()
}

fn row(envelope: Envelope) -> Row {
    serde_json::from_value(envelope.data.unwrap()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_rows_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/messages"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.status, "ok");
    assert!(rows(envelope).is_empty());
}

// --- create ---

#[tokio::test]
async fn create_row_from_template_body() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/messages",
            "{'mTitle':'Buy milk', 'mMessage':'two litres'}",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = row(body_json(resp).await);
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.message, "two litres");
}

#[tokio::test]
async fn create_row_from_strict_json() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/messages",
            r#"{"mTitle":"Strict","mMessage":"json"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(row(body_json(resp).await).title, "Strict");
}

#[tokio::test]
async fn create_row_malformed_body_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/messages", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.status, "error");
}

// --- get ---

#[tokio::test]
async fn get_row_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/messages/7"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.message.as_deref(), Some("row 7 not found"));
}

#[tokio::test]
async fn get_row_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/messages/seven"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_row_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/messages/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn message_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two rows
    for title in ["first", "second"] {
        let body = format!("{{'mTitle':'{title}', 'mMessage':'body'}}");
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/messages", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // list, ordered by id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/messages"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = rows(body_json(resp).await);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, 1);
    assert_eq!(listed[1].title, "second");

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/messages/2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(row(body_json(resp).await).title, "second");

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/messages/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.status, "ok");
    assert!(envelope.data.is_none());

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/messages/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // ids are not reused
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/messages",
            "{'mTitle':'third', 'mMessage':'body'}",
        ))
        .await
        .unwrap();
    assert_eq!(row(body_json(resp).await).id, 3);
}
