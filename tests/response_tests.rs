use bytes::Bytes;
use http::{header::CONTENT_TYPE, Method, Request, Response};
use httpstub::{Error, HttpStub, StatusCode, StubResponse};
use serde::{Deserialize, Serialize};

fn get(uri: &str) -> Request<Bytes> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Bytes::new())
        .unwrap()
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct User {
    id: u32,
    name: String,
}

/// Tests and demonstrates JSON responses.
#[tokio::test]
async fn json_response_carries_serialized_body_and_content_type() {
    // Arrange
    let _ = env_logger::try_init();
    let stub = HttpStub::new();
    let user = User {
        id: 42,
        name: "Fred".into(),
    };
    stub.get("https://x.test").path("user").respond_json(&user);

    // Act
    let response = stub.dispatch(get("https://x.test/user")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );
    let decoded: User = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(decoded, user);
}

#[tokio::test]
async fn byte_responses_preserve_content_type_exactly() {
    // Arrange
    let stub = HttpStub::new();
    stub.get("https://x.test")
        .path("blob")
        .respond_bytes("application/octet-stream", &b"\x00\x01\x02"[..]);

    // Act
    let response = stub.dispatch(get("https://x.test/blob")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
    assert_eq!(response.body().as_ref(), b"\x00\x01\x02");
}

#[tokio::test]
async fn json_bytes_responses_get_the_json_content_type() {
    let stub = HttpStub::new();
    stub.get("https://x.test")
        .respond_json_bytes(&br#"{"already":"serialized"}"#[..]);

    let response = stub.dispatch(get("https://x.test/")).await.unwrap();
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );
    assert_eq!(response.body().as_ref(), br#"{"already":"serialized"}"#);
}

#[tokio::test]
async fn status_responses_accept_u16_and_typed_codes() {
    let stub = HttpStub::new();
    stub.get("https://x.test").path("a").respond_status(418u16);
    stub.get("https://x.test")
        .path("b")
        .respond_status(StatusCode::ACCEPTED);

    let response = stub.dispatch(get("https://x.test/a")).await.unwrap();
    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    assert!(response.body().is_empty());

    let response = stub.dispatch(get("https://x.test/b")).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn response_templates_keep_caller_supplied_metadata() {
    // Arrange: JSON body, but with a non-default status and an extra header.
    let stub = HttpStub::new();
    let template = StubResponse::json(&serde_json::json!({ "created": true }))
        .unwrap()
        .with_status(StatusCode::CREATED)
        .with_header(
            "location".parse().unwrap(),
            "https://x.test/thing/1".parse().unwrap(),
        );
    stub.get("https://x.test").respond_response(template);

    // Act
    let response = stub.dispatch(get("https://x.test/")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://x.test/thing/1"
    );
}

#[tokio::test]
async fn deferred_responders_are_awaited() {
    // Arrange: a responder that yields before producing its response.
    let stub = HttpStub::new();
    stub.get("https://x.test").respond_with_future(|_req| async {
        tokio::task::yield_now().await;
        let mut response = Response::new(Bytes::from_static(b"late"));
        *response.status_mut() = StatusCode::OK;
        Ok(response)
    });

    // Act
    let response = stub.dispatch(get("https://x.test/")).await.unwrap();

    // Assert
    assert_eq!(response.body().as_ref(), b"late");
}

#[tokio::test]
async fn response_build_errors_propagate_through_dispatch() {
    // Arrange: a responder that assembles its response with `?`; the
    // invalid status code surfaces as an http::Error from the builder.
    let stub = HttpStub::new();
    stub.get("https://x.test").respond_with(|_req| {
        let response = Response::builder().status(1000u16).body(Bytes::new())?;
        Ok(response)
    });

    // Act
    let result = stub.dispatch(get("https://x.test/")).await;

    // Assert
    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}

#[tokio::test]
async fn each_dispatch_gets_a_fresh_response() {
    let stub = HttpStub::new();
    stub.get("https://x.test").respond_json(&serde_json::json!({ "n": 1 }));

    let first = stub.dispatch(get("https://x.test/")).await.unwrap();
    let second = stub.dispatch(get("https://x.test/")).await.unwrap();
    assert_eq!(first.body(), second.body());
    assert_eq!(first.status(), second.status());
}
