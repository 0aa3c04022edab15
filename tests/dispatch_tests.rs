use bytes::Bytes;
use http::{Method, Request, Response};
use httpstub::{matchers::Predicate, Error, HttpStub, StatusCode, StubResponse};

fn get(uri: &str) -> Request<Bytes> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Bytes::new())
        .unwrap()
}

/// Tests and demonstrates last-registered-wins priority.
#[tokio::test]
async fn last_registered_rule_wins() {
    // Arrange
    let _ = env_logger::try_init();
    let stub = HttpStub::new();

    stub.get("https://x.test").respond_status(200u16);
    stub.get("https://x.test").respond_status(204u16);

    // Act
    let response = stub.dispatch(get("https://x.test/")).await.unwrap();

    // Assert: both rules match, the later registration answers.
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn catch_all_registered_early_is_overridden_by_later_specialization() {
    // Arrange
    let stub = HttpStub::new();
    stub.register(Predicate::any(), StubResponse::status(StatusCode::IM_A_TEAPOT));
    stub.get("https://x.test").path("special").respond_status(200u16);

    // Act + Assert: the specialization wins where it applies, the catch-all
    // still answers everything else.
    let special = stub.dispatch(get("https://x.test/special")).await.unwrap();
    assert_eq!(special.status(), StatusCode::OK);

    let other = stub.dispatch(get("https://elsewhere.test/")).await.unwrap();
    assert_eq!(other.status(), StatusCode::IM_A_TEAPOT);
}

#[tokio::test]
async fn unmatched_request_gets_404_with_no_content() {
    // Arrange
    let stub = HttpStub::new();
    stub.get("https://x.test").respond_status(204u16);

    // Act
    let response = stub.dispatch(get("https://y.test/")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.body().is_empty());
    assert!(response.headers().get("content-type").is_none());
}

#[tokio::test]
async fn empty_stub_answers_404() {
    let stub = HttpStub::new();
    let response = stub.dispatch(get("https://x.test/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responder_receives_the_original_request_with_body() {
    // Arrange: matching never consumes the body, so the responder can echo it.
    let stub = HttpStub::new();
    stub.request(Method::POST, "https://x.test")
        .path("echo")
        .respond_with(|req| Ok(Response::new(req.into_body())));

    let request = Request::builder()
        .method(Method::POST)
        .uri("https://x.test/echo")
        .body(Bytes::from_static(b"payload"))
        .unwrap();

    // Act
    let response = stub.dispatch(request).await.unwrap();

    // Assert
    assert_eq!(response.body().as_ref(), b"payload");
}

#[tokio::test]
async fn responder_errors_propagate_without_falling_back() {
    // Arrange: a lower-priority rule would match too, but a match is a
    // commitment; the failing responder's error reaches the caller.
    let stub = HttpStub::new();
    stub.get("https://x.test").respond_status(200u16);
    stub.get("https://x.test")
        .respond_with(|_req| Err(Error::producer("boom")));

    // Act
    let result = stub.dispatch(get("https://x.test/")).await;

    // Assert
    match result {
        Err(Error::Producer(err)) => assert_eq!(err.to_string(), "boom"),
        other => panic!("expected a producer error, got {other:?}"),
    }
}

#[tokio::test]
async fn method_is_part_of_the_match() {
    let stub = HttpStub::new();
    stub.get("https://x.test").respond_status(204u16);

    let post = Request::builder()
        .method(Method::POST)
        .uri("https://x.test/")
        .body(Bytes::new())
        .unwrap();
    let response = stub.dispatch(post).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_dispatch_through_a_shared_stub() {
    // Arrange
    let stub = HttpStub::new();
    stub.get("https://x.test").respond_status(204u16);

    // Act: several in-flight requests against the same rule list.
    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let stub = stub.clone();
            tokio::spawn(async move { stub.dispatch(get("https://x.test/")).await })
        })
        .collect();

    // Assert
    for task in tasks {
        let response = task.await.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
