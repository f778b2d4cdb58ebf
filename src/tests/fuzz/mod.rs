//! Fuzz tests: random request bodies must never break the stub contract.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use rand::Rng;
use serde_json::Value;
use tower::ServiceExt;

use crate::rpc::build_router;
use crate::rpc::handlers::decode_request;

#[test]
fn fuzz_request_decoding() {
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        let len = rng.gen_range(0..128);
        let bogus: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        // Just ensure we don't panic
        let _ = decode_request(&bogus);
    }
}

#[tokio::test]
async fn fuzz_rpc_endpoint_always_answers_stub() {
    let mut rng = rand::thread_rng();
    let app = build_router();

    for _ in 0..200 {
        let len = rng.gen_range(0..96);
        let bogus: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let req = Request::builder()
            .method("POST")
            .uri("/rpc")
            .body(Body::from(bogus))
            .unwrap();

        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let v: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["jsonrpc"], "2.0");
        assert_eq!(v["result"], "stub-response");
    }
}
