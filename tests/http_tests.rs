//! End-to-end tests against a running server.
//!
//! Each test binds its own ephemeral loopback port, serves the real router on
//! it, and talks to it over TCP with reqwest.
//!
//! Run with: cargo test --test http_tests
use std::net::SocketAddr;
use std::time::Duration;

use axum_server::Handle;
use futures::future::join_all;
use hello_probe::http::{bind, serve};
use hello_probe::{create_router, AppConfig};
use reqwest::StatusCode;

/// A server running on a background task, shut down on drop.
struct TestServer {
    addr: SocketAddr,
    handle: Handle,
}

impl TestServer {
    async fn start() -> Self {
        let listener = bind("127.0.0.1:0".parse().unwrap()).expect("bind loopback");
        let addr = listener.local_addr().unwrap();
        let handle = Handle::new();

        tokio::spawn(serve(create_router(), listener, handle.clone()));
        handle.listening().await.expect("server did not start");

        Self { addr, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_healthz_over_tcp() {
    let server = TestServer::start().await;

    let response = client().get(server.url("/healthz")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "");
}

#[tokio::test]
async fn test_hello_over_tcp() {
    let server = TestServer::start().await;

    let response = client().get(server.url("/hello")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    assert_eq!(response.text().await.unwrap(), "Hello");
}

#[tokio::test]
async fn test_healthz_with_request_body() {
    let server = TestServer::start().await;

    let response = client()
        .get(server.url("/healthz"))
        .header("x-probe", "kubelet")
        .body("ignored")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "");
}

#[tokio::test]
async fn test_undefined_path_is_not_found() {
    let server = TestServer::start().await;

    let response = client().get(server.url("/missing")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_are_independent() {
    let server = TestServer::start().await;
    let client = client();

    let requests = (0..64).map(|i| {
        let (path, expected) = if i % 2 == 0 {
            ("/healthz", "")
        } else {
            ("/hello", "Hello")
        };
        let request = client.get(server.url(path)).send();
        async move {
            let response = request.await.unwrap();
            let status = response.status();
            let body = response.text().await.unwrap();
            (status, body, expected)
        }
    });

    for (status, body, expected) in join_all(requests).await {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn test_port_8080_scenario_config() {
    let config = AppConfig::from_lookup(|key| (key == "PORT").then(|| "8080".to_string())).unwrap();
    assert_eq!(config.http.socket_addr(), "0.0.0.0:8080".parse().unwrap());

    // Serve the same router on a free port to exercise the scenario's requests
    let server = TestServer::start().await;
    let client = client();

    let health = client.get(server.url("/healthz")).send().await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert!(health.text().await.unwrap().is_empty());

    let hello = client.get(server.url("/hello")).send().await.unwrap();
    assert_eq!(hello.status(), StatusCode::OK);
    assert_eq!(hello.text().await.unwrap(), "Hello");
}
