//! Echo server over a real socket

use ferret_finder::errors::AppResult;
use ferret_finder::server::serve_on;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<AppResult<()>>,
}

impl TestServer {
    async fn start(max_body_bytes: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve_on(listener, max_body_bytes, async move {
            let _ = rx.await;
        }));
        Self {
            addr,
            shutdown,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap().unwrap();
    }
}

async fn post(url: &str, body: &'static str) -> (u16, String) {
    let response = reqwest::Client::new()
        .post(url)
        .body(body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_post_root_echoes_body() {
    let server = TestServer::start(1024).await;

    let (status, body) = post(&server.url("/"), "hello there").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Received POST body: hello there");

    // Unrouted paths fall through to the echo handler
    let (status, body) = post(&server.url("/some/other/path"), "x").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Received POST body: x");

    server.stop().await;
}

#[tokio::test]
async fn test_b64_decodes_body() {
    let server = TestServer::start(1024).await;

    let (status, body) = post(&server.url("/b64"), "SGVsbG8sIFdvcmxkIQ==").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Decoded data: Hello, World!");

    let (status, body) = post(&server.url("/b64"), "SGVsbG8sIFdvcmxkIQ==\n").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Decoded data: Hello, World!");

    server.stop().await;
}

#[tokio::test]
async fn test_b64_rejects_invalid_body() {
    let server = TestServer::start(1024).await;

    let (status, body) = post(&server.url("/b64"), "%%%not-base64").await;
    assert_eq!(status, 400);
    assert_eq!(body, "Base64 Decoding Failed: '%%%not-base64'\n");

    server.stop().await;
}

#[tokio::test]
async fn test_non_post_methods_are_rejected() {
    let server = TestServer::start(1024).await;
    let client = reqwest::Client::new();

    for path in ["/", "/b64"] {
        let response = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 405);
        assert_eq!(response.text().await.unwrap(), "Invalid request method\n");
    }

    let response = client.put(server.url("/b64")).body("SGk=").send().await.unwrap();
    assert_eq!(response.status().as_u16(), 405);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let server = TestServer::start(16).await;

    let (status, _) = post(&server.url("/"), "this body is longer than sixteen bytes").await;
    assert_eq!(status, 413);

    server.stop().await;
}
