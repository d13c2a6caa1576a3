//! Mock HTTP server setup for integration tests

use kequtech_api::{KequtechClient, KequtechClientBuilder};
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const API_KEY: &str = "test-key";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server
    pub fn client(&self) -> KequtechClient {
        KequtechClientBuilder::new()
            .api_key(API_KEY)
            .host(&self.base_url)
            .build()
            .expect("client builds against mock server")
    }

    /// JSON response for `path`, checking the credential and content type
    pub async fn mock_json_response(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("authorization", format!("Api-Key {}", API_KEY).as_str())
            .match_header("content-type", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// A mock that must never be hit
    pub async fn mock_unreachable(&mut self, path: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_body(Matcher::Any)
            .expect(0)
            .create_async()
            .await
    }
}
