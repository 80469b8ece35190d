use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// Mock server utilities for testing the Perplexity client
pub struct PerplexityMockServer {
    server: MockServer,
}

impl PerplexityMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.server.uri())
    }

    /// Mock a successful completion, matching on the search context size
    pub async fn mock_success(&self, search_context_size: &str, response_content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_partial_json(json!({
                "model": "sonar",
                "max_tokens": 300,
                "stream": false,
                "web_search_options": { "search_context_size": search_context_size }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cmpl-test123",
                "model": "sonar",
                "object": "chat.completion",
                "created": 1700000000,
                "citations": ["https://example.com/nomad-guide"],
                "choices": [{
                    "index": 0,
                    "finish_reason": "stop",
                    "message": {
                        "role": "assistant",
                        "content": response_content
                    }
                }],
                "usage": {
                    "prompt_tokens": 120,
                    "completion_tokens": 30,
                    "total_tokens": 150
                }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an API error response
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "type": "invalid_request_error",
                    "message": message
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response that carries no choices
    pub async fn mock_empty_choices(&self) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cmpl-empty",
                "choices": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not JSON
    pub async fn mock_garbage(&self) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&self.server)
            .await;
    }
}
