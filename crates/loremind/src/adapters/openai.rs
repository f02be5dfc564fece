//! OpenAI chat-completion client
//!
//! POSTs `{model, messages}` to `/v1/chat/completions` with bearer auth and
//! returns the first choice's content.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{errors::DomainError, ChatMessage, CompletionRequest};
use crate::ports::CompletionTransport;

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Completion transport backed by the OpenAI HTTP API
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiChatClient {
    /// Create a client for the public OpenAI endpoint
    pub fn new() -> Self {
        Self::with_endpoint(OPENAI_CHAT_URL)
    }

    /// Create a client for an OpenAI-compatible endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for OpenAiChatClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a response body into the first choice's content.
///
/// A body that is not JSON or has no `choices` array is an error; a missing
/// choice, message or content is `None`.
fn first_choice_content(body: &str) -> Result<Option<String>, DomainError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        DomainError::ExternalService(format!("Malformed completion response: {}", e))
    })?;

    Ok(parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content))
}

#[async_trait]
impl CompletionTransport for OpenAiChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, DomainError> {
        let payload = ChatCompletionRequest {
            model: request.model.id(),
            messages: request.messages(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&request.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("OpenAI request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::ExternalService(format!("Failed to read OpenAI response: {}", e))
        })?;

        if !status.is_success() {
            return Err(DomainError::ExternalService(format!(
                "OpenAI API error ({}): {}",
                status, body
            )));
        }

        debug!(status = %status, body_len = body.len(), "Received completion response");
        first_choice_content(&body)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChatModel;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v1/chat/completions", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).to_string()
        });

        (url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn request(model: ChatModel) -> CompletionRequest {
        CompletionRequest {
            model,
            system_prompt: "You are a helpful and in-character fantasy assistant.".to_string(),
            user_prompt: "What is a mimic?".to_string(),
            api_key: "sk-test".to_string(),
        }
    }

    #[test]
    fn test_first_choice_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Hello there  "}},{"message":{"content":"second"}}]}"#;
        assert_eq!(
            first_choice_content(body).unwrap().as_deref(),
            Some("  Hello there  ")
        );
    }

    #[test]
    fn test_missing_pieces_are_none() {
        for body in [
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
        ] {
            assert_eq!(first_choice_content(body).unwrap(), None, "body: {}", body);
        }
    }

    #[test]
    fn test_malformed_bodies_are_errors() {
        for body in ["", "<html>Bad Gateway</html>", "{}", r#"{"choices":"nope"}"#, "[1,2]"] {
            assert!(first_choice_content(body).is_err(), "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_messages() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"content":"A hungry chest."}}]}"#,
        )
        .await;
        let client = OpenAiChatClient::with_endpoint(url);

        let content = client.complete(&request(ChatModel::Gpt4)).await.unwrap();
        assert_eq!(content.as_deref(), Some("A hungry chest."));

        let raw = server.await.unwrap();
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        let head = head.to_lowercase();
        assert!(head.starts_with("post /v1/chat/completions"));
        assert!(head.contains("authorization: bearer sk-test"));

        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "What is a mimic?");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let (url, _server) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided"}}"#,
        )
        .await;
        let client = OpenAiChatClient::with_endpoint(url);

        let err = client.complete(&request(ChatModel::Gpt4o)).await.unwrap_err();
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = OpenAiChatClient::with_endpoint(format!("http://{}/v1/chat/completions", addr));
        assert!(client.complete(&request(ChatModel::Gpt4o)).await.is_err());
    }
}
