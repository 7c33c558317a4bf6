use crate::error::{Error, Result};
use crate::services::prompt_service::PromptPair;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Upper bound for a whole Messages API call, connect to last body byte.
pub const LLM_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Produces free text from a system instruction and a user instruction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompts: PromptPair) -> Result<String>;
}

#[derive(Clone)]
pub struct AIService {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
}

impl AIService {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        max_tokens: u32,
        client: Client,
    ) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_tokens,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    async fn create_message(&self, request: &MessagesRequest<'_>) -> Result<String> {
        let res = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(map_http_error(status, &text));
        }

        let body: MessagesResponse = res.json().await?;
        extract_text(body)
    }
}

#[async_trait]
impl TextGenerator for AIService {
    async fn generate(&self, prompts: PromptPair) -> Result<String> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: &prompts.system,
            messages: vec![RequestMessage {
                role: "user",
                content: &prompts.user,
            }],
        };

        tracing::debug!(model = %self.model, "Sending request to Anthropic");
        self.create_message(&request).await
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text(response: MessagesResponse) -> Result<String> {
    response
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .ok_or_else(|| Error::Llm("Anthropic response contained no text".to_string()))
}

fn map_http_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string());
    Error::Llm(format!("Anthropic API error {}: {}", status, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_block_is_returned_verbatim() {
        let body: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"thinking","thinking":"hmm"},{"type":"text","text":"  What would you ask a stranger? "}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(body).unwrap(), "  What would you ask a stranger? ");
    }

    #[test]
    fn missing_text_block_is_an_llm_error() {
        let body: MessagesResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(matches!(extract_text(body), Err(Error::Llm(_))));
    }

    #[test]
    fn provider_error_message_is_surfaced() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"type":"error","error":{"type":"rate_limit_error","message":"slow down"}}"#,
        );
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("slow down"));

        let raw = map_http_error(StatusCode::BAD_GATEWAY, "upstream exploded");
        assert!(raw.to_string().contains("upstream exploded"));
    }

    #[test]
    fn request_body_matches_messages_api() {
        let request = MessagesRequest {
            model: "claude-sonnet-4-20250514",
            max_tokens: 1024,
            system: "sys",
            messages: vec![RequestMessage {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["system"], "sys");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["max_tokens"], 1024);
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let svc = AIService::new(
            "key".into(),
            "model".into(),
            "https://api.anthropic.com/".into(),
            16,
            Client::new(),
        );
        assert_eq!(svc.messages_url(), "https://api.anthropic.com/v1/messages");
    }

    #[tokio::test]
    async fn client_timeout_bounds_a_stalled_provider() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and never answer.
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let svc = AIService::new(
            "key".into(),
            "model".into(),
            format!("http://{}", addr),
            16,
            build_http_client(Duration::from_millis(300)).unwrap(),
        );

        let started = std::time::Instant::now();
        let result = svc
            .generate(PromptPair {
                system: "sys".into(),
                user: "hello".into(),
            })
            .await;

        match result {
            Err(Error::Reqwest(err)) => assert!(err.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other),
        }
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
