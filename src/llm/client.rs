use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::Error;
use crate::llm::prompt;

/// The seam between workflow logic and the remote completion service.
/// Tests substitute a canned implementation; production uses
/// [`CompletionClient`].
pub trait Completion {
    fn complete(&self, user_prompt: &str) -> Result<String, Error>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat-completions request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    temperature: f32,
}

/// OpenRouter chat-completions client. One synchronous POST per call, fixed
/// 60s timeout, no retries here (retry policy lives in the reflection loop).
pub struct CompletionClient {
    cfg: Config,
    http: reqwest::blocking::Client,
}

impl CompletionClient {
    pub fn new(cfg: Config) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self { cfg, http })
    }
}

impl Completion for CompletionClient {
    fn complete(&self, user_prompt: &str) -> Result<String, Error> {
        // Credential check comes first; no network I/O without a key.
        let api_key = self.cfg.api_key.as_deref().ok_or(Error::MissingCredential)?;

        let system = prompt::system_prompt();
        let body = ChatRequest {
            model: &self.cfg.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            stream: false,
            temperature: self.cfg.temperature,
        };

        let resp = self
            .http
            .post(&self.cfg.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("X-Title", "LLM-based API Testing")
            .json(&body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(_) => return Err(Error::MalformedResponse(text)),
        };

        json.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .ok_or(Error::MalformedResponse(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The endpoint resolves to nothing routable; if the credential check ever
    // slipped behind the network call this would surface as Transport instead.
    #[test]
    fn missing_credential_short_circuits_before_any_network_call() {
        let cfg = Config {
            api_key: None,
            endpoint: "http://127.0.0.1:1/api/v1/chat/completions".into(),
            ..Config::default()
        };
        let client = CompletionClient::new(cfg).unwrap();

        match client.complete("hello") {
            Err(Error::MissingCredential) => {}
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn request_body_serializes_to_chat_completions_shape() {
        let system = prompt::system_prompt();
        let body = ChatRequest {
            model: "openai/gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: "write tests",
                },
            ],
            stream: false,
            temperature: 0.0,
        };

        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["model"], "openai/gpt-4o-mini");
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["role"], "user");
        assert_eq!(v["messages"][1]["content"], "write tests");
        assert_eq!(v["stream"], false);
        assert_eq!(v["temperature"], 0.0);
    }

    #[test]
    fn content_pointer_matches_chat_completions_shape() {
        let json: Value = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  hi  "}}]}"#,
        )
        .unwrap();
        let content = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(str::trim);
        assert_eq!(content, Some("hi"));
    }
}
