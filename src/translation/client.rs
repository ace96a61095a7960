use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::error::{TranslationError, TranslationResult};
use super::prompt::build_system_prompt;

/// A single translation to perform.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_language: String,
    pub model: String,
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible chat-completion endpoints.
///
/// Holds no mutable state; a single instance can serve concurrent calls.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Performs a single translation round trip.
    ///
    /// Sends a system message naming the target language and a user message
    /// carrying the source text, awaits the (non-streaming) response, and
    /// returns the assistant's message content unmodified.
    ///
    /// # Errors
    ///
    /// - [`TranslationError::Configuration`] if no API key was provided;
    ///   checked before any network I/O.
    /// - [`TranslationError::RemoteService`] if the request cannot be sent
    ///   or the endpoint answers with a non-success status.
    /// - [`TranslationError::MalformedResponse`] if the body lacks the
    ///   expected message content.
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            TranslationError::Configuration(
                "No API key configured. Set the GROQ_API_KEY environment variable.".to_string(),
            )
        })?;

        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let system_prompt = build_system_prompt(&request.target_language);

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.source_text),
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                TranslationError::RemoteService(format!("failed to reach {url}: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            TranslationError::RemoteService(format!("failed to read response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(TranslationError::RemoteService(format!(
                "{url} returned status {status}: {body}"
            )));
        }

        parse_completion_response(&body)
    }
}

/// Extracts the assistant's message content from a chat-completion body.
fn parse_completion_response(body: &str) -> TranslationResult<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslationError::MalformedResponse(format!("invalid JSON: {e}")))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            TranslationError::MalformedResponse("no message content in response".to_string())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completion_response_with_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hallo"}}]}"#;
        assert_eq!(parse_completion_response(body).unwrap(), "Hallo");
    }

    #[test]
    fn test_parse_completion_response_extra_fields_ignored() {
        let body = r#"{"id":"chatcmpl-1","object":"chat.completion","choices":[{"index":0,"message":{"role":"assistant","content":"Bonjour"},"finish_reason":"stop"}],"usage":{"total_tokens":7}}"#;
        assert_eq!(parse_completion_response(body).unwrap(), "Bonjour");
    }

    #[test]
    fn test_parse_completion_response_takes_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"eins"}},{"message":{"content":"zwei"}}]}"#;
        assert_eq!(parse_completion_response(body).unwrap(), "eins");
    }

    #[test]
    fn test_parse_completion_response_unicode() {
        let body = r#"{"choices":[{"message":{"content":"こんにちは"}}]}"#;
        assert_eq!(parse_completion_response(body).unwrap(), "こんにちは");
    }

    #[test]
    fn test_parse_completion_response_no_choices() {
        let body = r#"{"choices":[]}"#;
        assert!(matches!(
            parse_completion_response(body),
            Err(TranslationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_completion_response_null_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert!(matches!(
            parse_completion_response(body),
            Err(TranslationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_completion_response_invalid_json() {
        assert!(matches!(
            parse_completion_response("not json"),
            Err(TranslationError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_translate_without_api_key_is_configuration_error() {
        // Port 9 is the discard service; nothing listens there in tests.
        // A connection attempt would surface as RemoteService instead.
        let client = TranslationClient::new("http://127.0.0.1:9".to_string(), None);
        let request = TranslationRequest {
            source_text: "hello".to_string(),
            target_language: "German".to_string(),
            model: "gemma2-9b-it".to_string(),
        };

        let err = client.translate(&request).await.unwrap_err();
        assert!(matches!(err, TranslationError::Configuration(_)));
    }
}
