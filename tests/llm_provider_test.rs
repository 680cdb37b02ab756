// ABOUTME: Integration tests for the OpenAI-compatible provider against a local HTTP stub
// ABOUTME: Verifies request shape, auth headers, status mapping, and provider fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_health_risk::config::{LlmConfig, LlmProviderType, NarrativeConfig, ProviderSettings};
use pierre_health_risk::errors::ErrorCode;
use pierre_health_risk::llm::{
    ChatMessage, ChatRequest, FallbackChatProvider, LlmProvider, OpenAiCompatibleConfig,
    OpenAiCompatibleProvider,
};
use pierre_health_risk::narrative::{LlmNarrativeAdapter, NarrativeAdapter, NarrativeRequest};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

const COMPLETION: &str = r#"{
    "model": "llama3.2",
    "choices": [{"message": {"role": "assistant", "content": "Walk 30 minutes daily."}, "finish_reason": "stop"}],
    "usage": {"prompt_tokens": 42, "completion_tokens": 6, "total_tokens": 48}
}"#;

/// Serve canned responses, one per connection, and forward each raw request
async fn stub_server(responses: Vec<(u16, &'static str)>) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            tx.send(request).ok();

            let reason = match status {
                200 => "OK",
                401 => "Unauthorized",
                429 => "Too Many Requests",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
    });

    (format!("http://{addr}/v1"), rx)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 4096];
    loop {
        let read = socket.read(&mut chunk).await.unwrap();
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&buffer);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buffer.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn provider(kind: LlmProviderType, base_url: &str, api_key: Option<&str>) -> OpenAiCompatibleProvider {
    let settings = ProviderSettings {
        base_url: base_url.to_owned(),
        model: "llama3.2".to_owned(),
        api_key: api_key.map(str::to_owned),
    };
    OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::for_provider(kind, &settings)).unwrap()
}

fn request() -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system("You are a preventive medicine specialist."),
        ChatMessage::user("Patient Profile:"),
    ])
    .with_max_tokens(300)
}

#[tokio::test]
async fn test_completion_round_trip() {
    let (base_url, mut requests) = stub_server(vec![(200, COMPLETION)]).await;
    let provider = provider(LlmProviderType::Ollama, &base_url, None);

    let response = provider.complete(&request()).await.unwrap();
    assert_eq!(response.content, "Walk 30 minutes daily.");
    assert_eq!(response.usage.unwrap().total_tokens, 48);

    let raw = requests.recv().await.unwrap();
    assert!(raw.starts_with("POST /v1/chat/completions"));
    assert!(raw.contains(r#""model":"llama3.2""#));
    assert!(raw.contains(r#""max_tokens":300"#));
    assert!(raw.contains(r#""stream":false"#));
    assert!(!raw.to_ascii_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn test_openrouter_sends_key_and_attribution() {
    let (base_url, mut requests) = stub_server(vec![(200, COMPLETION)]).await;
    let provider = provider(LlmProviderType::OpenRouter, &base_url, Some("sk-or-test"));

    provider.complete(&request()).await.unwrap();

    let raw = requests.recv().await.unwrap().to_ascii_lowercase();
    assert!(raw.contains("authorization: bearer sk-or-test"));
    assert!(raw.contains("x-title: pierre health risk"));
    assert!(raw.contains("http-referer:"));
}

#[tokio::test]
async fn test_status_codes_map_to_error_codes() {
    let (base_url, _requests) = stub_server(vec![
        (401, r#"{"error":{"message":"invalid key"}}"#),
        (429, r#"{"error":{"message":"slow down"}}"#),
    ])
    .await;
    let provider = provider(LlmProviderType::Gemini, &base_url, Some("bad"));

    let auth = provider.complete(&request()).await.unwrap_err();
    assert_eq!(auth.code, ErrorCode::ExternalAuthFailed);
    assert!(auth.message.contains("invalid key"));

    let limited = provider.complete(&request()).await.unwrap_err();
    assert_eq!(limited.code, ErrorCode::ExternalRateLimited);
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = provider(LlmProviderType::Ollama, &format!("http://{addr}/v1"), None);
    let err = provider.complete(&request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_fallback_chain_reaches_second_provider() {
    let (failing_url, _) = stub_server(vec![(503, "overloaded")]).await;
    let (working_url, _) = stub_server(vec![(200, COMPLETION)]).await;

    let settings = |base_url: &str, api_key: Option<&str>| ProviderSettings {
        base_url: base_url.to_owned(),
        model: "test-model".to_owned(),
        api_key: api_key.map(str::to_owned),
    };
    let config = LlmConfig {
        primary: LlmProviderType::Gemini,
        ollama: settings(&working_url, None),
        gemini: settings(&failing_url, Some("g-key")),
        openrouter: settings("http://127.0.0.1:9/v1", None),
    };

    let chain = FallbackChatProvider::from_config(&config).unwrap();
    assert_eq!(chain.providers().count(), 2);

    let adapter = LlmNarrativeAdapter::new(Arc::new(chain), &NarrativeConfig::default());
    let plan = adapter
        .narrate(&NarrativeRequest {
            summary: "Patient Profile:".to_owned(),
            max_words: 200,
        })
        .await
        .unwrap();
    assert_eq!(plan, "Walk 30 minutes daily.");
}
