use anyhow::Result;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::model::config::AiConfig;

#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: String,
}

pub fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Blocking call against an OpenAI-compatible endpoint. The caller is
/// expected to run this off the main thread.
pub fn request_advice(config: &AiConfig, system_prompt: &str, user_query: &str) -> Result<String> {
    let client = Client::new();

    let req = ChatCompletionRequest {
        model: config.model.clone(),
        temperature: 0.7,
        max_tokens: 1024,
        messages: vec![
            ChatMessage {
                role: "system".into(),
                content: system_prompt.into(),
            },
            ChatMessage {
                role: "user".into(),
                content: user_query.into(),
            },
        ],
    };

    let resp = client
        .post(chat_completions_url(&config.base_url))
        .bearer_auth(config.api_key.trim())
        .json(&req)
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        anyhow::bail!("HTTP {}", status.as_u16());
    }

    let body = resp.json::<ChatCompletionResponse>()?;
    let Some(choice) = body.choices.first() else {
        anyhow::bail!("响应缺少内容");
    };
    Ok(choice.message.content.clone())
}
