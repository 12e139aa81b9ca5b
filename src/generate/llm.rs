use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::{Error, Result};

pub const SURVEYS_PROMPT: &str = r#"Generate exactly 5 unique, realistic survey objects for a customer feedback platform.
Each survey must have:
- name: string
- description: string
- type: "form" or "survey"
- questions: array of question objects, each with:
  - id: string (uuid format, unique within the survey)
  - type: "openText", "multipleChoice", "rating" or "nps"
  - question: string
  - choices: non-empty array of strings (only for multipleChoice)
  - scale: positive integer (only for rating and nps)
- responses: array with at least 1 realistic response object, each containing:
  - data: object whose keys are ids of questions in the same survey and whose values are answers

Make the surveys realistic: Product feedback, Customer satisfaction, NPS survey, Feature request survey, Support quality survey.
Return ONLY a valid JSON array, no markdown formatting."#;

pub const USERS_PROMPT: &str = r#"Generate exactly 10 unique, realistic user objects for a feedback platform.
Each user must have:
- email: string (realistic, unique email address)
- name: string (realistic full name)
- role: "manager" or "owner"

Make them diverse and realistic names/emails.
Return ONLY a valid JSON array, no markdown formatting."#;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: String,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Chat-completion client for an OpenAI-compatible endpoint.
pub struct CompletionClient {
    http: Client,
    settings: ProviderConfig,
}

impl CompletionClient {
    pub fn new(settings: ProviderConfig) -> Result<Self> {
        let http = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { http, settings })
    }

    /// Sends a single user message and returns the first choice's text.
    pub fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.settings.base_url);
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
        };
        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.settings.api_key))
            .json(&body)
            .send()
            .map_err(|e| Error::Provider(format!("request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(Error::Provider(format!(
                "request failed with status {}",
                response.status()
            )));
        }
        let reply: ChatResponse = response
            .json()
            .map_err(|e| Error::Provider(format!("unable to parse reply: {e}")))?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Provider("reply had no choices".to_string()))
    }
}

fn strip_fences(raw: &str) -> &str {
    let fence = Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("regex");
    match fence.captures(raw).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => raw.trim(),
    }
}

/// Parses a model reply as a JSON array of records.
pub fn parse_records<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(strip_fences(raw))
        .map_err(|e| Error::Provider(format!("reply is not a valid record array: {e}")))
}
