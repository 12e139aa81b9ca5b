//! Synthetic survey and user content.
//!
//! With a provider key the records come from one chat completion per call;
//! without one, or when the call or its output is unusable, the fixed
//! fallback sets are returned instead. Generation never fails.

pub mod fallback;
pub mod llm;
pub mod types;

use tracing::{info, warn};

use crate::config::ProviderConfig;
use crate::error::Result;
use llm::{parse_records, CompletionClient, SURVEYS_PROMPT, USERS_PROMPT};
use types::{validate_surveys, validate_users, Survey, User};

pub const SURVEY_COUNT: usize = 5;
pub const USER_COUNT: usize = 10;

pub struct ContentGenerator {
    client: Option<CompletionClient>,
}

impl ContentGenerator {
    /// A provider whose client cannot be built is treated as absent.
    pub fn new(provider: Option<&ProviderConfig>) -> Self {
        let client = provider
            .cloned()
            .and_then(|settings| match CompletionClient::new(settings) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!("Unable to build the language model client: {e}. Using built-in content.");
                    None
                }
            });
        Self { client }
    }

    pub fn surveys(&self) -> Vec<Survey> {
        self.generate(
            "surveys",
            SURVEYS_PROMPT,
            SURVEY_COUNT,
            validate_surveys,
            fallback::surveys,
        )
    }

    pub fn users(&self) -> Vec<User> {
        self.generate(
            "users",
            USERS_PROMPT,
            USER_COUNT,
            validate_users,
            fallback::users,
        )
    }

    fn generate<T: serde::de::DeserializeOwned>(
        &self,
        what: &str,
        prompt: &str,
        expected: usize,
        validate: fn(&[T]) -> Result<()>,
        fallback: fn() -> Vec<T>,
    ) -> Vec<T> {
        let Some(client) = &self.client else {
            warn!("OPENAI_API_KEY not set; using built-in {what}");
            return fallback();
        };
        let attempt = client.complete(prompt).and_then(|raw| {
            let records = parse_records::<T>(&raw)?;
            validate(&records)?;
            Ok(records)
        });
        match attempt {
            Ok(records) => {
                if records.len() != expected {
                    warn!(
                        "model returned {} {what}, expected {expected}",
                        records.len()
                    );
                }
                info!("Generated {} {what} with the language model", records.len());
                records
            }
            Err(e) => {
                warn!("LLM generation of {what} failed: {e}. Using built-in {what} instead.");
                fallback()
            }
        }
    }
}
