use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "Manager")]
    Manager,
    #[serde(alias = "Owner")]
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Owner => "owner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyType {
    Form,
    Survey,
}

/// Question shape, discriminated by the `type` field on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestionKind {
    OpenText,
    MultipleChoice { choices: Vec<String> },
    Rating { scale: u32 },
    Nps { scale: u32 },
}

impl QuestionKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::OpenText => "openText",
            Self::MultipleChoice { .. } => "multipleChoice",
            Self::Rating { .. } => "rating",
            Self::Nps { .. } => "nps",
        }
    }

    pub fn choices(&self) -> Option<&[String]> {
        match self {
            Self::MultipleChoice { choices } => Some(choices),
            _ => None,
        }
    }

    pub fn scale(&self) -> Option<u32> {
        match self {
            Self::Rating { scale } | Self::Nps { scale } => Some(*scale),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// A question with a fresh v4 id.
    pub fn new(question: &str, kind: QuestionKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            kind,
        }
    }
}

/// One answer value. Anything that is not a number, text or list of texts is
/// carried as raw JSON so responses reach the platform unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Integer(i64),
    Unsigned(u64),
    Decimal(f64),
    Bool(bool),
    Text(String),
    Choices(Vec<String>),
    Value(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub data: BTreeMap<String, Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub survey_type: SurveyType,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl Survey {
    /// Checks question shapes and that every response only answers known questions.
    pub fn validate(&self) -> Result<()> {
        let mut ids: HashSet<&str> = HashSet::new();
        for q in &self.questions {
            if q.id.trim().is_empty() {
                return Err(invalid(&self.name, "question with an empty id"));
            }
            if !ids.insert(q.id.as_str()) {
                return Err(invalid(&self.name, &format!("duplicate question id {}", q.id)));
            }
            match &q.kind {
                QuestionKind::MultipleChoice { choices } if choices.is_empty() => {
                    return Err(invalid(
                        &self.name,
                        &format!("multipleChoice question {} has no choices", q.id),
                    ));
                }
                QuestionKind::Rating { scale } | QuestionKind::Nps { scale } if *scale == 0 => {
                    return Err(invalid(
                        &self.name,
                        &format!("{} question {} has no scale", q.kind.type_name(), q.id),
                    ));
                }
                _ => {}
            }
        }
        for response in &self.responses {
            if let Some(unknown) = response.data.keys().find(|k| !ids.contains(k.as_str())) {
                return Err(invalid(
                    &self.name,
                    &format!("response references unknown question {unknown}"),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(survey: &str, detail: &str) -> Error {
    Error::Validation(format!("survey '{survey}': {detail}"))
}

pub fn validate_surveys(surveys: &[Survey]) -> Result<()> {
    surveys.iter().try_for_each(Survey::validate)
}

pub fn validate_users(users: &[User]) -> Result<()> {
    let mut seen: HashSet<String> = HashSet::new();
    for user in users {
        let email = user.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::Validation(format!(
                "user '{}' has an invalid email '{}'",
                user.name, user.email
            )));
        }
        if !seen.insert(email) {
            return Err(Error::Validation(format!(
                "duplicate user email {}",
                user.email
            )));
        }
    }
    Ok(())
}
