use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::generate::types::{Answer, Question, QuestionKind, Survey, SurveyType};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub invite_token: &'a str,
}

#[derive(Serialize, Debug)]
pub struct SigninRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct SessionResponse {
    #[serde(default)]
    pub session: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct WorkspaceRef {
    pub id: String,
}

#[derive(Deserialize, Debug)]
pub struct MeResponse {
    #[serde(default)]
    pub workspaces: Vec<WorkspaceRef>,
}

#[derive(Serialize, Debug)]
pub struct ApiKeyRequest<'a> {
    pub label: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct InviteRequest<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub role: &'a str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LocalizedText {
    pub default: String,
}

impl LocalizedText {
    pub fn new(text: &str) -> Self {
        Self {
            default: text.to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChoicePayload {
    pub label: LocalizedText,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuestionPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: &'static str,
    pub headline: LocalizedText,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoicePayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl From<&Question> for QuestionPayload {
    fn from(q: &Question) -> Self {
        let choices = match &q.kind {
            QuestionKind::MultipleChoice { choices } => Some(
                choices
                    .iter()
                    .map(|c| ChoicePayload {
                        label: LocalizedText::new(c),
                    })
                    .collect(),
            ),
            _ => None,
        };
        Self {
            id: q.id.clone(),
            question_type: q.kind.type_name(),
            headline: LocalizedText::new(&q.question),
            required: true,
            choices,
            scale: q.kind.scale(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SurveyPayload<'a> {
    pub name: &'a str,
    pub description: &'a str,
    #[serde(rename = "type")]
    pub survey_type: SurveyType,
    pub questions: Vec<QuestionPayload>,
    pub status: &'static str,
}

impl<'a> From<&'a Survey> for SurveyPayload<'a> {
    fn from(survey: &'a Survey) -> Self {
        Self {
            name: &survey.name,
            description: &survey.description,
            survey_type: survey.survey_type,
            questions: survey.questions.iter().map(QuestionPayload::from).collect(),
            status: "active",
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload<'a> {
    pub survey_id: &'a str,
    pub person_id: String,
    pub data: &'a BTreeMap<String, Answer>,
    pub finished: bool,
}

/// Any create call that answers with the new record's id.
#[derive(Deserialize, Debug)]
pub struct CreatedResponse {
    #[serde(default)]
    pub id: Option<String>,
}
