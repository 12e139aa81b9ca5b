use std::fmt;

use reqwest::StatusCode;
use tracing::info;
use uuid::Uuid;

use super::client::{failure_detail, Auth, PlatformClient};
use super::credentials::Credentials;
use super::types::{CreatedResponse, InviteRequest, ResponsePayload, SurveyPayload};
use crate::error::{Error, Result};
use crate::generate::types::{Response, Survey, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub surveys: usize,
    pub responses: usize,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} users, {} surveys, {} responses",
            self.users, self.surveys, self.responses
        )
    }
}

/// Pushes generated records into one workspace. Every call is a single attempt.
pub struct Seeder<'a> {
    client: &'a PlatformClient,
    credentials: Credentials,
}

impl<'a> Seeder<'a> {
    pub fn new(client: &'a PlatformClient, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    fn auth(&self) -> Auth<'_> {
        Auth::ApiKey(&self.credentials.api_key)
    }

    /// Invites `user`; an existing membership counts as success.
    pub fn create_user(&self, user: &User) -> Result<String> {
        let path = format!(
            "/api/v1/workspaces/{}/members/invite",
            self.credentials.workspace_id
        );
        let response = self.client.post(
            &path,
            self.auth(),
            &InviteRequest {
                email: &user.email,
                name: &user.name,
                role: user.role.as_str(),
            },
        )?;
        let status = response.status();
        if status.is_success() {
            return Ok(user.email.clone());
        }
        let detail = failure_detail(response);
        if status == StatusCode::CONFLICT || detail.to_lowercase().contains("already") {
            info!("  {} is already a member", user.email);
            return Ok(user.email.clone());
        }
        Err(Error::UserCreation {
            email: user.email.clone(),
            detail,
        })
    }

    pub fn create_survey(&self, survey: &Survey) -> Result<String> {
        let path = format!("/api/v1/workspaces/{}/surveys", self.credentials.workspace_id);
        let response = self
            .client
            .post(&path, self.auth(), &SurveyPayload::from(survey))?;
        let failed = |detail: String| Error::SurveyCreation {
            name: survey.name.clone(),
            detail,
        };
        if !response.status().is_success() {
            return Err(failed(failure_detail(response)));
        }
        let created: CreatedResponse = response
            .json()
            .map_err(|e| failed(format!("unreadable response: {e}")))?;
        created
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| failed("response did not contain an id".to_string()))
    }

    /// Records one finished anonymous response. Falls back to a local id when
    /// the platform does not return one.
    pub fn create_response(&self, survey_id: &str, response: &Response) -> Result<String> {
        let reply = self.client.post(
            "/api/v1/responses",
            self.auth(),
            &ResponsePayload {
                survey_id,
                person_id: Uuid::new_v4().to_string(),
                data: &response.data,
                finished: true,
            },
        )?;
        if !reply.status().is_success() {
            return Err(Error::ResponseCreation {
                survey_id: survey_id.to_string(),
                detail: failure_detail(reply),
            });
        }
        let created: CreatedResponse = reply.json().unwrap_or(CreatedResponse { id: None });
        Ok(created
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string()))
    }

    pub fn seed_all(&self, users: &[User], surveys: &[Survey]) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        info!("Setting up users...");
        for user in users {
            self.create_user(user)?;
            report.users += 1;
            info!("  Created user: {}", user.email);
        }

        info!("Creating surveys...");
        for survey in surveys {
            let survey_id = self.create_survey(survey)?;
            report.surveys += 1;
            info!("  Created survey: {} (ID: {survey_id})", survey.name);
            for response in &survey.responses {
                self.create_response(&survey_id, response)?;
                report.responses += 1;
            }
            info!("    Added {} responses", survey.responses.len());
        }
        Ok(report)
    }
}
