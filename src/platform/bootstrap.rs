use reqwest::StatusCode;
use tracing::{debug, info};
use uuid::Uuid;

use super::client::{failure_detail, Auth, PlatformClient};
use super::credentials::{CredentialStore, Credentials};
use super::types::{
    ApiKeyRequest, ApiKeyResponse, MeResponse, SessionResponse, SigninRequest, SignupRequest,
};
use crate::config::PollPolicy;
use crate::error::{Error, Result};
use crate::lifecycle::health::wait_until_healthy;

pub const API_KEY_LABEL: &str = "Seed API Key";

enum State {
    Uninitialized,
    Provisioning { email: String, password: String },
    AccountCreated { session: String },
    WorkspaceResolved { session: String, workspace_id: String },
    Ready(Credentials),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Provisioning { .. } => "provisioning",
            Self::AccountCreated { .. } => "account-created",
            Self::WorkspaceResolved { .. } => "workspace-resolved",
            Self::Ready(_) => "ready",
        }
    }
}

/// Obtains seed credentials, reusing the persisted ones when present.
pub struct Bootstrapper<'a> {
    client: &'a PlatformClient,
    store: CredentialStore,
    preflight: PollPolicy,
}

fn is_created(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

impl<'a> Bootstrapper<'a> {
    pub fn new(client: &'a PlatformClient, store: CredentialStore, preflight: PollPolicy) -> Self {
        Self {
            client,
            store,
            preflight,
        }
    }

    pub fn bootstrap(&self) -> Result<Credentials> {
        info!("Initializing Formbricks API at {}...", self.client.base_url());
        let health_url = self.client.url("/api/health");
        if !wait_until_healthy(self.client.http(), &health_url, &self.preflight) {
            return Err(Error::Connection {
                url: health_url,
                attempts: self.preflight.attempts,
            });
        }
        info!("Connected to Formbricks");

        let mut state = State::Uninitialized;
        loop {
            state = match state {
                State::Ready(credentials) => return Ok(credentials),
                State::Uninitialized => self.load_or_provision()?,
                State::Provisioning { email, password } => {
                    let session = self.sign_up(&email, &password)?;
                    State::AccountCreated { session }
                }
                State::AccountCreated { session } => {
                    let workspace_id = self.first_workspace(&session)?;
                    info!("Workspace ID: {workspace_id}");
                    State::WorkspaceResolved {
                        session,
                        workspace_id,
                    }
                }
                State::WorkspaceResolved {
                    session,
                    workspace_id,
                } => {
                    let api_key = self.create_api_key(&session, &workspace_id)?;
                    info!("API key created");
                    let credentials = Credentials {
                        api_key,
                        workspace_id,
                    };
                    self.store.save(&credentials)?;
                    State::Ready(credentials)
                }
            };
            debug!("bootstrap state: {}", state.name());
        }
    }

    fn load_or_provision(&self) -> Result<State> {
        if let Some(credentials) = self.store.load()? {
            info!("Using existing credentials from {}", self.store.path().display());
            return Ok(State::Ready(credentials));
        }
        info!("Creating Formbricks seed account...");
        let tag = Uuid::new_v4().simple().to_string();
        let secret = Uuid::new_v4().simple().to_string();
        Ok(State::Provisioning {
            email: format!("seed-{}@formbricks.local", &tag[..8]),
            password: format!("Seed@{}", &secret[..16]),
        })
    }

    fn sign_up(&self, email: &str, password: &str) -> Result<String> {
        let response = self.client.post(
            "/api/auth/signup",
            Auth::None,
            &SignupRequest {
                email,
                password,
                invite_token: "",
            },
        )?;
        let status = response.status();
        if is_created(status) {
            info!("Account created: {email}");
            return session_from(response);
        }
        if status == StatusCode::CONFLICT {
            info!("Account already exists, signing in...");
            let response =
                self.client
                    .post("/api/auth/signin", Auth::None, &SigninRequest { email, password })?;
            if is_created(response.status()) {
                return session_from(response);
            }
            return Err(Error::Auth(format!(
                "signin failed: {}",
                failure_detail(response)
            )));
        }
        Err(Error::Auth(format!(
            "signup failed: {}",
            failure_detail(response)
        )))
    }

    fn first_workspace(&self, session: &str) -> Result<String> {
        let response = self.client.get("/api/v1/me", Auth::Session(session))?;
        if response.status() != StatusCode::OK {
            return Err(Error::Auth(format!(
                "failed to get user info: {}",
                failure_detail(response)
            )));
        }
        let me: MeResponse = response.json()?;
        me.workspaces
            .into_iter()
            .next()
            .map(|w| w.id)
            .ok_or(Error::NoWorkspace)
    }

    fn create_api_key(&self, session: &str, workspace_id: &str) -> Result<String> {
        let response = self.client.post(
            &format!("/api/v1/workspaces/{workspace_id}/api-keys"),
            Auth::Session(session),
            &ApiKeyRequest {
                label: API_KEY_LABEL,
            },
        )?;
        if !is_created(response.status()) {
            return Err(Error::KeyCreation(failure_detail(response)));
        }
        let body: ApiKeyResponse = response.json()?;
        body.api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::KeyCreation("response did not contain an apiKey".to_string()))
    }
}

fn session_from(response: reqwest::blocking::Response) -> Result<String> {
    let body: SessionResponse = response.json()?;
    body.session
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Auth("response did not contain a session".to_string()))
}
