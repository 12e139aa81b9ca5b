//! In-process stand-in for the Formbricks API and the completion endpoint.
//!
//! The server runs on its own thread with a current-thread tokio runtime so
//! that tests can drive it with the blocking client.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const SESSION_TOKEN: &str = "session-token";
pub const API_KEY: &str = "fbk-test-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

struct MockState {
    requests: Vec<RecordedRequest>,
    health_status: u16,
    signup_status: u16,
    signin_status: u16,
    api_key_status: u16,
    survey_status: u16,
    me_status: u16,
    invite_conflict_status: u16,
    omit_session: bool,
    omit_api_key: bool,
    survey_reply: Option<String>,
    workspaces: Vec<String>,
    members: HashSet<String>,
    surveys_created: u32,
    responses_created: u32,
    omit_response_ids: bool,
    completion: String,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            health_status: 200,
            signup_status: 201,
            signin_status: 200,
            api_key_status: 201,
            survey_status: 201,
            me_status: 200,
            invite_conflict_status: 400,
            omit_session: false,
            omit_api_key: false,
            survey_reply: None,
            workspaces: vec!["ws-1".to_string()],
            members: HashSet::new(),
            surveys_created: 0,
            responses_created: 0,
            omit_response_ids: false,
            completion: "[]".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct MockPlatform {
    pub base_url: String,
    state: Arc<Mutex<MockState>>,
}

/// A URL on which nothing is listening.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

impl MockPlatform {
    pub fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.set_nonblocking(true).expect("nonblocking");
        let addr = listener.local_addr().expect("addr");
        let mock = Self {
            base_url: format!("http://{addr}"),
            state: Arc::new(Mutex::new(MockState::default())),
        };
        let app = Router::new().fallback(handle).with_state(mock.clone());
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("listener");
                axum::serve(listener, app).await.expect("serve");
            });
        });
        mock
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state")
    }

    pub fn set_health_status(&self, status: u16) {
        self.state().health_status = status;
    }

    pub fn set_signup_status(&self, status: u16) {
        self.state().signup_status = status;
    }

    pub fn set_signin_status(&self, status: u16) {
        self.state().signin_status = status;
    }

    pub fn set_api_key_status(&self, status: u16) {
        self.state().api_key_status = status;
    }

    pub fn set_survey_status(&self, status: u16) {
        self.state().survey_status = status;
    }

    pub fn set_me_status(&self, status: u16) {
        self.state().me_status = status;
    }

    /// Status for a repeated invite. Anything but 400 is sent without the
    /// "already a member" body.
    pub fn set_invite_conflict_status(&self, status: u16) {
        self.state().invite_conflict_status = status;
    }

    /// Successful signup and signin replies leave out `session`.
    pub fn set_omit_session(&self, omit: bool) {
        self.state().omit_session = omit;
    }

    pub fn set_omit_api_key(&self, omit: bool) {
        self.state().omit_api_key = omit;
    }

    /// Raw body of a successful survey create, replacing `{"id": "survey-N"}`.
    pub fn set_survey_reply(&self, body: &str) {
        self.state().survey_reply = Some(body.to_string());
    }

    pub fn set_workspaces(&self, ids: &[&str]) {
        self.state().workspaces = ids.iter().map(|id| id.to_string()).collect();
    }

    pub fn set_omit_response_ids(&self, omit: bool) {
        self.state().omit_response_ids = omit;
    }

    pub fn set_completion(&self, content: &str) {
        self.state().completion = content.to_string();
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.state()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn bodies(&self, path: &str) -> Vec<Value> {
        self.state()
            .requests
            .iter()
            .filter(|r| r.path == path)
            .map(|r| r.body.clone())
            .collect()
    }

    pub fn last_header(&self, name: &str) -> Option<String> {
        self.state()
            .requests
            .last()
            .and_then(|r| r.headers.get(name).cloned())
    }
}

fn reply(status: u16, body: Value) -> Response {
    let code = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (code, Json(body)).into_response()
}

fn text(status: u16, body: &str) -> Response {
    let code = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (code, body.to_string()).into_response()
}

fn session_body(omit: bool) -> Value {
    if omit {
        json!({ "user": { "id": "user-1" } })
    } else {
        json!({ "session": SESSION_TOKEN })
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

async fn handle(
    State(mock): State<MockPlatform>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let header_map = headers
        .iter()
        .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
        .collect::<HashMap<String, String>>();
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let mut s = mock.state();
    s.requests.push(RecordedRequest {
        method: method.as_str().to_string(),
        path: path.clone(),
        headers: header_map.clone(),
        body: payload.clone(),
    });

    let bearer_ok =
        header_map.get("authorization").map(String::as_str) == Some("Bearer session-token");
    let key_ok = header_map.get("x-api-key").map(String::as_str) == Some(API_KEY);

    match (method.as_str(), path.as_str()) {
        ("GET", "/api/health") => reply(s.health_status, json!({ "status": "ok" })),
        ("POST", "/api/auth/signup") => {
            if is_success(s.signup_status) {
                reply(s.signup_status, session_body(s.omit_session))
            } else {
                text(s.signup_status, "User with this email already exists")
            }
        }
        ("POST", "/api/auth/signin") => {
            if is_success(s.signin_status) {
                reply(s.signin_status, session_body(s.omit_session))
            } else {
                text(s.signin_status, "Invalid credentials")
            }
        }
        ("GET", "/api/v1/me") if bearer_ok && !is_success(s.me_status) => {
            text(s.me_status, "Internal error")
        }
        ("GET", "/api/v1/me") if bearer_ok => {
            let workspaces = s
                .workspaces
                .iter()
                .map(|id| json!({ "id": id, "name": "Seed Workspace" }))
                .collect::<Vec<Value>>();
            reply(200, json!({ "id": "user-1", "workspaces": workspaces }))
        }
        ("POST", "/api/v1/responses") if key_ok => {
            s.responses_created += 1;
            if s.omit_response_ids {
                reply(201, json!({}))
            } else {
                reply(201, json!({ "id": format!("response-{}", s.responses_created) }))
            }
        }
        ("POST", "/chat/completions") => reply(
            200,
            json!({ "choices": [{ "message": { "role": "assistant", "content": s.completion } }] }),
        ),
        ("POST", p) if p.starts_with("/api/v1/workspaces/") => {
            let rest = p.trim_start_matches("/api/v1/workspaces/");
            let (_, action) = rest.split_once('/').unwrap_or((rest, ""));
            match action {
                "api-keys" if bearer_ok => {
                    if is_success(s.api_key_status) && s.omit_api_key {
                        reply(s.api_key_status, json!({ "label": "Seed API Key" }))
                    } else if is_success(s.api_key_status) {
                        reply(s.api_key_status, json!({ "apiKey": API_KEY }))
                    } else {
                        text(s.api_key_status, "Forbidden")
                    }
                }
                "members/invite" if key_ok => {
                    let email = payload["email"].as_str().unwrap_or_default().to_lowercase();
                    if s.members.insert(email) {
                        reply(201, json!({ "invited": true }))
                    } else if s.invite_conflict_status == 400 {
                        text(400, "User is already a member of this workspace")
                    } else {
                        text(s.invite_conflict_status, "Conflict")
                    }
                }
                "surveys" if key_ok => {
                    let raw_reply = s.survey_reply.clone();
                    if let (true, Some(body)) = (is_success(s.survey_status), raw_reply) {
                        text(s.survey_status, &body)
                    } else if is_success(s.survey_status) {
                        s.surveys_created += 1;
                        reply(201, json!({ "id": format!("survey-{}", s.surveys_created) }))
                    } else {
                        text(s.survey_status, "Invalid survey payload")
                    }
                }
                "api-keys" | "members/invite" | "surveys" => text(401, "Unauthorized"),
                _ => text(404, "Not found"),
            }
        }
        ("GET", "/api/v1/me") | ("POST", "/api/v1/responses") => text(401, "Unauthorized"),
        _ => text(404, "Not found"),
    }
}
