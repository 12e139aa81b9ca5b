use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;

/// How a request authenticates against the platform.
#[derive(Clone, Copy, Debug)]
pub enum Auth<'a> {
    None,
    Session(&'a str),
    ApiKey(&'a str),
}

/// Thin wrapper over the blocking client, bound to one platform base URL.
pub struct PlatformClient {
    http: Client,
    base_url: String,
}

impl PlatformClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn get(&self, path: &str, auth: Auth<'_>) -> Result<Response> {
        let request = apply_auth(self.http.get(self.url(path)), auth);
        Ok(request.send()?)
    }

    pub fn post<T: Serialize + ?Sized>(&self, path: &str, auth: Auth<'_>, body: &T) -> Result<Response> {
        let request = apply_auth(self.http.post(self.url(path)), auth).json(body);
        Ok(request.send()?)
    }
}

fn apply_auth(
    request: reqwest::blocking::RequestBuilder,
    auth: Auth<'_>,
) -> reqwest::blocking::RequestBuilder {
    match auth {
        Auth::None => request,
        Auth::Session(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
        Auth::ApiKey(key) => request.header("x-api-key", key),
    }
}

/// `"<status>: <body>"` for a failed response, used in error details.
pub fn failure_detail(response: Response) -> String {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    if body.trim().is_empty() {
        status.to_string()
    } else {
        format!("{status}: {}", body.trim())
    }
}
