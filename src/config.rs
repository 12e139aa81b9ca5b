use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROVIDER_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_COMPOSE_BIN: &str = "docker-compose";

pub const CREDENTIALS_FILE: &str = ".formbricks_credentials";
pub const DOCKER_DIR: &str = "docker";
pub const DATA_DIR: &str = "data";

/// How many times, and how far apart, to probe `/api/health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub attempts: u32,
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            attempts: 30,
            interval: Duration::from_secs(2),
            timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub provider: Option<ProviderConfig>,
    pub work_dir: PathBuf,
    pub compose_bin: String,
    pub health: PollPolicy,
    pub request_timeout: Duration,
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trim_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

impl Config {
    /// Defaults for a platform at `base_url`, rooted at `work_dir`, with no provider.
    pub fn new(base_url: &str, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: trim_url(base_url),
            provider: None,
            work_dir: work_dir.into(),
            compose_bin: DEFAULT_COMPOSE_BIN.to_string(),
            health: PollPolicy::default(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Reads `FORMBRICKS_URL`, `FORMBRICKS_COMPOSE_BIN`, `OPENAI_API_KEY`,
    /// `OPENAI_BASE_URL` and `OPENAI_MODEL`. Blank values count as unset.
    pub fn from_env(work_dir: impl Into<PathBuf>) -> Self {
        let base_url = env_value("FORMBRICKS_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url, work_dir);
        if let Some(bin) = env_value("FORMBRICKS_COMPOSE_BIN") {
            config.compose_bin = bin;
        }
        config.provider = env_value("OPENAI_API_KEY").map(|api_key| ProviderConfig {
            api_key,
            base_url: trim_url(
                &env_value("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string()),
            ),
            model: env_value("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(60),
        });
        config
    }

    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }

    pub fn docker_dir(&self) -> PathBuf {
        self.work_dir.join(DOCKER_DIR)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.work_dir.join(DATA_DIR)
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.work_dir.join(CREDENTIALS_FILE)
    }
}
