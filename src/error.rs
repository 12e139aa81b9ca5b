use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{command}` failed: {detail}")]
    Process { command: String, detail: String },

    #[error("Formbricks did not become healthy at {url} after {attempts} attempts")]
    StartupTimeout { url: String, attempts: u32 },

    #[error("Failed to connect to Formbricks at {url} after {attempts} attempts")]
    Connection { url: String, attempts: u32 },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("No workspaces found for the seed account")]
    NoWorkspace,

    #[error("Failed to create API key: {0}")]
    KeyCreation(String),

    #[error("Failed to create user {email}: {detail}")]
    UserCreation { email: String, detail: String },

    #[error("Failed to create survey '{name}': {detail}")]
    SurveyCreation { name: String, detail: String },

    #[error("Failed to create response for survey {survey_id}: {detail}")]
    ResponseCreation { survey_id: String, detail: String },

    #[error("Language model request failed: {0}")]
    Provider(String),

    #[error("Invalid generated data: {0}")]
    Validation(String),

    #[error("{} not found. Run `formbricks-cli formbricks generate` first.", .0.display())]
    MissingData(PathBuf),

    #[error("Unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Template render failed: {0}")]
    Template(#[from] tera::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
