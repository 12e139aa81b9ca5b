use tracing::info;

use super::{surveys_path, users_path};
use crate::config::Config;
use crate::error::Result;
use crate::generate::types::{validate_surveys, validate_users, Survey, User};
use crate::platform::{Bootstrapper, CredentialStore, PlatformClient, SeedReport, Seeder};
use crate::util::fs::read_json;

/// Reads `data/*.json`, bootstraps credentials, and pushes everything to the platform.
pub fn run(config: &Config) -> Result<SeedReport> {
    info!("Seeding Formbricks with generated data...");
    let surveys: Vec<Survey> = read_json(&surveys_path(config))?;
    let users: Vec<User> = read_json(&users_path(config))?;
    validate_surveys(&surveys)?;
    validate_users(&users)?;

    let client = PlatformClient::new(config)?;
    let credentials = Bootstrapper::new(
        &client,
        CredentialStore::new(config.credentials_path()),
        config.health,
    )
    .bootstrap()?;

    let report = Seeder::new(&client, credentials).seed_all(&users, &surveys)?;
    info!("Seeding complete! Created {report}");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::config::{Config, PollPolicy};
    use crate::error::Error;
    use crate::testing::{MockPlatform, API_KEY};
    use std::time::Duration;

    fn config(base_url: &str, dir: &std::path::Path) -> Config {
        let mut config = Config::new(base_url, dir);
        config.health = PollPolicy {
            attempts: 3,
            interval: Duration::from_millis(10),
            timeout: Duration::from_secs(1),
        };
        config
    }

    #[test]
    fn fresh_environment_end_to_end() {
        let mock = MockPlatform::start();
        let tmp = tempfile::tempdir().expect("tmp");
        let cfg = config(&mock.base_url, tmp.path());

        crate::commands::generate::run(&cfg).expect("generate");
        let report = run(&cfg).expect("seed");

        assert_eq!(report.to_string(), "10 users, 5 surveys, 5 responses");
        assert_eq!(mock.count("POST", "/api/auth/signup"), 1);
        assert_eq!(mock.count("GET", "/api/v1/me"), 1);
        assert_eq!(mock.count("POST", "/api/v1/workspaces/ws-1/api-keys"), 1);
        assert_eq!(mock.count("POST", "/api/v1/workspaces/ws-1/members/invite"), 10);
        assert_eq!(mock.count("POST", "/api/v1/workspaces/ws-1/surveys"), 5);
        assert_eq!(mock.count("POST", "/api/v1/responses"), 5);
        assert_eq!(
            std::fs::read_to_string(tmp.path().join(".formbricks_credentials")).expect("creds"),
            format!("{API_KEY}\nws-1")
        );
    }

    #[test]
    fn rerun_reuses_credentials_and_tolerates_existing_members() {
        let mock = MockPlatform::start();
        let tmp = tempfile::tempdir().expect("tmp");
        let cfg = config(&mock.base_url, tmp.path());

        crate::commands::generate::run(&cfg).expect("generate");
        run(&cfg).expect("first seed");
        let report = run(&cfg).expect("second seed");

        assert_eq!(report.users, 10);
        assert_eq!(mock.count("POST", "/api/auth/signup"), 1);
        assert_eq!(mock.count("POST", "/api/v1/workspaces/ws-1/members/invite"), 20);
    }

    #[test]
    fn missing_data_fails_before_any_request() {
        let mock = MockPlatform::start();
        let tmp = tempfile::tempdir().expect("tmp");
        let err = run(&config(&mock.base_url, tmp.path())).unwrap_err();
        assert!(matches!(err, Error::MissingData(ref p) if p.ends_with("surveys.json")));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn invalid_data_file_is_rejected() {
        let mock = MockPlatform::start();
        let tmp = tempfile::tempdir().expect("tmp");
        let cfg = config(&mock.base_url, tmp.path());
        crate::commands::generate::run(&cfg).expect("generate");
        std::fs::write(
            tmp.path().join("data").join("users.json"),
            r#"[{"email":"a@x.com","name":"A","role":"owner"},{"email":"a@x.com","name":"B","role":"manager"}]"#,
        )
        .expect("overwrite users");
        let err = run(&cfg).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(mock.requests().is_empty());
    }
}
