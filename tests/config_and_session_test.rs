use campus_portal::config::file::FileConfig;
use campus_portal::config::{CliConfig, Command, Settings, DEFAULT_BASE_URL};
use campus_portal::domain::model::{Role, Session};
use campus_portal::domain::ports::TokenStore;
use campus_portal::FileTokenStore;
use campus_portal::utils::validation::Validate;
use tempfile::TempDir;

fn cli_with(config: Option<String>) -> CliConfig {
    CliConfig {
        base_url: None,
        config,
        token_file: None,
        timeout_seconds: None,
        verbose: false,
        log_json: false,
        command: Command::Dashboard,
    }
}

#[test]
fn resolves_settings_from_a_toml_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("portal.toml");
    std::fs::write(
        &config_path,
        r#"
[backend]
base_url = "http://portal.example.com:8000"
timeout_seconds = 7

[session]
token_file = "custom-session.json"
"#,
    )
    .unwrap();

    let cli = cli_with(Some(config_path.to_str().unwrap().to_string()));
    let settings = Settings::resolve(&cli).unwrap();

    assert_eq!(settings.base_url, "http://portal.example.com:8000");
    assert_eq!(settings.timeout_seconds, 7);
    assert_eq!(settings.token_path, "custom-session.json");
    assert!(settings.validate().is_ok());
}

#[test]
fn defaults_are_used_without_a_config_file() {
    let settings = Settings::resolve(&cli_with(None)).unwrap();
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let cli = cli_with(Some("/definitely/not/here.toml".to_string()));
    assert!(Settings::resolve(&cli).is_err());
}

#[test]
fn env_placeholders_resolve_inside_the_config_file() {
    std::env::set_var("PORTAL_IT_BASE_URL", "http://env-resolved.example.com");
    let config = FileConfig::from_toml_str(
        r#"
[backend]
base_url = "${PORTAL_IT_BASE_URL}"
"#,
    )
    .unwrap();
    std::env::remove_var("PORTAL_IT_BASE_URL");

    assert_eq!(
        config.backend.unwrap().base_url.as_deref(),
        Some("http://env-resolved.example.com")
    );
}

#[test]
fn login_session_survives_a_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("session.json"));

    store
        .save(&Session {
            token: "issued".to_string(),
            role: Role::Admin,
        })
        .unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.token, "issued");
    assert_eq!(loaded.role, Role::Admin);

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}
