//! Configuration loading from disk
//!
//! Round-trips a YAML config file through `Config::load`, including the
//! quick-action menu override and CLI endpoint precedence.

use newschat::cli::Cli;
use newschat::config::Config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, contents).expect("Failed to write test config");
    path.to_string_lossy().to_string()
}

fn cli(config: Option<String>, endpoint: Option<String>) -> Cli {
    Cli {
        config,
        endpoint,
        command: None,
    }
}

#[test]
fn test_load_full_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
service:
  base_url: http://news.internal:9000
  timeout_seconds: 10
session:
  greeting: "Welcome back!"
  user_id: analyst
  include_sources: false
  context_limit: 7
quick_actions:
  - label: Latest News
    actionId: latest_news
  - label: Sentiment Check
    actionId: sentiment_check
"#,
    );

    let config = Config::load(&path, &cli(None, None)).unwrap();
    config.validate().unwrap();

    assert_eq!(config.service.base_url, "http://news.internal:9000");
    assert_eq!(config.service.timeout_seconds, 10);
    assert_eq!(config.session.greeting, "Welcome back!");
    assert_eq!(config.session.user_id, "analyst");
    assert!(!config.session.include_sources);
    assert_eq!(config.session.context_limit, 7);
    assert_eq!(config.quick_actions.len(), 2);
    assert_eq!(config.quick_actions[0].label, "Latest News");
    assert_eq!(config.quick_actions[1].action_id, "sentiment_check");
}

#[test]
fn test_cli_endpoint_takes_precedence_over_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
service:
  base_url: http://news.internal:9000
"#,
    );

    let config = Config::load(
        &path,
        &cli(None, Some("http://localhost:4242".to_string())),
    )
    .unwrap();

    assert_eq!(config.service.base_url, "http://localhost:4242");
}

#[test]
fn test_load_rejects_malformed_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "service: [not, a, mapping");

    assert!(Config::load(&path, &cli(None, None)).is_err());
}

#[test]
fn test_defaults_survive_empty_file_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "service:\n  timeout_seconds: 60\n");

    let config = Config::load(&path, &cli(None, None)).unwrap();

    assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.service.timeout_seconds, 60);
    assert_eq!(config.session.context_limit, 3);
    assert_eq!(config.quick_actions.len(), 4);
}
