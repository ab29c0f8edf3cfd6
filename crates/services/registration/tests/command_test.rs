//! Command layer tests: one action per connection, output captured in memory.

use tempfile::TempDir;

use common::AppError;
use domain::UserResponse;
use registration::config::UserServiceConfig;
use registration::{run_command, ListFormat, UserAction};

async fn run(config: &UserServiceConfig, action: UserAction) -> (bool, String) {
    let mut out = Vec::new();
    let accepted = run_command(config, action, &mut out).await.unwrap();
    (accepted, String::from_utf8(out).unwrap())
}

fn add(username: &str, email: &str, password: &str) -> UserAction {
    UserAction::Add {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn auth(username: &str, password: &str) -> UserAction {
    UserAction::Authenticate {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_init_creates_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.db");
    let config = UserServiceConfig::new(&path);

    let (accepted, output) = run(&config, UserAction::Init).await;

    assert!(accepted);
    assert!(output.contains("users.db"));
    assert!(path.exists());

    let (accepted, _) = run(&config, UserAction::Init).await;
    assert!(accepted);
}

#[tokio::test]
async fn test_add_then_duplicate() {
    let dir = TempDir::new().unwrap();
    let config = UserServiceConfig::new(dir.path().join("users.db"));

    let (first, output) = run(&config, add("duplicate", "dup@example.com", "secret123")).await;
    assert!(first);
    assert!(output.contains("registered"));

    let (second, output) = run(&config, add("duplicate", "dup2@example.com", "anotherpass")).await;
    assert!(!second);
    assert!(output.contains("already taken"));
}

#[tokio::test]
async fn test_authenticate_outcomes() {
    let dir = TempDir::new().unwrap();
    let config = UserServiceConfig::new(dir.path().join("users.db"));

    run(&config, add("authuser", "auth@example.com", "mypassword")).await;

    let (ok, _) = run(&config, auth("authuser", "mypassword")).await;
    assert!(ok);

    let (wrong, output) = run(&config, auth("authuser", "wrongpass")).await;
    assert!(!wrong);
    assert!(output.contains("Invalid username or password"));

    let (ghost, _) = run(&config, auth("ghostuser", "wrongpassword")).await;
    assert!(!ghost);
}

#[tokio::test]
async fn test_list_contains_every_username() {
    let dir = TempDir::new().unwrap();
    let config = UserServiceConfig::new(dir.path().join("users.db"));

    run(&config, add("listuser1", "list1@example.com", "pass1")).await;
    run(&config, add("listuser2", "list2@example.com", "pass2")).await;

    let (accepted, output) = run(
        &config,
        UserAction::List {
            format: ListFormat::Text,
        },
    )
    .await;

    assert!(accepted);
    assert!(output.contains("listuser1"));
    assert!(output.contains("listuser2"));
    assert!(!output.contains("pass1"));
}

#[tokio::test]
async fn test_list_json() {
    let dir = TempDir::new().unwrap();
    let config = UserServiceConfig::new(dir.path().join("users.db"));

    run(&config, add("x", "x@x.com", "px")).await;
    run(&config, add("y", "y@x.com", "py")).await;

    let (_, output) = run(
        &config,
        UserAction::List {
            format: ListFormat::Json,
        },
    )
    .await;

    let listed: Vec<UserResponse> = serde_json::from_str(&output).unwrap();
    assert_eq!(
        listed,
        vec![
            UserResponse {
                username: "x".to_string(),
                email: "x@x.com".to_string(),
            },
            UserResponse {
                username: "y".to_string(),
                email: "y@x.com".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_list_empty_store_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let config = UserServiceConfig::new(dir.path().join("users.db"));

    let (accepted, output) = run(&config, UserAction::List { format: ListFormat::Text }).await;

    assert!(accepted);
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_storage_failure_propagates() {
    let dir = TempDir::new().unwrap();
    let config = UserServiceConfig::new(dir.path().join("missing-dir").join("users.db"));

    let mut out = Vec::new();
    let result = run_command(&config, UserAction::Init, &mut out).await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let config = UserServiceConfig::new("");

    let mut out = Vec::new();
    let result = run_command(&config, UserAction::Init, &mut out).await;

    assert!(matches!(result, Err(AppError::Config(_))));
}

#[tokio::test]
async fn test_path_is_used_verbatim() {
    let dir = TempDir::new().unwrap();

    for name in ["users%41.db", "users?v2.db", "users#1.db"] {
        let path = dir.path().join(name);
        let config = UserServiceConfig::new(&path);

        let (accepted, _) = run(&config, add("verbatim", "v@x.com", "pw")).await;
        assert!(accepted, "{name}");
        assert!(path.exists(), "{name} was not created");
    }

    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".db"))
        .collect();
    names.sort();
    assert_eq!(names, vec!["users#1.db", "users%41.db", "users?v2.db"]);
}

#[tokio::test]
async fn test_memory_like_name_is_a_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(":memory:");
    let config = UserServiceConfig::new(&path);

    run(&config, add("kept", "kept@x.com", "pw")).await;
    let (found, _) = run(&config, auth("kept", "pw")).await;

    assert!(found);
    assert!(path.exists());
}
