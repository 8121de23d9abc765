use canvasboard::components::canvas::credentials::load_credentials;
use canvasboard::error::Error;
use std::fs;
use std::path::PathBuf;

/// Write `content` to a file unique to this test
fn keys_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("canvasboard-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("keys.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_credentials_in_order() {
    let path = keys_file("ordered", r#"[["Zoe", "tok-z"], ["Adam", "tok-a"]]"#);

    let creds = load_credentials(&path).unwrap();

    // File order is menu order
    assert_eq!(creds[0].name, "Zoe");
    assert_eq!(creds[1].name, "Adam");
    assert_eq!(creds[1].token, "tok-a");
}

#[test]
fn test_missing_file_is_local_config_error() {
    let path = std::env::temp_dir().join("canvasboard-does-not-exist/keys.json");

    let err = load_credentials(&path).unwrap_err();

    assert!(matches!(err, Error::LocalConfig(_)));
    assert!(err.to_string().starts_with("Error loading"));
}

#[test]
fn test_empty_list_is_rejected() {
    let path = keys_file("empty", "[]");

    let err = load_credentials(&path).unwrap_err();

    assert!(matches!(err, Error::LocalConfig(_)));
    assert!(err.to_string().contains("No API keys found"));
}

#[test]
fn test_malformed_file_is_rejected() {
    let path = keys_file("malformed", r#"[["Zoe", "tok-z"],"#);

    let err = load_credentials(&path).unwrap_err();
    assert!(matches!(err, Error::LocalConfig(_)));
}
