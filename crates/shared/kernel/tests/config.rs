use abet_kernel::config::{ConfigError, load_config};
use abet_kernel::domain::config::AppConfig;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("antibet.toml");
    fs::write(
        &path,
        r#"
[registry]
path = "/srv/antibet/spa.json"
load_timeout_ms = 250

[logging]
level = "debug"
json = true
"#,
    )?;

    let config: AppConfig = load_config(Some(&path))?;

    assert_eq!(config.registry.path, PathBuf::from("/srv/antibet/spa.json"));
    assert_eq!(config.registry.load_timeout(), Some(Duration::from_millis(250)));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    // Untouched keys keep their defaults.
    assert!(config.logging.console);
    assert!(config.logging.directory.is_none());
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_config::<AppConfig>(Some(dir.path().join("absent.toml"))).expect_err("missing");
    let ConfigError::Config { context, .. } = err;
    assert_eq!(context.as_deref(), Some("Failed to build config"));
}

#[test]
fn wrong_types_fail_deserialization() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("antibet.toml");
    fs::write(&path, "[registry]\nload_timeout_ms = \"soon\"\n")?;

    let err = load_config::<AppConfig>(Some(&path)).expect_err("bad type");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
fn default_file_is_optional() {
    // The package directory has no antibet.* file.
    let config = load_config::<AppConfig>(None::<&str>).expect("defaults");
    assert_eq!(config.registry.path, PathBuf::from("spa_authorized_list.json"));
    assert_eq!(config.logging.level, "info");
}
