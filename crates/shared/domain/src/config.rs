use crate::constants::DEFAULT_REGISTRY_FILE;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the authorization registry is read from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// JSON document of the form `{ "authorized_domains": [...] }`.
    pub path: PathBuf,
    /// Upper bound on the first read of `path`. `None` waits indefinitely.
    pub load_timeout_ms: Option<u64>,
}

impl RegistryConfig {
    #[must_use]
    pub fn load_timeout(&self) -> Option<Duration> {
        self.load_timeout_ms.map(Duration::from_millis)
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub console: bool,
    /// Enables rolling file output into this directory.
    pub directory: Option<PathBuf>,
    /// File output as JSON lines.
    pub json: bool,
    /// Extra filter directives, e.g. `abet_registry=debug`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_REGISTRY_FILE), load_timeout_ms: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, directory: None, json: false, filter: None }
    }
}
