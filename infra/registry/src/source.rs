//! Where registry documents come from.

use crate::error::{RegistryError, RegistryErrorExt};
use abet_domain::constants::AUTHORIZED_DOMAINS_KEY;
use std::borrow::Cow;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// A readable registry document.
///
/// Implementations only fetch bytes; parsing and normalization stay in the registry so
/// every backend gets the same validation.
pub trait RegistrySource: Debug + Send + Sync + 'static {
    /// Returns the raw document bytes.
    ///
    /// # Errors
    /// Returns [`RegistryError::SourceUnavailable`] when the document cannot be read.
    fn fetch(&self) -> Result<Vec<u8>, RegistryError>;

    /// Human-readable origin, used in log events.
    fn describe(&self) -> Cow<'_, str>;
}

/// A JSON file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistrySource for FileSource {
    fn fetch(&self) -> Result<Vec<u8>, RegistryError> {
        std::fs::read(&self.path).context(format!("Reading {}", self.path.display()))
    }

    fn describe(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }
}

/// A fixed in-memory list, mainly for tests and embedded defaults.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    domains: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { domains: domains.into_iter().map(Into::into).collect() }
    }
}

impl RegistrySource for StaticSource {
    fn fetch(&self) -> Result<Vec<u8>, RegistryError> {
        let document = serde_json::json!({ AUTHORIZED_DOMAINS_KEY: self.domains });
        serde_json::to_vec(&document).context("Encoding static domain list")
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("<static>")
    }
}
