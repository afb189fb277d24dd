//! The shared registry handle.
//!
//! [`Registry`] owns the authorized-domain set for the whole process. The set is read
//! from its [`RegistrySource`] lazily on first use, exactly once even under concurrent
//! first access, and published as one `Arc<DomainSet>`. Later loads build a fresh set
//! and swap the pointer, so readers observe either the old or the new set, never a mix.

use crate::builder::RegistryBuilder;
use crate::domains::{DomainSet, normalize_domain};
use crate::error::RegistryError;
use crate::source::RegistrySource;
use parking_lot::RwLock;
use std::ops::Deref;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Once};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

/// The internal shared state of a [`Registry`].
#[derive(Debug)]
pub struct RegistryInner {
    pub(crate) source: Arc<dyn RegistrySource>,
    pub(crate) load_timeout: Option<Duration>,
    pub(crate) init: Once,
    pub(crate) domains: RwLock<Arc<DomainSet>>,
    pub(crate) loads: AtomicU64,
}

/// A thread-safe, cheaply cloneable handle to the authorization registry.
///
/// Construct one per process and hand clones to every component that verifies domains.
///
/// # Example
///
/// ```rust
/// use abet_registry::{Registry, StaticSource};
///
/// let registry = Registry::builder()
///     .source(StaticSource::new(["Site.com", "www.other.com.br"]))
///     .build();
///
/// assert!(registry.is_authorized("www.SITE.com"));
/// assert!(registry.is_authorized("other.com.br"));
/// assert!(!registry.is_authorized("unknown.com"));
/// assert_eq!(registry.load_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) inner: Arc<RegistryInner>,
}

impl Deref for Registry {
    type Target = RegistryInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Registry {
    #[must_use = "The registry is not usable until you call .build()"]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Case- and `www.`-insensitive membership test.
    ///
    /// Triggers the first load if it has not happened yet. Inputs that normalize to an
    /// empty string are never authorized.
    pub fn is_authorized(&self, domain: &str) -> bool {
        self.ensure_loaded();

        let normalized = normalize_domain(domain);
        if normalized.is_empty() {
            return false;
        }

        let authorized = self.domains.read().contains(&normalized);
        debug!(domain = %normalized, authorized, "Registry lookup");
        authorized
    }

    /// Read-only view of the current set.
    pub fn snapshot(&self) -> Arc<DomainSet> {
        self.ensure_loaded();
        Arc::clone(&self.domains.read())
    }

    /// Performs the first load if no load has completed yet.
    ///
    /// Concurrent callers block until the single in-flight load has published its set.
    pub fn ensure_loaded(&self) {
        self.init.call_once(|| {
            let set = self.read_or_degrade();
            *self.domains.write() = Arc::new(set);
        });
    }

    /// Re-reads the source and replaces the set wholesale.
    ///
    /// Failures degrade to an empty set, exactly like the first load.
    pub fn load(&self) {
        let set = Arc::new(self.read_or_degrade());
        // Mark the lazy init as done so it cannot overwrite this newer set.
        self.init.call_once(|| {});
        *self.domains.write() = set;
    }

    /// Reads and parses the source without publishing the result.
    ///
    /// Meant for diagnostics: it reports why a load would degrade.
    ///
    /// # Errors
    /// Returns the classified [`RegistryError`] for unreadable, malformed, misshapen, or
    /// timed-out sources.
    pub fn try_load(&self) -> Result<DomainSet, RegistryError> {
        let bytes = self.fetch_bounded()?;
        DomainSet::from_document(&bytes)
    }

    /// How many times the source has been read.
    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::Acquire)
    }

    /// Origin of the registry document, for diagnostics.
    pub fn source_name(&self) -> String {
        self.source.describe().into_owned()
    }

    fn read_or_degrade(&self) -> DomainSet {
        match self.try_load() {
            Ok(set) => {
                info!(
                    source = %self.source.describe(),
                    count = set.len(),
                    "Authorized domains loaded"
                );
                set
            },
            Err(err) => {
                error!(
                    source = %self.source.describe(),
                    reason = err.reason(),
                    error = %err,
                    "Authorized domain list unavailable, registry degrades to empty"
                );
                DomainSet::default()
            },
        }
    }

    fn fetch_bounded(&self) -> Result<Vec<u8>, RegistryError> {
        self.loads.fetch_add(1, Ordering::AcqRel);

        let Some(timeout) = self.load_timeout else {
            // A panicking source must not poison the lazy init.
            return panic::catch_unwind(AssertUnwindSafe(|| self.source.fetch())).unwrap_or_else(
                |_| {
                    Err(RegistryError::Internal {
                        message: "registry source panicked while fetching".into(),
                        context: None,
                    })
                },
            );
        };

        let source = Arc::clone(&self.source);
        let (tx, rx) = mpsc::sync_channel(1);
        thread::Builder::new()
            .name("abet-registry-load".to_owned())
            .spawn(move || {
                // The receiver is gone if the load already timed out.
                let _ = tx.send(source.fetch());
            })
            .map_err(|e| RegistryError::Internal {
                message: e.to_string().into(),
                context: Some("Spawning registry loader thread".into()),
            })?;

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(RegistryError::SourceTimeout {
                message: format!("no response within {} ms", timeout.as_millis()).into(),
                context: None,
            }),
            // The loader thread panicked before sending.
            Err(RecvTimeoutError::Disconnected) => Err(RegistryError::Internal {
                message: "registry loader thread exited without a result".into(),
                context: None,
            }),
        }
    }
}
