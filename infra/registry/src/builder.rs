use crate::domains::DomainSet;
use crate::engine::{Registry, RegistryInner};
use crate::source::{FileSource, RegistrySource};
use abet_domain::config::RegistryConfig;
use parking_lot::RwLock;
use private::Sealed;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Once};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoSource;
#[derive(Debug)]
pub struct WithSource(Arc<dyn RegistrySource>);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoSource {}
impl Sealed for WithSource {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct RegistryBuilder<S: Sealed = NoSource> {
    state: S,
    load_timeout: Option<Duration>,
}

#[allow(private_bounds)]
impl<S: Sealed> RegistryBuilder<S> {
    /// Bounds the source read; on expiry the registry degrades to empty.
    #[must_use = "Sets the load timeout of the registry"]
    pub const fn load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = Some(timeout);
        self
    }
}

impl RegistryBuilder<NoSource> {
    #[must_use = "Creates a new registry builder"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the document source of the registry"]
    pub fn source(self, source: impl RegistrySource) -> RegistryBuilder<WithSource> {
        RegistryBuilder { state: WithSource(Arc::new(source)), load_timeout: self.load_timeout }
    }

    /// Reads a JSON file at `config.path`, bounded by `config.load_timeout_ms`.
    #[must_use = "Sets the document source of the registry"]
    pub fn config(self, config: &RegistryConfig) -> RegistryBuilder<WithSource> {
        let builder = RegistryBuilder {
            state: WithSource(Arc::new(FileSource::new(&config.path))),
            load_timeout: self.load_timeout,
        };
        match config.load_timeout() {
            Some(timeout) => builder.load_timeout(timeout),
            None => builder,
        }
    }
}

impl RegistryBuilder<WithSource> {
    /// Creates the registry handle without touching the source.
    ///
    /// The first `is_authorized`/`snapshot`/`ensure_loaded` call performs the load.
    #[must_use = "The registry handle must be shared with the verifier"]
    pub fn build(self) -> Registry {
        let source = self.state.0;
        info!(source = %source.describe(), timeout = ?self.load_timeout, "Registry configured");

        Registry {
            inner: Arc::new(RegistryInner {
                source,
                load_timeout: self.load_timeout,
                init: Once::new(),
                domains: RwLock::new(Arc::new(DomainSet::default())),
                loads: AtomicU64::new(0),
            }),
        }
    }
}
