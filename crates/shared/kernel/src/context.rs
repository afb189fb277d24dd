//! Process-wide application context.
//!
//! Built once at startup, then cloned into whatever drives the pipeline (CLI, tests).

use abet_domain::config::AppConfig;
use abet_domain::registry::{FeatureSlice, InitializedSlice};
use abet_registry::Registry;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

#[abet_derive::abet_error]
pub enum ContextError {
    #[error("Context validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Context missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct AppContextInner {
    pub config: AppConfig,
    pub registry: Registry,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

#[derive(Debug, Clone)]
pub struct AppContext {
    inner: Arc<AppContextInner>,
}

impl AppContext {
    #[must_use]
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, ContextError> {
        self.get_slice::<T>().ok_or_else(|| ContextError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Names of the registered slices (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for AppContext {
    type Target = AppContextInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct AppContextBuilder {
    config: Option<AppConfig>,
    registry: Option<Registry>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl AppContextBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses an existing registry handle instead of building one from `config.registry`.
    #[must_use]
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        debug!(slice = slice.name, "Registering feature slice");
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        slices.into_iter().fold(self, Self::register_slice)
    }

    /// Finalizes the context. The registry is not read here; it loads on first lookup.
    ///
    /// # Errors
    /// Returns [`ContextError::Validation`] if no config was provided.
    pub fn build(self) -> Result<AppContext, ContextError> {
        let config = self.config.ok_or_else(|| ContextError::Validation {
            message: "AppConfig not provided".into(),
            context: None,
        })?;
        let registry =
            self.registry.unwrap_or_else(|| Registry::builder().config(&config.registry).build());

        Ok(AppContext {
            inner: Arc::new(AppContextInner { config, registry, slices: self.slices }),
        })
    }
}
