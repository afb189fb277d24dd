//! Facade crate for AntiBet features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust,no_run
//! use abet::detector::{CheckRequest, Detector};
//!
//! let config = abet::kernel::config::load_config(None::<&str>).unwrap();
//! let ctx = abet::bootstrap(config).unwrap();
//!
//! let detector = ctx.try_get_slice::<Detector>().unwrap();
//! let report = detector.check(&CheckRequest::new("https://example.com", "..."));
//! println!("{}", report.to_json().unwrap());
//! ```

use abet_domain::config::AppConfig;
use abet_domain::registry::InitializedSlice;
use abet_kernel::context::{AppContext, ContextError};
use abet_registry::Registry;
use std::borrow::Cow;
use tracing::info;

pub use abet_detector as detector;
pub use abet_domain as domain;
pub use abet_kernel as kernel;
pub use abet_registry as registry;

#[abet_derive::abet_error]
pub enum BootstrapError {
    #[error("Feature initialization failed{}: {source}", format_context(.context))]
    Feature { source: abet_detector::DetectorError, context: Option<Cow<'static, str>> },

    #[error("Application context error{}: {source}", format_context(.context))]
    Context { source: ContextError, context: Option<Cow<'static, str>> },
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use abet_detector as detector;

    /// Feature slices registered by [`crate::bootstrap`].
    pub const ENABLED: &[&str] = &["detector"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices against the shared registry.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(registry: &Registry) -> Result<Vec<InitializedSlice>, BootstrapError> {
    let slices = vec![features::detector::init(registry).context("Detector")?];
    Ok(slices)
}

/// Builds the application context: one registry from `config.registry`, shared by every slice.
///
/// The registry document is not read yet; the first lookup loads it.
///
/// # Errors
/// Returns an error if a feature slice fails to initialize.
pub fn bootstrap(config: AppConfig) -> Result<AppContext, BootstrapError> {
    let registry = Registry::builder().config(&config.registry).build();
    let slices = init(&registry)?;

    let ctx = AppContext::builder()
        .config(config)
        .registry(registry)
        .register_slices(slices)
        .build()?;

    info!(slices = ?ctx.slice_names().collect::<Vec<_>>(), "Application context ready");
    Ok(ctx)
}
