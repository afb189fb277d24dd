//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and the [`context::AppContext`] that
//! owns the shared registry handle and the registered feature slices.
//!
//! ## Config loading
//! ```rust,no_run
//! use abet_kernel::config::load_config;
//! use abet_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("config/antibet.toml")).unwrap();
//! ```
pub mod config;
pub mod context;

pub use abet_domain as domain;
pub use abet_registry as registry;
