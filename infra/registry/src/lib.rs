//! # Authorization Registry
//!
//! The set of operator domains permitted to operate, read from an external JSON document:
//!
//! ```json
//! { "authorized_domains": ["domain1.com", "domain2.com.br"] }
//! ```
//!
//! * Entries and queries are normalized the same way (lowercase, no leading `www.`).
//! * The document is read lazily, exactly once, on first use; [`Registry::load`] re-reads
//!   it and swaps the whole set.
//! * Load failures never surface to callers. A missing file, malformed JSON, or a wrong
//!   shape are logged with a distinct `reason` and the registry serves an empty set.
//!
//! ## Example
//!
//! ```rust
//! use abet_registry::{FileSource, Registry};
//!
//! let registry = Registry::builder().source(FileSource::new("/nonexistent/spa.json")).build();
//!
//! // Unreadable source: nothing is authorized, nothing panics.
//! assert!(!registry.is_authorized("example.com"));
//! assert!(registry.snapshot().is_empty());
//! ```

mod builder;
mod domains;
mod engine;
mod error;
mod source;

pub use crate::builder::{NoSource, RegistryBuilder, WithSource};
pub use crate::domains::{DomainSet, normalize_domain};
pub use crate::engine::{Registry, RegistryInner};
pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::source::{FileSource, RegistrySource, StaticSource};
