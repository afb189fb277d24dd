#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros that remove the boilerplate around error enums and feature slices.
//!
//! Both macros expand to code that names other workspace crates by absolute path
//! (`::thiserror`, `::abet_kernel`), so consumers must depend on those directly.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Turns a named-field enum into a context-aware error type.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant
///   exists.
/// * A private `format_context` helper for use inside `#[error(..)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant carrying a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[abet_derive::abet_error]
/// pub enum LoadError {
///     #[error("Read failed{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("Reading registry file")
/// }
/// ```
#[proc_macro_attribute]
pub fn abet_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Declares a feature-slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a cheap
/// `Arc` wrapper that derefs to the inner state and implements
/// `abet_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[abet_derive::abet_slice]
/// pub struct Detector {
///     pub verifier: DomainVerifier,
/// }
///
/// let detector = Detector::new(DetectorInner { verifier });
/// ```
#[proc_macro_attribute]
pub fn abet_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}
