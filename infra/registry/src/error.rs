use std::borrow::Cow;

/// Why a registry load fell back to the empty set.
///
/// These never reach the verification path; the registry logs them and degrades.
#[abet_derive::abet_error]
pub enum RegistryError {
    /// The source could not be read (missing file, permissions, ...).
    #[error("Registry source unavailable{}: {source}", format_context(.context))]
    SourceUnavailable { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The source is not valid JSON.
    #[error("Registry source is malformed JSON{}: {source}", format_context(.context))]
    SourceMalformed { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Valid JSON, but not `{ "authorized_domains": [ ... ] }`.
    #[error("Registry source has an unexpected shape{}: {message}", format_context(.context))]
    UnexpectedShape { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The source did not answer within the configured load timeout.
    #[error("Registry source timed out{}: {message}", format_context(.context))]
    SourceTimeout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues.
    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    /// Stable identifier recorded in the `reason` field of load-failure events.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::SourceMalformed { .. } => "source_malformed",
            Self::UnexpectedShape { .. } => "unexpected_shape",
            Self::SourceTimeout { .. } => "source_timeout",
            Self::Internal { .. } => "internal",
        }
    }
}
