use std::borrow::Cow;

/// Error types specific to the detector feature.
///
/// Scoring, verification and selection never fail; these only cover building the rule
/// table and the JSON boundary.
#[abet_derive::abet_error]
pub enum DetectorError {
    /// A rule pattern did not compile.
    #[error("Rule pattern error{}: {source}", format_context(.context))]
    Pattern { source: regex::Error, context: Option<Cow<'static, str>> },

    /// Request decoding or report encoding failed.
    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues.
    #[error("Internal detector error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
