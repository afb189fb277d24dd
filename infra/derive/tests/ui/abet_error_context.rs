use abet_derive::abet_error;
use std::borrow::Cow;

#[abet_error]
pub enum ParseError {
    #[error("Bad number{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, ParseError> {
    raw.parse::<u32>().context("parsing port")
}

fn main() {
    let err = parse("nope").unwrap_err();
    assert!(err.to_string().starts_with("Bad number (parsing port)"));

    let internal: ParseError = "boom".into();
    let err = Err::<(), _>(internal).context("startup").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (startup): boom");

    let owned: ParseError = String::from("owned").into();
    assert!(matches!(owned, ParseError::Internal { .. }));
}
