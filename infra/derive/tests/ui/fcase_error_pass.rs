use fcase_derive::fcase_error;
use std::borrow::Cow;

#[fcase_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Bad value{}: {message}", format_context(.context))]
    BadValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<()> {
    Err(std::io::Error::other("disk")).context("reading case file")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.variant_name(), "Io");
    assert!(err.to_string().contains("reading case file"));

    let err: DemoError = std::io::Error::other("disk").into();
    assert_eq!(err.variant_name(), "Io");
}
