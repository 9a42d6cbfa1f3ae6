use fcase_derive::fcase_error;
use std::borrow::Cow;

#[fcase_error]
pub enum DemoError {
    #[error("Slot {slot} rejected `{input}`{}: {source}", format_context(.context))]
    Slot {
        slot: &'static str,
        input: String,
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },
}

fn main() {
    let source = "x".parse::<u32>().unwrap_err();
    let err = DemoError::Slot { slot: "U", input: "x".to_owned(), source, context: None };
    let err: Result<(), DemoError> = Err(err);
    let err = err.context("patch inlet").unwrap_err();
    assert!(err.to_string().contains("patch inlet"));
    assert_eq!(err.variant_name(), "Slot");
}
