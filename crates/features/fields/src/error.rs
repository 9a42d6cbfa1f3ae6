use std::borrow::Cow;

/// Errors raised while turning user input into a [`crate::Field`].
#[fcase_derive::fcase_error]
pub enum FieldError {
    /// The text is not a number, vector, field type name or dictionary body.
    #[error("Failed to create an OpenFOAM field from `{input}`{}: {reason}", format_context(.context))]
    Parse { input: String, reason: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The mapping names an unknown type or lacks/garbles a parameter.
    #[error("Failed to create an OpenFOAM field from `{input}`{}: {source}", format_context(.context))]
    Mapping { input: String, source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl FieldError {
    pub(crate) fn parse(input: impl Into<String>, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Parse { input: input.into(), reason: reason.into(), context: None }
    }

    /// The user input that could not be interpreted.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Parse { input, .. } | Self::Mapping { input, .. } => input,
        }
    }
}
