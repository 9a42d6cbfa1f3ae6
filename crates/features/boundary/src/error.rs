use fcase_domain::slots::FieldSlot;
use fcase_fields::FieldError;
use std::borrow::Cow;

#[fcase_derive::fcase_error]
pub enum BoundaryError {
    /// A slot input could not be coerced into a field. No record is produced.
    #[error("Invalid value for field `{slot}`{}: {source}", format_context(.context))]
    InvalidFieldSpec {
        slot: FieldSlot,
        input: String,
        source: FieldError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid refinement levels `{input}`{}: {reason}", format_context(.context))]
    InvalidRefinementLevel { input: String, reason: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown boundary archetype `{name}`{}", format_context(.context))]
    UnknownArchetype { name: String, context: Option<Cow<'static, str>> },

    #[error("Unknown field `{name}` on patch `{patch}`{}", format_context(.context))]
    UnknownSlot { patch: String, name: String, context: Option<Cow<'static, str>> },

    #[error("Field `{slot}` is given more than once on patch `{patch}`{}", format_context(.context))]
    DuplicateSlot { patch: String, slot: FieldSlot, context: Option<Cow<'static, str>> },

    #[error("Patch `{name}` is defined more than once{}", format_context(.context))]
    DuplicatePatch { name: String, context: Option<Cow<'static, str>> },
}
