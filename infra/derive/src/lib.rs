#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `FoamCase` crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! fcase-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Type Aliasing**: Creates a `Result<T>` alias next to the enum.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` carrying this error.
/// * **Conversions**: Implements `From<Source>` for variants made of exactly a source field and
///   a context field, so `?` lifts upstream errors. Variants carrying additional data (for
///   example the offending input) must be built explicitly.
/// * **Variant Names**: Generates `variant_name()` returning the variant identifier, handy as a
///   structured `tracing` field.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. A context field must be typed `Option<Cow<'static, str>>` and named `context`.
/// 3. Variants with a `source` field (or a field marked `#[source]`/`#[from]`) need a context field.
/// 4. Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[fcase_derive::fcase_error]
/// pub enum FieldError {
///     #[error("Malformed field `{input}`{}: {reason}", format_context(.context))]
///     Parse { input: String, reason: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Invalid field mapping{}: {source}", format_context(.context))]
///     Mapping { source: serde_json::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<Field> {
///     serde_json::from_str(raw).context("Reading field mapping")
/// }
/// ```
#[proc_macro_attribute]
pub fn fcase_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
