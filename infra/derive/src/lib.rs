#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the infrastructure and feature crates.
//!
//! ## Usage
//! Depend on the crate and annotate error enums:
//! ```toml
//! [dependencies]
//! heritage-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a context-aware error type.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a `source` field.
/// * `From<Source>` for every such variant.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-local `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[heritage_derive::heritage_error]
/// pub enum CatalogError {
///     #[error("Io error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, CatalogError> {
///     std::fs::read_to_string("catalog.toml").context("Reading catalog")
/// }
/// ```
#[proc_macro_attribute]
pub fn heritage_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(&input).into()
}
