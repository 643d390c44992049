//! Assertions on the token a parser is currently positioned on.
//!
//! Each function either hands back the token it was given or fails with a
//! [`ValidationError`] located in the source. Locations are requested
//! through a closure and only on the failure path, since resolving a
//! line/column can mean rescanning the input.
//!
//! # Example
//!
//! ```ignore
//! use fieldguard::{ensure_field_name, report_unknown_field, TokenSource};
//!
//! let token = parser.next_token();
//! ensure_field_name(token, || parser.token_location())?;
//! match parser.current_name() {
//!     Some("id") => { /* ... */ }
//!     Some(other) => return report_unknown_field(other, parser.token_location()),
//!     None => return report_unknown_field("<null>", parser.token_location()),
//! }
//! ```

use crate::error::NULL_NAME;
use crate::traits::TokenSource;
use crate::{Location, Reason, TokenKind, ValidationError};

/// Ensures `token` is a [`TokenKind::FieldName`].
///
/// `location` is called once if the check fails, never otherwise.
#[inline]
pub fn ensure_field_name<F>(token: TokenKind, location: F) -> Result<TokenKind, ValidationError>
where
    F: FnOnce() -> Location,
{
    ensure_token_kind(TokenKind::FieldName, token, location)
}

/// Ensures `token` is a field name and that the source's current name is
/// exactly `expected`.
///
/// The kind check runs first and its error is returned as is. The name
/// check asks the source for the location again rather than reusing the
/// one from the kind check.
pub fn ensure_field_name_equals<S>(
    source: &S,
    token: TokenKind,
    expected: &str,
) -> Result<TokenKind, ValidationError>
where
    S: TokenSource + ?Sized,
{
    let token = ensure_field_name(token, || source.token_location())?;

    match source.current_name() {
        Some(current) if current == expected => Ok(token),
        current => Err(ValidationError::new(
            Reason::FieldNameMismatch {
                expected: expected.to_owned(),
                found: current.map(str::to_owned),
            },
            source.token_location(),
        )),
    }
}

/// Fails with an `UnknownField` error for `field` at `location`.
///
/// Never returns `Ok`. The success type is free so the call can close any
/// `match` arm of a field dispatch.
#[inline]
pub fn report_unknown_field<T>(field: &str, location: Location) -> Result<T, ValidationError> {
    Err(ValidationError::new(
        Reason::UnknownField {
            field: field.to_owned(),
        },
        location,
    ))
}

/// Shared kind check. All `TokenMismatch` errors are built here.
#[inline]
pub(crate) fn ensure_token_kind<F>(
    expected: TokenKind,
    current: TokenKind,
    location: F,
) -> Result<TokenKind, ValidationError>
where
    F: FnOnce() -> Location,
{
    if current == expected {
        Ok(current)
    } else {
        Err(ValidationError::new(
            Reason::TokenMismatch {
                expected,
                found: current,
            },
            location(),
        ))
    }
}

/// Name of the source's current field, or the `<null>` placeholder.
#[inline]
pub(crate) fn current_name_or_placeholder<S>(source: &S) -> &str
where
    S: TokenSource + ?Sized,
{
    source.current_name().unwrap_or(NULL_NAME)
}
