//! Located diagnostics produced by the token validator.
//!
//! Parsers that have their own error type should wrap [`ValidationError`]
//! rather than flatten it, so the location and structured [`Reason`] stay
//! available to whoever reports the failure.
//!
//! # Example
//!
//! ```ignore
//! use thiserror::Error;
//!
//! #[derive(Error, Debug)]
//! pub enum MyDocError {
//!     #[error(transparent)]
//!     Invalid(#[from] fieldguard::ValidationError),
//!
//!     #[error("unexpected end of input")]
//!     Eof,
//! }
//! ```

use thiserror::Error;

use crate::{Location, TokenKind};

/// Placeholder rendered when the source has no current field name.
pub const NULL_NAME: &str = "<null>";

/// Discriminator for [`ValidationError`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TokenMismatch,
    FieldNameMismatch,
    UnknownField,
}

/// What the validator expected and what it found instead.
///
/// The `Display` output of a reason is the error's message text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The current token is not of the expected kind.
    #[error("expecting token of type [{expected}] but found [{found}]")]
    TokenMismatch {
        expected: TokenKind,
        found: TokenKind,
    },

    /// The current token is a field name, but not the expected one.
    ///
    /// `found` is `None` when the source had no current name.
    #[error("expecting field with name [{expected}] but found [{}]", .found.as_deref().unwrap_or(NULL_NAME))]
    FieldNameMismatch {
        expected: String,
        found: Option<String>,
    },

    /// A field the caller's schema does not recognize.
    #[error("unknown field [{field}] found")]
    UnknownField { field: String },
}

impl Reason {
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Reason::TokenMismatch { .. } => ErrorKind::TokenMismatch,
            Reason::FieldNameMismatch { .. } => ErrorKind::FieldNameMismatch,
            Reason::UnknownField { .. } => ErrorKind::UnknownField,
        }
    }
}

/// A token-shape assertion failed at `location`.
///
/// The message is rendered once, when the error is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{location}] failed to parse object: {message}")]
pub struct ValidationError {
    reason: Reason,
    message: String,
    location: Location,
}

impl ValidationError {
    pub fn new(reason: Reason, location: Location) -> Self {
        let message = reason.to_string();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "fieldguard::validate",
            kind = ?reason.kind(),
            %location,
            reason = %message,
            "token validation failed"
        );

        Self {
            reason,
            message,
            location,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.reason.kind()
    }

    #[inline]
    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    /// The rendered message, without location or prefix.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }
}
