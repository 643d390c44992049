use crate::validate::{
    current_name_or_placeholder, ensure_field_name, ensure_field_name_equals,
    report_unknown_field,
};
use crate::{Location, TokenKind, ValidationError};

/// Read-only view of a parser positioned on a token.
///
/// Implemented by the host parser. The validator never advances the
/// source; it only inspects the current position.
pub trait TokenSource {
    /// Kind of the token the source is positioned on.
    fn current_token(&self) -> TokenKind;

    /// Name of the current field, if the source is inside one.
    ///
    /// Parsers conventionally keep reporting the name while positioned on
    /// the value that follows a field name.
    fn current_name(&self) -> Option<&str>;

    /// Location of the current token.
    ///
    /// May be expensive. The validator only calls it when a check fails.
    fn token_location(&self) -> Location;

    /// Ensures the current token is a field name.
    #[inline]
    fn expect_field_name(&self) -> Result<TokenKind, ValidationError> {
        ensure_field_name(self.current_token(), || self.token_location())
    }

    /// Ensures the current token is a field name equal to `expected`.
    #[inline]
    fn expect_field_named(&self, expected: &str) -> Result<TokenKind, ValidationError> {
        ensure_field_name_equals(self, self.current_token(), expected)
    }

    /// Reports the current field as unknown.
    ///
    /// An absent name is reported as `<null>`.
    #[inline]
    fn reject_current_field<T>(&self) -> Result<T, ValidationError>
    where
        Self: Sized,
    {
        report_unknown_field(current_name_or_placeholder(self), self.token_location())
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &S {
    #[inline]
    fn current_token(&self) -> TokenKind {
        S::current_token(self)
    }

    #[inline]
    fn current_name(&self) -> Option<&str> {
        S::current_name(self)
    }

    #[inline]
    fn token_location(&self) -> Location {
        S::token_location(self)
    }
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    #[inline]
    fn current_token(&self) -> TokenKind {
        S::current_token(self)
    }

    #[inline]
    fn current_name(&self) -> Option<&str> {
        S::current_name(self)
    }

    #[inline]
    fn token_location(&self) -> Location {
        S::token_location(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::cell::Cell;

    struct Fixed {
        token: TokenKind,
        name: Option<&'static str>,
        located: Cell<usize>,
    }

    impl Fixed {
        fn new(token: TokenKind, name: Option<&'static str>) -> Self {
            Self {
                token,
                name,
                located: Cell::new(0),
            }
        }
    }

    impl TokenSource for Fixed {
        fn current_token(&self) -> TokenKind {
            self.token
        }

        fn current_name(&self) -> Option<&str> {
            self.name
        }

        fn token_location(&self) -> Location {
            self.located.set(self.located.get() + 1);
            Location::new(1, 10)
        }
    }

    #[test]
    fn test_expect_field_named_matches() {
        let src = Fixed::new(TokenKind::FieldName, Some("a"));
        assert_eq!(src.expect_field_named("a"), Ok(TokenKind::FieldName));
        assert_eq!(src.located.get(), 0);
    }

    #[test]
    fn test_expect_field_name_wrong_kind() {
        let src = Fixed::new(TokenKind::ValueNull, Some("a"));
        let err = src.expect_field_name().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TokenMismatch);
        assert_eq!(src.located.get(), 1);
    }

    #[test]
    fn test_reject_current_field_without_name() {
        let src = Fixed::new(TokenKind::FieldName, None);
        let err = src.reject_current_field::<()>().unwrap_err();
        assert_eq!(err.message(), "unknown field [<null>] found");
    }

    #[test]
    fn test_forwarding_impls() {
        let src = Fixed::new(TokenKind::FieldName, Some("k"));
        let by_ref = &src;
        assert_eq!(by_ref.expect_field_named("k"), Ok(TokenKind::FieldName));

        let boxed: Box<dyn TokenSource> = Box::new(Fixed::new(TokenKind::FieldName, Some("k")));
        assert_eq!(boxed.current_name(), Some("k"));
        assert!(boxed.expect_field_name().is_ok());
    }
}
