//! A caller-side field dispatch over a scripted token sequence, with the
//! validator's error wrapped in the caller's own error type.

use fieldguard::{
    ErrorKind, Location, TokenKind, TokenSource, ValidationError, report_unknown_field,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum PointError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("field `{0}` given twice")]
    Duplicate(&'static str),

    #[error("missing field `{0}`")]
    Missing(&'static str),
}

#[derive(Debug, PartialEq)]
struct Point {
    x: i64,
    y: i64,
}

/// Plays back `(kind, name, number)` triples, one per token.
struct Script {
    tokens: Vec<(TokenKind, Option<&'static str>, i64)>,
    pos: usize,
}

impl Script {
    fn new(tokens: Vec<(TokenKind, Option<&'static str>, i64)>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn advance(&mut self) -> TokenKind {
        self.pos += 1;
        self.current_token()
    }

    fn number(&self) -> i64 {
        self.tokens.get(self.pos).map(|t| t.2).unwrap_or_default()
    }
}

impl TokenSource for Script {
    fn current_token(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.0)
            .unwrap_or(TokenKind::EndOfStream)
    }

    fn current_name(&self) -> Option<&str> {
        self.tokens.get(self.pos).and_then(|t| t.1)
    }

    fn token_location(&self) -> Location {
        Location::new(1, self.pos + 1)
    }
}

/// Reads `{ "x": n, "y": n }` in any field order, starting on `START_OBJECT`.
fn read_point(src: &mut Script) -> Result<Point, PointError> {
    let (mut x, mut y) = (None, None);

    loop {
        let token = src.advance();
        if token == TokenKind::EndObject {
            break;
        }
        src.expect_field_name()?;

        let slot = match src.current_name() {
            Some("x") => (&mut x, "x"),
            Some("y") => (&mut y, "y"),
            Some(other) => return Ok(report_unknown_field(other, src.token_location())?),
            None => return Ok(src.reject_current_field()?),
        };
        if slot.0.is_some() {
            return Err(PointError::Duplicate(slot.1));
        }

        src.advance();
        *slot.0 = Some(src.number());
    }

    Ok(Point {
        x: x.ok_or(PointError::Missing("x"))?,
        y: y.ok_or(PointError::Missing("y"))?,
    })
}

fn object(fields: &[(&'static str, i64)]) -> Script {
    let mut tokens = vec![(TokenKind::StartObject, None, 0)];
    for (name, value) in fields {
        tokens.push((TokenKind::FieldName, Some(*name), 0));
        tokens.push((TokenKind::ValueNumber, Some(*name), *value));
    }
    tokens.push((TokenKind::EndObject, None, 0));
    Script::new(tokens)
}

#[test]
fn test_reads_fields_in_any_order() {
    let mut src = object(&[("y", 2), ("x", -1)]);
    assert_eq!(read_point(&mut src), Ok(Point { x: -1, y: 2 }));
}

#[test]
fn test_unknown_field_is_wrapped() {
    let mut src = object(&[("x", 1), ("z", 3)]);

    let err = read_point(&mut src).unwrap_err();

    let PointError::Invalid(inner) = &err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert_eq!(inner.kind(), ErrorKind::UnknownField);
    assert_eq!(inner.message(), "unknown field [z] found");
    assert_eq!(inner.location(), Location::new(1, 4));
    // transparent wrapping keeps the validator's rendering
    assert_eq!(err.to_string(), inner.to_string());
}

#[test]
fn test_value_where_field_expected() {
    let mut src = Script::new(vec![
        (TokenKind::StartObject, None, 0),
        (TokenKind::ValueNumber, None, 5),
    ]);

    let err = read_point(&mut src).unwrap_err();

    let PointError::Invalid(inner) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(inner.kind(), ErrorKind::TokenMismatch);
    assert_eq!(
        inner.message(),
        "expecting token of type [FIELD_NAME] but found [VALUE_NUMBER]"
    );
}

#[test]
fn test_truncated_object() {
    let mut src = Script::new(vec![(TokenKind::StartObject, None, 0)]);

    let Err(PointError::Invalid(inner)) = read_point(&mut src) else {
        panic!("expected a validation error");
    };
    assert!(inner.message().ends_with("but found [END_OF_STREAM]"));
}

#[test]
fn test_nameless_field_is_rejected_as_null() {
    let mut src = Script::new(vec![
        (TokenKind::StartObject, None, 0),
        (TokenKind::FieldName, None, 0),
    ]);

    let Err(PointError::Invalid(inner)) = read_point(&mut src) else {
        panic!("expected a validation error");
    };
    assert_eq!(inner.message(), "unknown field [<null>] found");
}

#[test]
fn test_caller_errors_pass_through() {
    let mut src = object(&[("x", 1), ("x", 2)]);
    assert_eq!(read_point(&mut src), Err(PointError::Duplicate("x")));

    let mut src = object(&[("y", 1)]);
    assert_eq!(read_point(&mut src), Err(PointError::Missing("x")));
}
