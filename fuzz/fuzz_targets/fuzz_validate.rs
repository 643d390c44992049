#![no_main]

use std::cell::Cell;

use arbitrary::Arbitrary;
use fieldguard_core::{
    ErrorKind, Location, TokenKind, TokenSource, ensure_field_name, ensure_field_name_equals,
    report_unknown_field,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    token: TokenKind,
    name: Option<String>,
    expected: String,
    line: usize,
    column: usize,
}

struct Source<'a> {
    input: &'a Input,
    lookups: Cell<usize>,
}

impl TokenSource for Source<'_> {
    fn current_token(&self) -> TokenKind {
        self.input.token
    }

    fn current_name(&self) -> Option<&str> {
        self.input.name.as_deref()
    }

    fn token_location(&self) -> Location {
        self.lookups.set(self.lookups.get() + 1);
        Location::new(self.input.line, self.input.column)
    }
}

fuzz_target!(|input: Input| {
    let src = Source {
        input: &input,
        lookups: Cell::new(0),
    };

    match ensure_field_name(input.token, || src.token_location()) {
        Ok(token) => {
            assert_eq!(token, TokenKind::FieldName);
            assert_eq!(src.lookups.get(), 0);
        }
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::TokenMismatch);
            assert_eq!(src.lookups.get(), 1);
        }
    }

    src.lookups.set(0);
    let first = ensure_field_name_equals(&src, input.token, &input.expected);
    let lookups = src.lookups.get();
    let second = ensure_field_name_equals(&src, input.token, &input.expected);
    assert_eq!(first, second);

    match first {
        Ok(_) => {
            assert_eq!(input.name.as_deref(), Some(input.expected.as_str()));
            assert_eq!(lookups, 0);
        }
        Err(err) if err.kind() == ErrorKind::FieldNameMismatch => {
            assert_eq!(input.token, TokenKind::FieldName);
            assert_eq!(lookups, 1);
            let found = input.name.as_deref().unwrap_or("<null>");
            assert_eq!(
                err.message(),
                format!(
                    "expecting field with name [{}] but found [{found}]",
                    input.expected
                )
            );
        }
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::TokenMismatch);
            assert_ne!(input.token, TokenKind::FieldName);
        }
    }

    let reported: Result<(), _> = report_unknown_field(&input.expected, src.token_location());
    assert!(reported.is_err_and(|e| e.kind() == ErrorKind::UnknownField));
});
