use fieldguard::{Location, TokenKind, TokenSource, ValidationError};
use thiserror::Error;

use crate::cursor::Cursor;
use crate::lexer::LexError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("[{location}] expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: TokenKind,
        location: Location,
    },

    #[error("[{location}] invalid number `{text}`")]
    InvalidNumber { text: String, location: Location },

    #[error("[{location}] field `{field}` given twice")]
    Duplicate {
        field: &'static str,
        location: Location,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub version: u32,
    pub name: Option<String>,
    pub retries: u32,
    pub verbose: bool,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Retries,
    Verbose,
}

impl Field {
    const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Retries => "retries",
            Field::Verbose => "verbose",
        }
    }
}

impl Settings {
    /// Settings for `version` with every optional field at its default.
    pub fn new(version: u32) -> Self {
        Self {
            version,
            name: None,
            retries: 3,
            verbose: false,
        }
    }

    pub fn parse(src: &str) -> Result<Self, SettingsError> {
        let mut cursor = Cursor::new(src)?;
        Self::read(&mut cursor)
    }

    /// Reads one settings object, starting before its opening brace.
    ///
    /// Each optional field may appear at most once. Anything after the
    /// closing brace is an error.
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self, SettingsError> {
        cursor.advance();
        expect(cursor, TokenKind::StartObject, "an object")?;

        cursor.advance();
        cursor.expect_field_named("version")?;
        cursor.advance();
        let mut settings = Settings::new(number(cursor)?);
        let mut seen = [false; 3];

        while cursor.advance() != TokenKind::EndObject {
            cursor.expect_field_name()?;
            let field = match cursor.current_name() {
                Some("name") => Field::Name,
                Some("retries") => Field::Retries,
                Some("verbose") => Field::Verbose,
                _ => return Ok(cursor.reject_current_field()?),
            };
            if std::mem::replace(&mut seen[field as usize], true) {
                return Err(SettingsError::Duplicate {
                    field: field.key(),
                    location: cursor.token_location(),
                });
            }

            cursor.advance();
            match field {
                Field::Name => settings.name = Some(string(cursor)?),
                Field::Retries => settings.retries = number(cursor)?,
                Field::Verbose => settings.verbose = boolean(cursor)?,
            }
        }

        cursor.advance();
        expect(cursor, TokenKind::EndOfStream, "end of input")?;
        Ok(settings)
    }
}

fn expect(
    cursor: &Cursor<'_>,
    kind: TokenKind,
    expected: &'static str,
) -> Result<(), SettingsError> {
    let found = cursor.current_token();
    if found == kind {
        Ok(())
    } else {
        Err(SettingsError::Unexpected {
            expected,
            found,
            location: cursor.token_location(),
        })
    }
}

fn number(cursor: &Cursor<'_>) -> Result<u32, SettingsError> {
    expect(cursor, TokenKind::ValueNumber, "a number")?;
    let text = cursor.text().unwrap_or_default();
    text.parse().map_err(|_| SettingsError::InvalidNumber {
        text: text.to_owned(),
        location: cursor.token_location(),
    })
}

fn string(cursor: &Cursor<'_>) -> Result<String, SettingsError> {
    expect(cursor, TokenKind::ValueString, "a string")?;
    Ok(cursor.text().unwrap_or_default().to_owned())
}

fn boolean(cursor: &Cursor<'_>) -> Result<bool, SettingsError> {
    expect(cursor, TokenKind::ValueBoolean, "a boolean")?;
    Ok(cursor.text() == Some("true"))
}
