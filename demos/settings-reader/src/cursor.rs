use std::cell::Cell;

use fieldguard::{Location, TokenKind, TokenSource};

use crate::lexer::{LexError, Token, lex};

/// Forward-only cursor over lexed tokens.
///
/// Starts before the first token; call [`Cursor::advance`] to move onto it.
/// Only byte offsets are kept, so [`TokenSource::token_location`] rescans
/// the source each time it is asked.
pub struct Cursor<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: Option<usize>,
    lookups: Cell<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Result<Self, LexError> {
        Ok(Self {
            src,
            tokens: lex(src)?,
            pos: None,
            lookups: Cell::new(0),
        })
    }

    /// Moves to the next token and returns its kind.
    pub fn advance(&mut self) -> TokenKind {
        self.pos = Some(self.pos.map_or(0, |p| p.saturating_add(1)).min(self.tokens.len()));
        self.current_token()
    }

    /// Scalar text of the current token.
    pub fn text(&self) -> Option<&str> {
        self.current().and_then(|t| t.text.as_deref())
    }

    /// Number of location lookups performed so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    fn current(&self) -> Option<&Token> {
        self.pos.and_then(|p| self.tokens.get(p))
    }
}

impl TokenSource for Cursor<'_> {
    fn current_token(&self) -> TokenKind {
        self.current()
            .map(|t| t.kind)
            .unwrap_or(TokenKind::EndOfStream)
    }

    fn current_name(&self) -> Option<&str> {
        self.current().and_then(|t| t.name.as_deref())
    }

    fn token_location(&self) -> Location {
        self.lookups.set(self.lookups.get() + 1);

        let offset = self.current().map_or(self.src.len(), |t| t.offset);
        let prefix = &self.src[..offset];
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix[line_start..].chars().count() + 1;
        Location::new(line, column)
    }
}
