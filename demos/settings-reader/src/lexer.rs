use fieldguard::TokenKind;
use logos::Logos;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized input at byte {offset}")]
pub struct LexError {
    pub offset: usize,
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("null")]
    Null,

    #[token("true")]
    #[token("false")]
    Bool,

    // Escapes are kept as written.
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    String(String),

    #[regex(r"-?(?:0|[1-9]\d*)(?:\.\d+)?(?:[eE][+-]?\d+)?")]
    Number,
}

/// One parser-level token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Field name in effect: the key itself for `FIELD_NAME`, the enclosing
    /// key for values and containers.
    pub name: Option<String>,
    /// Scalar text, without quotes for strings.
    pub text: Option<String>,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

enum Frame {
    Object {
        name: Option<String>,
        key: Option<String>,
        expect_key: bool,
    },
    Array {
        name: Option<String>,
    },
}

fn current_name(stack: &[Frame]) -> Option<String> {
    match stack.last() {
        Some(Frame::Object { key, .. }) => key.clone(),
        Some(Frame::Array { name }) => name.clone(),
        None => None,
    }
}

/// Splits `src` into tokens, classifying object keys as field names.
///
/// Only the token stream is produced; punctuation order is not checked.
pub fn lex(src: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexeme::lexer(src);
    let mut stack: Vec<Frame> = Vec::new();
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let offset = lexer.span().start;
        let lexeme = lexeme.map_err(|_| LexError { offset })?;

        let (kind, text) = match lexeme {
            Lexeme::Colon => continue,
            Lexeme::Comma => {
                if let Some(Frame::Object { expect_key, .. }) = stack.last_mut() {
                    *expect_key = true;
                }
                continue;
            }
            Lexeme::LBrace => {
                let name = current_name(&stack);
                tokens.push(Token {
                    kind: TokenKind::StartObject,
                    name: name.clone(),
                    text: None,
                    offset,
                });
                stack.push(Frame::Object {
                    name,
                    key: None,
                    expect_key: true,
                });
                continue;
            }
            Lexeme::LBracket => {
                let name = current_name(&stack);
                tokens.push(Token {
                    kind: TokenKind::StartArray,
                    name: name.clone(),
                    text: None,
                    offset,
                });
                stack.push(Frame::Array { name });
                continue;
            }
            Lexeme::RBrace | Lexeme::RBracket => {
                let kind = if lexeme == Lexeme::RBrace {
                    TokenKind::EndObject
                } else {
                    TokenKind::EndArray
                };
                let name = match stack.pop() {
                    Some(Frame::Object { name, .. }) | Some(Frame::Array { name }) => name,
                    None => None,
                };
                tokens.push(Token {
                    kind,
                    name,
                    text: None,
                    offset,
                });
                continue;
            }
            Lexeme::String(s) => {
                if let Some(Frame::Object {
                    key, expect_key, ..
                }) = stack.last_mut()
                {
                    if *expect_key {
                        *expect_key = false;
                        *key = Some(s.clone());
                        tokens.push(Token {
                            kind: TokenKind::FieldName,
                            name: Some(s),
                            text: None,
                            offset,
                        });
                        continue;
                    }
                }
                (TokenKind::ValueString, Some(s))
            }
            Lexeme::Number => (TokenKind::ValueNumber, Some(lexer.slice().to_string())),
            Lexeme::Bool => (TokenKind::ValueBoolean, Some(lexer.slice().to_string())),
            Lexeme::Null => (TokenKind::ValueNull, None),
        };

        tokens.push(Token {
            kind,
            name: current_name(&stack),
            text,
            offset,
        });
    }

    Ok(tokens)
}
