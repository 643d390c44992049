use core::fmt;

/// Lexical category of the token a structured-content parser is positioned on.
///
/// The set is closed: host parsers map their own token representation onto
/// these kinds before asking the validator anything. Rendering goes through
/// [`TokenKind::name`], so every diagnostic spells a kind the same way.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    FieldName,
    ValueString,
    ValueNumber,
    ValueBoolean,
    /// Opaque binary payload (e.g. a CBOR byte string).
    ValueEmbeddedObject,
    ValueNull,
    /// The source is exhausted.
    EndOfStream,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::StartObject,
        TokenKind::EndObject,
        TokenKind::StartArray,
        TokenKind::EndArray,
        TokenKind::FieldName,
        TokenKind::ValueString,
        TokenKind::ValueNumber,
        TokenKind::ValueBoolean,
        TokenKind::ValueEmbeddedObject,
        TokenKind::ValueNull,
        TokenKind::EndOfStream,
    ];

    /// Canonical display name, e.g. `FIELD_NAME`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::StartObject => "START_OBJECT",
            TokenKind::EndObject => "END_OBJECT",
            TokenKind::StartArray => "START_ARRAY",
            TokenKind::EndArray => "END_ARRAY",
            TokenKind::FieldName => "FIELD_NAME",
            TokenKind::ValueString => "VALUE_STRING",
            TokenKind::ValueNumber => "VALUE_NUMBER",
            TokenKind::ValueBoolean => "VALUE_BOOLEAN",
            TokenKind::ValueEmbeddedObject => "VALUE_EMBEDDED_OBJECT",
            TokenKind::ValueNull => "VALUE_NULL",
            TokenKind::EndOfStream => "END_OF_STREAM",
        }
    }

    /// Returns `true` for scalar, embedded and null value tokens.
    #[inline]
    pub const fn is_value(self) -> bool {
        matches!(
            self,
            TokenKind::ValueString
                | TokenKind::ValueNumber
                | TokenKind::ValueBoolean
                | TokenKind::ValueEmbeddedObject
                | TokenKind::ValueNull
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
