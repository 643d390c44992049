use core::fmt;

/// Where in the input a token was found.
///
/// Coordinates are 1-based. Sources that cannot resolve a position report
/// [`Location::UNKNOWN`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const UNKNOWN: Self = Self { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    #[inline]
    pub const fn is_known(&self) -> bool {
        self.line != 0 && self.column != 0
    }
}

impl Default for Location {
    #[inline]
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            f.write_str("?:?")
        }
    }
}
