//! Error types shared by the operator algebra, the triplet codec and the
//! space-group table.

use thiserror::Error;

/// What went wrong while reading triplet text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected exactly two commas in triplet, found {0}")]
    WrongCommaCount(usize),
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("two signs without a term between them")]
    DuplicateSign,
    #[error("term not preceded by a sign")]
    MissingSign,
    #[error("trailing sign")]
    TrailingSign,
    #[error("empty expression")]
    EmptyExpression,
    #[error("unexpected denominator {0}")]
    InvalidDenominator(i64),
    #[error("missing denominator after '/'")]
    MissingDenominator,
    #[error("value out of range")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymmetryError {
    /// Malformed triplet text. `offset` is the byte offset of the offending
    /// character in the text handed to the parser.
    #[error("{kind} at offset {offset} in: {fragment}")]
    Parse {
        kind: ParseErrorKind,
        fragment: String,
        offset: usize,
    },
    /// A coefficient no longer fits the 8-bit operator storage.
    #[error("coefficient overflow in {operation}")]
    Overflow { operation: &'static str },
    #[error("rotation with determinant {determinant} has no integer inverse")]
    NotInvertible { determinant: i32 },
    #[error("space group not found: {0}")]
    LookupMiss(String),
}

impl SymmetryError {
    pub(crate) fn parse(kind: ParseErrorKind, fragment: &str, offset: usize) -> Self {
        SymmetryError::Parse {
            kind,
            fragment: fragment.to_string(),
            offset,
        }
    }

    /// Shift the offset of a parse error found in a sub-expression so it
    /// points into the full text.
    pub(crate) fn shifted(self, base: usize) -> Self {
        match self {
            SymmetryError::Parse {
                kind,
                fragment,
                offset,
            } => SymmetryError::Parse {
                kind,
                fragment,
                offset: base + offset,
            },
            other => other,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, SymmetryError::Parse { .. })
    }

    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            SymmetryError::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
