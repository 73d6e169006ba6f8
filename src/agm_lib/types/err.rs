//! Error types used in the library.
//!
//! - A [ParseError] is the only error a caller should expect from revision in ordinary use, as it follows from malformed input.
//! - A [ClausalError] follows from asking for the clauses of a string which is not in conjunctive normal form.
//! - A [StoreError] follows from a failure to load or save a base.
//!
//! Conflicts which revision fails to resolve are *not* errors, and are reported through [reports](crate::reports).
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Clausal(ClausalError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Clausal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when reading a formula.
///
/// Positions are character offsets into the input, counted from zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input contained no formula.
    Empty,

    /// A character which is neither an atom, a connective, nor a parenthesis.
    UnknownSymbol { symbol: char, position: usize },

    /// A `)` without a matching `(`.
    UnmatchedClose { position: usize },

    /// A `(` which was never closed.
    MissingClose { position: usize },

    /// A connective without some operand.
    ExpectedOperand { position: usize },

    /// A complete formula followed by something else.
    TrailingInput { position: usize },

    /// An atom which is not a run of uppercase letters.
    InvalidAtom(String),

    /// A formula nested deeper than the limit on depth.
    TooDeep { limit: usize },
}

impl ParseError {
    /// The character offset of the error, if the error has some position.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnknownSymbol { position, .. }
            | Self::UnmatchedClose { position }
            | Self::MissingClose { position }
            | Self::ExpectedOperand { position }
            | Self::TrailingInput { position } => Some(*position),
            Self::Empty | Self::InvalidAtom(_) | Self::TooDeep { .. } => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::UnknownSymbol { symbol, position } => {
                write!(f, "unknown symbol '{symbol}' at {position}")
            }
            Self::UnmatchedClose { position } => write!(f, "unmatched ')' at {position}"),
            Self::MissingClose { position } => write!(f, "missing ')' for '(' at {position}"),
            Self::ExpectedOperand { position } => write!(f, "expected an operand at {position}"),
            Self::TrailingInput { position } => write!(f, "unexpected input at {position}"),
            Self::InvalidAtom(name) => write!(f, "'{name}' is not an atom"),
            Self::TooDeep { limit } => write!(f, "formula nested deeper than {limit}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors when reading clauses from a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClausalError {
    /// The formula is not a conjunction of disjunctions of literals.
    NotClausal,
}

impl std::fmt::Display for ClausalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotClausal => write!(f, "formula is not in conjunctive normal form"),
        }
    }
}

impl std::error::Error for ClausalError {}

impl From<ClausalError> for ErrorKind {
    fn from(e: ClausalError) -> Self {
        ErrorKind::Clausal(e)
    }
}

/// Noted errors when loading or saving a base.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// The file could not be read or written.
    Io(std::io::ErrorKind),

    /// The contents of the file are not a base of beliefs.
    Format(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(kind) => write!(f, "unable to access store: {kind}"),
            Self::Format(message) => write!(f, "malformed store: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.kind())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Format(e.to_string())
    }
}
