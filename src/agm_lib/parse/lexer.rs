//! Splits formula text into tokens.
//!
//! Each connective has a symbolic form and an ASCII form:
//!
//! | connective | symbol | ASCII |
//! |---|---|---|
//! | negation | `¬` | `!` or `~` |
//! | conjunction | `∧` | `&` |
//! | disjunction | `∨` | `\|` |
//! | implication | `→` | `->` |
//! | biconditional | `↔` | `<->` |
//!
//! In addition `⊤` and `⊥` are the constants true and false, and maximal runs of uppercase letters are atoms.
//! Whitespace separates tokens and is otherwise ignored.

use crate::{
    structures::atom::Atom,
    types::err::{self},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Atom(String),
    Top,
    Bottom,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Atom(name) => write!(f, "{name}"),
            Token::Top => write!(f, "⊤"),
            Token::Bottom => write!(f, "⊥"),
            Token::Not => write!(f, "¬"),
            Token::And => write!(f, "∧"),
            Token::Or => write!(f, "∨"),
            Token::Implies => write!(f, "→"),
            Token::Iff => write!(f, "↔"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

/// A token paired with the (character) position at which it begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

/// Tokenizes the whole of the input, or fails on the first unknown symbol.
pub fn tokenize(text: &str) -> Result<Vec<Lexeme>, err::ParseError> {
    let input = text.chars().collect::<Vec<_>>();
    let mut lexemes = Vec::default();
    let mut index = 0;

    while index < input.len() {
        let position = index;
        let here = input[index];

        if here.is_whitespace() {
            index += 1;
            continue;
        }

        if Atom::is_atom_char(here) {
            while index < input.len() && Atom::is_atom_char(input[index]) {
                index += 1;
            }
            let name = input[position..index].iter().collect::<String>();
            lexemes.push(Lexeme {
                token: Token::Atom(name),
                position,
            });
            continue;
        }

        let (token, width) = match (here, input.get(index + 1), input.get(index + 2)) {
            ('¬' | '!' | '~', _, _) => (Token::Not, 1),
            ('∧' | '&', _, _) => (Token::And, 1),
            ('∨' | '|', _, _) => (Token::Or, 1),
            ('→', _, _) => (Token::Implies, 1),
            ('↔', _, _) => (Token::Iff, 1),
            ('-', Some('>'), _) => (Token::Implies, 2),
            ('<', Some('-'), Some('>')) => (Token::Iff, 3),
            ('⊤', _, _) => (Token::Top, 1),
            ('⊥', _, _) => (Token::Bottom, 1),
            ('(', _, _) => (Token::Open, 1),
            (')', _, _) => (Token::Close, 1),
            (symbol, _, _) => return Err(err::ParseError::UnknownSymbol { symbol, position }),
        };

        lexemes.push(Lexeme { token, position });
        index += width;
    }

    Ok(lexemes)
}
