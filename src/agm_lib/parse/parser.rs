use crate::{
    parse::lexer::{Lexeme, Token},
    structures::{atom::Atom, formula::Formula},
    types::err::{self},
};

/// The greatest depth of a formula, counting each connective and atom on the longest path.
///
/// Rewrites of a formula recurse on its structure, so a limit keeps very deep input from exhausting the stack.
pub const MAX_DEPTH: usize = 512;

/// Recursive-descent parser for [Formula]s, over a tokenized input.
///
/// The grammar, loosest binding first:
///
/// ```text
/// iff     := implies ( '↔' iff )?
/// implies := or ( '→' implies )?
/// or      := and ( '∨' and )*
/// and     := unary ( '∧' unary )*
/// unary   := '¬' unary | '(' iff ')' | ATOM | '⊤' | '⊥'
/// ```
pub struct Parser {
    index: usize,
    /// Nested calls made for negations, parentheses, and the right operands of → and ↔.
    nesting: usize,
    lexemes: Vec<Lexeme>,
    /// The length of the input, in characters.
    end: usize,
}

impl Parser {
    pub fn new(lexemes: Vec<Lexeme>, end: usize) -> Parser {
        Parser {
            index: 0,
            nesting: 0,
            lexemes,
            end,
        }
    }

    fn cur(&self) -> Option<&Token> {
        self.lexemes.get(self.index).map(|lexeme| &lexeme.token)
    }

    fn position(&self) -> usize {
        match self.lexemes.get(self.index) {
            Some(lexeme) => lexeme.position,
            None => self.end,
        }
    }

    fn has(&self, token: &Token) -> bool {
        self.cur() == Some(token)
    }

    fn shift(&mut self) {
        self.index += 1;
    }

    fn nest(&mut self) -> Result<(), err::ParseError> {
        self.nesting += 1;
        match self.nesting > MAX_DEPTH {
            true => Err(err::ParseError::TooDeep { limit: MAX_DEPTH }),
            false => Ok(()),
        }
    }

    fn unnest(&mut self) {
        self.nesting -= 1;
    }

    /// Reads a complete formula, requiring all input to be consumed.
    pub fn formula(&mut self) -> Result<Formula, err::ParseError> {
        if self.lexemes.is_empty() {
            return Err(err::ParseError::Empty);
        }

        let formula = self.iff()?;

        match self.cur() {
            None if formula.depth() > MAX_DEPTH => Err(err::ParseError::TooDeep { limit: MAX_DEPTH }),
            None => Ok(formula),
            Some(Token::Close) => Err(err::ParseError::UnmatchedClose {
                position: self.position(),
            }),
            Some(_) => Err(err::ParseError::TrailingInput {
                position: self.position(),
            }),
        }
    }

    fn iff(&mut self) -> Result<Formula, err::ParseError> {
        let left = self.implies()?;
        if self.has(&Token::Iff) {
            self.shift();
            self.nest()?;
            let right = self.iff()?;
            self.unnest();
            return Ok(left.iff(right));
        }
        Ok(left)
    }

    fn implies(&mut self) -> Result<Formula, err::ParseError> {
        let left = self.or()?;
        if self.has(&Token::Implies) {
            self.shift();
            self.nest()?;
            let right = self.implies()?;
            self.unnest();
            return Ok(left.implies(right));
        }
        Ok(left)
    }

    fn or(&mut self) -> Result<Formula, err::ParseError> {
        let mut formula = self.and()?;
        while self.has(&Token::Or) {
            self.shift();
            let right = self.and()?;
            formula = formula.or(right);
        }
        Ok(formula)
    }

    fn and(&mut self) -> Result<Formula, err::ParseError> {
        let mut formula = self.unary()?;
        while self.has(&Token::And) {
            self.shift();
            let right = self.unary()?;
            formula = formula.and(right);
        }
        Ok(formula)
    }

    fn unary(&mut self) -> Result<Formula, err::ParseError> {
        let position = self.position();
        let token = match self.cur() {
            Some(token) => token.clone(),
            None => return Err(err::ParseError::ExpectedOperand { position }),
        };

        match token {
            Token::Not => {
                self.shift();
                self.nest()?;
                let inner = self.unary()?;
                self.unnest();
                Ok(inner.not())
            }

            Token::Open => {
                self.shift();
                self.nest()?;
                let inner = self.iff()?;
                self.unnest();
                if !self.has(&Token::Close) {
                    return Err(err::ParseError::MissingClose { position });
                }
                self.shift();
                Ok(inner)
            }

            Token::Atom(name) => {
                self.shift();
                Ok(Formula::atom(Atom::try_from(name.as_str())?))
            }

            Token::Top => {
                self.shift();
                Ok(Formula::Top)
            }

            Token::Bottom => {
                self.shift();
                Ok(Formula::Bottom)
            }

            Token::Close if !self.inside_parentheses() => {
                Err(err::ParseError::UnmatchedClose { position })
            }

            _ => Err(err::ParseError::ExpectedOperand { position }),
        }
    }

    /// Whether an unclosed `(` precedes the current token.
    fn inside_parentheses(&self) -> bool {
        let mut depth = 0_isize;
        for lexeme in &self.lexemes[..self.index] {
            match lexeme.token {
                Token::Open => depth += 1,
                Token::Close => depth -= 1,
                _ => {}
            }
        }
        depth > 0
    }
}
