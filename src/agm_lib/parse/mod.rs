/*!
Reading formulas from text.

```rust
# use agm_lib::parse::parse;
# use agm_lib::types::err::ParseError;
let formula = parse("¬(A ∧ B) → C").unwrap();
assert_eq!(formula.to_string(), "¬(A∧B)→C");

assert_eq!(parse("  "), Err(ParseError::Empty));
assert_eq!(parse("(A ∧ B"), Err(ParseError::MissingClose { position: 0 }));
assert_eq!(parse("A ∧ B)"), Err(ParseError::UnmatchedClose { position: 5 }));
```

Conjunction and disjunction chain to the left, implication and the biconditional to the right.
*/

pub mod lexer;
pub mod parser;

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// Parses the text as a single formula.
pub fn parse(text: &str) -> Result<Formula, err::ParseError> {
    let lexemes = lexer::tokenize(text)?;
    let mut parser = parser::Parser::new(lexemes, text.chars().count());
    let result = parser.formula();

    match &result {
        Ok(formula) => log::trace!(target: targets::PARSE, "Parsed '{text}' as {formula}"),
        Err(e) => log::debug!(target: targets::PARSE, "Failed to parse '{text}': {e}"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert_eq!(parse("A ∨ B ∧ C").unwrap(), parse("A ∨ (B ∧ C)").unwrap());
        assert_eq!(parse("¬A ∧ B").unwrap(), parse("(¬A) ∧ B").unwrap());
        assert_eq!(parse("A ∧ B → C ∨ D").unwrap(), parse("(A ∧ B) → (C ∨ D)").unwrap());
        assert_eq!(parse("A → B ↔ C").unwrap(), parse("(A → B) ↔ C").unwrap());
    }

    #[test]
    fn associativity() {
        let a = Formula::atom("A".try_into().unwrap());
        let b = Formula::atom("B".try_into().unwrap());
        let c = Formula::atom("C".try_into().unwrap());

        assert_eq!(
            parse("A ∧ B ∧ C").unwrap(),
            a.clone().and(b.clone()).and(c.clone())
        );
        assert_eq!(parse("A → B → C").unwrap(), a.implies(b.implies(c)));
    }

    #[test]
    fn constants() {
        assert_eq!(parse("⊤ ∨ ⊥").unwrap(), Formula::Top.or(Formula::Bottom));
    }

    #[test]
    fn malformed() {
        assert_eq!(parse(""), Err(err::ParseError::Empty));
        assert_eq!(parse("A ∧"), Err(err::ParseError::ExpectedOperand { position: 3 }));
        assert_eq!(parse("∧ A"), Err(err::ParseError::ExpectedOperand { position: 0 }));
        assert_eq!(parse("A B"), Err(err::ParseError::TrailingInput { position: 2 }));
        assert_eq!(parse("()"), Err(err::ParseError::ExpectedOperand { position: 1 }));
        assert_eq!(parse(")A"), Err(err::ParseError::UnmatchedClose { position: 0 }));
        assert_eq!(parse("((A)"), Err(err::ParseError::MissingClose { position: 0 }));
        assert!(matches!(
            parse("A ∧ x"),
            Err(err::ParseError::UnknownSymbol { symbol: 'x', .. })
        ));
    }

    #[test]
    fn depth_limit() {
        let too_deep = Err(err::ParseError::TooDeep {
            limit: parser::MAX_DEPTH,
        });

        let nested = |depth: usize| format!("{}A{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&nested(100)).unwrap(), Formula::atom("A".try_into().unwrap()));
        assert_eq!(parse(&nested(1000)), too_deep);
        assert_eq!(parse(&nested(100_000)), too_deep);

        assert_eq!(parse(&format!("{}A", "¬".repeat(1000))), too_deep);
        assert_eq!(parse(&format!("{}A", "A→".repeat(1000))), too_deep);
        assert_eq!(parse(&vec!["A"; 1000].join("∧")), too_deep);
        assert!(parse(&vec!["A"; 100].join("∧")).is_ok());
    }
}
