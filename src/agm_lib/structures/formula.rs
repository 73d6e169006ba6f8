/*!
Formulas, as binary trees over atoms.

Each node exclusively owns its children, and no method mutates a formula in place.
Rewrites (see [normalize](crate::procedures::normalize)) consume a formula and return a new one.

```rust
# use agm_lib::structures::formula::Formula;
let formula: Formula = "A ∧ (B ∨ ¬C)".parse().unwrap();
assert_eq!(formula.to_string(), "A∧(B∨¬C)");

let formula: Formula = "(A -> B) -> C".parse().unwrap();
assert_eq!(formula.to_string(), "(A→B)→C");
```

# Display

Formulas are written with the fewest parentheses needed to read the formula back, given the binding order (loosest first):

↔, →, ∨, ∧, ¬

Conjunction and disjunction are associative, and so chains of either are written without parentheses.
Implication and the biconditional group to the right, so a parenthesis is kept on a left operand of the same connective.
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    parse,
    structures::{atom::Atom, literal::Literal},
    types::err::{self},
};

/// An assignment of truth values to atoms.
pub type Valuation = BTreeMap<Atom, bool>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    Top,
    Bottom,
    Atom(Atom),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

/// Binding strength of a connective, loosest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Iff,
    Implies,
    Or,
    And,
    Not,
    Atomic,
}

impl Formula {
    pub fn atom(atom: Atom) -> Self {
        Formula::Atom(atom)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Formula::Not(Box::new(self))
    }

    pub fn and(self, other: Formula) -> Self {
        Formula::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Formula) -> Self {
        Formula::Or(Box::new(self), Box::new(other))
    }

    pub fn implies(self, other: Formula) -> Self {
        Formula::Implies(Box::new(self), Box::new(other))
    }

    pub fn iff(self, other: Formula) -> Self {
        Formula::Iff(Box::new(self), Box::new(other))
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Formula::Top | Formula::Bottom | Formula::Atom(_) => Precedence::Atomic,
            Formula::Not(_) => Precedence::Not,
            Formula::And(_, _) => Precedence::And,
            Formula::Or(_, _) => Precedence::Or,
            Formula::Implies(_, _) => Precedence::Implies,
            Formula::Iff(_, _) => Precedence::Iff,
        }
    }

    /// The formula as a literal, if it is an atom or the negation of an atom.
    pub fn as_literal(&self) -> Option<Literal> {
        match self {
            Formula::Atom(atom) => Some(Literal::new(atom.clone(), true)),
            Formula::Not(inner) => match inner.as_ref() {
                Formula::Atom(atom) => Some(Literal::new(atom.clone(), false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// The length of the longest path from the formula to an atom or constant, counting the formula.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((formula, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match formula {
                Formula::Top | Formula::Bottom | Formula::Atom(_) => {}
                Formula::Not(inner) => pending.push((inner.as_ref(), depth + 1)),
                Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                    pending.push((l.as_ref(), depth + 1));
                    pending.push((r.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }

    /// The atoms occurring in the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Formula::Top | Formula::Bottom => {}
            Formula::Atom(atom) => {
                atoms.insert(atom.clone());
            }
            Formula::Not(inner) => inner.collect_atoms(atoms),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                l.collect_atoms(atoms);
                r.collect_atoms(atoms);
            }
        }
    }

    /// The truth value of the formula on the valuation.
    /// Atoms without a value on the valuation are read as false.
    pub fn evaluate(&self, valuation: &Valuation) -> bool {
        match self {
            Formula::Top => true,
            Formula::Bottom => false,
            Formula::Atom(atom) => valuation.get(atom).copied().unwrap_or(false),
            Formula::Not(inner) => !inner.evaluate(valuation),
            Formula::And(l, r) => l.evaluate(valuation) && r.evaluate(valuation),
            Formula::Or(l, r) => l.evaluate(valuation) || r.evaluate(valuation),
            Formula::Implies(l, r) => !l.evaluate(valuation) || r.evaluate(valuation),
            Formula::Iff(l, r) => l.evaluate(valuation) == r.evaluate(valuation),
        }
    }

    fn write_operand(
        &self,
        f: &mut std::fmt::Formatter,
        parent: Precedence,
        grouped: bool,
    ) -> std::fmt::Result {
        let own = self.precedence();
        if own < parent || (grouped && own == parent) {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }

    fn write_binary(
        f: &mut std::fmt::Formatter,
        precedence: Precedence,
        symbol: &str,
        left: &Formula,
        right: &Formula,
    ) -> std::fmt::Result {
        // → and ↔ group to the right, so an equal left operand keeps its parentheses.
        let right_grouping = matches!(precedence, Precedence::Implies | Precedence::Iff);
        left.write_operand(f, precedence, right_grouping)?;
        write!(f, "{symbol}")?;
        right.write_operand(f, precedence, false)
    }
}

impl std::str::FromStr for Formula {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Formula::Top => write!(f, "⊤"),
            Formula::Bottom => write!(f, "⊥"),
            Formula::Atom(atom) => write!(f, "{atom}"),
            Formula::Not(inner) => {
                write!(f, "¬")?;
                inner.write_operand(f, Precedence::Not, false)
            }
            Formula::And(l, r) => Formula::write_binary(f, Precedence::And, "∧", l, r),
            Formula::Or(l, r) => Formula::write_binary(f, Precedence::Or, "∨", l, r),
            Formula::Implies(l, r) => Formula::write_binary(f, Precedence::Implies, "→", l, r),
            Formula::Iff(l, r) => Formula::write_binary(f, Precedence::Iff, "↔", l, r),
        }
    }
}

impl From<Literal> for Formula {
    fn from(literal: Literal) -> Self {
        let polarity = literal.polarity();
        let formula = Formula::Atom(literal.atom().clone());
        match polarity {
            true => formula,
            false => formula.not(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::atom(Atom::try_from(name).unwrap())
    }

    #[test]
    fn minimal_parentheses() {
        let formula = atom("A").or(atom("B")).and(atom("C"));
        assert_eq!(formula.to_string(), "(A∨B)∧C");

        let formula = atom("A").and(atom("B")).or(atom("C"));
        assert_eq!(formula.to_string(), "A∧B∨C");

        let formula = atom("A").and(atom("B")).not();
        assert_eq!(formula.to_string(), "¬(A∧B)");

        let formula = atom("A").not().not();
        assert_eq!(formula.to_string(), "¬¬A");
    }

    #[test]
    fn associative_chains() {
        let formula = atom("A").and(atom("B").and(atom("C")));
        assert_eq!(formula.to_string(), "A∧B∧C");

        let formula = atom("A").or(atom("B")).or(atom("C"));
        assert_eq!(formula.to_string(), "A∨B∨C");
    }

    #[test]
    fn implication_groups_right() {
        let formula = atom("A").implies(atom("B").implies(atom("C")));
        assert_eq!(formula.to_string(), "A→B→C");

        let formula = atom("A").implies(atom("B")).implies(atom("C"));
        assert_eq!(formula.to_string(), "(A→B)→C");
    }

    #[test]
    fn evaluation() {
        let formula = atom("A").implies(atom("B"));
        let mut valuation = Valuation::new();
        valuation.insert(Atom::try_from("A").unwrap(), true);
        assert!(!formula.evaluate(&valuation));

        valuation.insert(Atom::try_from("B").unwrap(), true);
        assert!(formula.evaluate(&valuation));

        assert!(Formula::Top.evaluate(&Valuation::new()));
        assert!(!Formula::Bottom.evaluate(&Valuation::new()));
    }

    #[test]
    fn depth() {
        assert_eq!(atom("A").depth(), 1);
        assert_eq!(atom("A").not().not().depth(), 3);
        assert_eq!(atom("A").and(atom("B").or(atom("C").not())).depth(), 4);
    }
}
