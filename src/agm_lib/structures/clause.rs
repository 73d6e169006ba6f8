//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as an ordered set of literals, so duplicate literals collapse and two clauses with the same literals are equal.
//!
//! ```rust
//! # use agm_lib::structures::clause::ClauseSet;
//! let clauses = ClauseSet::from_cnf("(A∨¬B∨A)∧C").unwrap();
//! assert_eq!(clauses.len(), 2);
//! assert_eq!(clauses.width(), 2);
//! assert_eq!(clauses.to_string(), "(A∨¬B)∧C");
//! ```
//!
//! - The empty clause is always false (never true), and is written `⊥`.
//! - A set of clauses is interpreted as the conjunction of its clauses, and so the empty set of clauses is always true.

use std::collections::BTreeSet;

use crate::{
    parse,
    structures::{formula::Formula, literal::Literal},
    types::err::{self},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    pub fn new() -> Self {
        Clause::default()
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of (distinct) literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Returns true if the clause was not already present.
    pub fn insert(&mut self, literal: Literal) -> bool {
        self.literals.insert(literal)
    }

    /// Whether the clause contains some literal and its negation.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|literal| literal.polarity() && self.literals.contains(&literal.negate()))
    }

    /// The resolvent of the clause with `other` on `literal`, if `literal` belongs to the clause and its negation to `other`.
    ///
    /// The resolvent is the union of the two clauses, less `literal` and its negation.
    pub fn resolve_on(&self, other: &Self, literal: &Literal) -> Option<Clause> {
        let complement = literal.negate();
        if !self.contains(literal) || !other.contains(&complement) {
            return None;
        }

        let literals = self
            .literals
            .iter()
            .filter(|l| *l != literal)
            .chain(other.literals.iter().filter(|l| **l != complement))
            .cloned()
            .collect();

        Some(Clause { literals })
    }

    /// Every resolvent of the clause with `other`, one for each complementary pair, in literal order.
    pub fn resolvents(&self, other: &Self) -> Vec<Clause> {
        self.literals
            .iter()
            .filter_map(|literal| self.resolve_on(other, literal))
            .collect()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "⊥");
        }

        let mut sep = false;
        for literal in &self.literals {
            if sep {
                write!(f, "∨")?;
            } else {
                sep = true;
            }
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}

/// A sequence of clauses, interpreted as their conjunction.
///
/// Order is irrelevant to meaning, but is kept stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
}

impl ClauseSet {
    pub fn new() -> Self {
        ClauseSet::default()
    }

    /// Reads the clauses of a formula string in conjunctive normal form.
    pub fn from_cnf(cnf: &str) -> Result<Self, err::ErrorKind> {
        let formula = parse::parse(cnf)?;
        Ok(ClauseSet::try_from(&formula)?)
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause)
    }

    /// Appends the clauses of `other`, in order.
    pub fn extend_from(&mut self, other: &ClauseSet) {
        self.clauses.extend(other.clauses.iter().cloned())
    }

    /// The size of the largest clause, or zero if there are no clauses.
    pub fn width(&self) -> usize {
        self.clauses.iter().map(Clause::size).max().unwrap_or(0)
    }

    /// Whether the set contains the empty clause, and so is trivially inconsistent.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    /// The conjunction of some sets of clauses.
    pub fn union<'s>(sets: impl IntoIterator<Item = &'s ClauseSet>) -> ClauseSet {
        let mut union = ClauseSet::new();
        for set in sets {
            union.extend_from(set);
        }
        union
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        ClauseSet {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ClauseSet {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl TryFrom<&Formula> for ClauseSet {
    type Error = err::ClausalError;

    /// Splits a formula in conjunctive normal form into clauses.
    ///
    /// Constants are read off directly: a `⊤` conjunct or disjunct yields no clause, a `⊥` disjunct is dropped, and so a `⊥` conjunct yields the empty clause.
    fn try_from(formula: &Formula) -> Result<Self, Self::Error> {
        let mut conjuncts = Vec::default();
        split_conjuncts(formula, &mut conjuncts);

        let mut clauses = ClauseSet::new();
        for conjunct in conjuncts {
            let mut clause = Clause::new();
            if read_disjuncts(conjunct, &mut clause)? {
                clauses.push(clause);
            }
        }
        Ok(clauses)
    }
}

fn split_conjuncts<'f>(formula: &'f Formula, conjuncts: &mut Vec<&'f Formula>) {
    match formula {
        Formula::And(l, r) => {
            split_conjuncts(l, conjuncts);
            split_conjuncts(r, conjuncts);
        }
        other => conjuncts.push(other),
    }
}

/// Adds the literals of a disjunction to the clause.
/// Returns false if the disjunction is true by virtue of some `⊤`.
fn read_disjuncts(formula: &Formula, clause: &mut Clause) -> Result<bool, err::ClausalError> {
    match formula {
        Formula::Or(l, r) => Ok(read_disjuncts(l, clause)? & read_disjuncts(r, clause)?),
        Formula::Top => Ok(false),
        Formula::Bottom => Ok(true),
        other => match other.as_literal() {
            Some(literal) => {
                clause.insert(literal);
                Ok(true)
            }
            None => Err(err::ClausalError::NotClausal),
        },
    }
}

impl std::fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "⊤");
        }
        let many = self.clauses.len() > 1;

        let mut sep = false;
        for clause in &self.clauses {
            if sep {
                write!(f, "∧")?;
            } else {
                sep = true;
            }
            match many && clause.size() > 1 {
                true => write!(f, "({clause})")?,
                false => write!(f, "{clause}")?,
            }
        }
        Ok(())
    }
}
